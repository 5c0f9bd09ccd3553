use std::any::Any;

use anyhow::Result;

use crate::{
    channels::notifiable::Notifiable,
    models::{
        kind::ChannelKind, message::Message, priority::Priority,
        validation::validate_phone_number,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sms {
    message: Message,
    priority: Priority,
    phone_number: String,
}

impl Sms {
    pub fn new(message: Message, priority: Priority, phone_number: impl Into<String>) -> Self {
        Self {
            message,
            priority,
            phone_number: phone_number.into(),
        }
    }
}

impl Notifiable for Sms {
    fn message(&self) -> &Message {
        &self.message
    }

    fn priority(&self) -> Priority {
        self.priority
    }

    fn destination(&self) -> &str {
        &self.phone_number
    }

    fn kind(&self) -> ChannelKind {
        ChannelKind::Sms
    }

    fn validate(&self) -> Result<()> {
        validate_phone_number(&self.phone_number)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
