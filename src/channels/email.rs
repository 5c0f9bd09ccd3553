use std::any::Any;

use anyhow::Result;

use crate::{
    channels::notifiable::Notifiable,
    models::{
        kind::ChannelKind, message::Message, priority::Priority,
        validation::validate_email_address,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    message: Message,
    priority: Priority,
    address: String,
}

impl Email {
    pub fn new(message: Message, priority: Priority, address: impl Into<String>) -> Self {
        Self {
            message,
            priority,
            address: address.into(),
        }
    }
}

impl Notifiable for Email {
    fn message(&self) -> &Message {
        &self.message
    }

    fn priority(&self) -> Priority {
        self.priority
    }

    fn destination(&self) -> &str {
        &self.address
    }

    fn kind(&self) -> ChannelKind {
        ChannelKind::Email
    }

    fn validate(&self) -> Result<()> {
        validate_email_address(&self.address)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
