use std::any::Any;

use anyhow::Result;

use crate::{
    channels::notifiable::Notifiable,
    models::{
        kind::ChannelKind, message::Message, priority::Priority,
        validation::validate_device_token,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushNotification {
    message: Message,
    priority: Priority,
    device_token: String,
}

impl PushNotification {
    pub fn new(message: Message, priority: Priority, device_token: impl Into<String>) -> Self {
        Self {
            message,
            priority,
            device_token: device_token.into(),
        }
    }
}

impl Notifiable for PushNotification {
    fn message(&self) -> &Message {
        &self.message
    }

    fn priority(&self) -> Priority {
        self.priority
    }

    fn destination(&self) -> &str {
        &self.device_token
    }

    fn kind(&self) -> ChannelKind {
        ChannelKind::Push
    }

    fn validate(&self) -> Result<()> {
        validate_device_token(&self.device_token)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn address_label(&self) -> String {
        format!("token {}", self.device_token)
    }
}
