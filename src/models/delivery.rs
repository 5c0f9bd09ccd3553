use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{
    kind::ChannelKind, message::MessageCategory, priority::Priority, status::DeliveryStatus,
};

#[derive(Debug, Clone, Serialize)]
pub struct DeliveryRecord {
    pub id: Uuid,
    pub channel: ChannelKind,
    pub destination: String,
    pub category: MessageCategory,
    pub priority: Priority,
    pub status: DeliveryStatus,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DeliveryRecord {
    pub fn new(
        channel: ChannelKind,
        destination: String,
        category: MessageCategory,
        priority: Priority,
        status: DeliveryStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            channel,
            destination,
            category,
            priority,
            status,
            error_message: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error_message = Some(error);
        self
    }
}
