use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageCategory {
    #[serde(rename = "promocao")]
    Promotion,
    #[serde(rename = "lembrete")]
    Reminder,
    #[serde(rename = "alerta")]
    Alert,
}

impl MessageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageCategory::Promotion => "promocao",
            MessageCategory::Reminder => "lembrete",
            MessageCategory::Alert => "alerta",
        }
    }
}

impl Display for MessageCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    category: MessageCategory,
    content: String,
}

impl Message {
    pub fn new(category: MessageCategory, content: impl Into<String>) -> Self {
        Self {
            category,
            content: content.into(),
        }
    }

    pub fn category(&self) -> MessageCategory {
        self.category
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
