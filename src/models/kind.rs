use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Email,
    Sms,
    Push,
}

impl ChannelKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ChannelKind::Email => "Email",
            ChannelKind::Sms => "SMS",
            ChannelKind::Push => "Push Notification",
        }
    }
}

impl Display for ChannelKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ChannelKind::Email => write!(f, "email"),
            ChannelKind::Sms => write!(f, "SMS"),
            ChannelKind::Push => write!(f, "push"),
        }
    }
}
