use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

pub const URGENT_MARKER: &str = "URGENT ⚠️";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn is_urgent(&self) -> bool {
        *self == Priority::High
    }

    pub fn prefix(&self) -> &'static str {
        if self.is_urgent() { URGENT_MARKER } else { "" }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}
