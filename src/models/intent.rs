use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported command languages, as two-letter tags at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    No,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "no" => Ok(Locale::No),
            other => Err(format!("unsupported locale `{}`; expected en|no", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::No => write!(f, "no"),
        }
    }
}

/// A structured schedule command, produced from one utterance and consumed
/// once by the caller. A failed parse is `None`, never a default intent.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Intent {
    Add {
        title: String,
        start: DateTime<Utc>,
        duration_min: i64,
    },
    Move {
        title: String,
        start: DateTime<Utc>,
    },
    Delete {
        title: String,
    },
    Read,
}
