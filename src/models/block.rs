use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inclusive bounds for a block's duration, in minutes.
pub const MIN_BLOCK_MINUTES: i64 = 5;
pub const MAX_BLOCK_MINUTES: i64 = 720;

/// Duration assigned to an add command that names no duration.
pub const DEFAULT_BLOCK_MINUTES: i64 = 60;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// One scheduled activity on a day's timeline.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Block {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub duration_min: i64,
    pub location: Option<Location>,
    pub notes: Option<String>,
    pub place_ref: Option<String>,
}

pub fn duration_in_bounds(duration_min: i64) -> bool {
    (MIN_BLOCK_MINUTES..=MAX_BLOCK_MINUTES).contains(&duration_min)
}

impl Block {
    /// Mints a new block with a fresh id. Returns `None` for an empty title
    /// or a duration outside [`MIN_BLOCK_MINUTES`, `MAX_BLOCK_MINUTES`].
    pub fn new(title: &str, start: DateTime<Utc>, duration_min: i64) -> Option<Block> {
        if title.trim().is_empty() || !duration_in_bounds(duration_min) {
            return None;
        }
        Some(Block {
            id: Uuid::new_v4().to_string(),
            title: title.trim().to_string(),
            start,
            duration_min,
            location: None,
            notes: None,
            place_ref: None,
        })
    }

    /// The instant this block ends.
    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::minutes(self.duration_min)
    }
}
