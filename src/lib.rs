//! Voice/text schedule commands and daily timeline reflow.
//! Pure functions only: the caller owns storage and write serialization.

pub mod models;
pub mod service;

pub use models::block::{
    Block, Location, DEFAULT_BLOCK_MINUTES, MAX_BLOCK_MINUTES, MIN_BLOCK_MINUTES,
};
pub use models::intent::{Intent, Locale};
pub use service::parser::{parse_command, parse_command_with};
pub use service::snap::{snap_to_five_minutes, with_travel_buffer};
pub use service::time_extract::{PatternTimeExtractor, TimeExtractor};
pub use service::timeline::{
    adjust_for_insertion, compute_buffer, next_upcoming, reorder, TimelineError,
};
