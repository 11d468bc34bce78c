use chrono::{DateTime, Duration, Utc};
use log::debug;
use std::collections::HashMap;
use thiserror::Error;

use crate::models::block::Block;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimelineError {
    #[error("no blocks matched the requested order")]
    BlocksNotFound,
}

/// Re-packs blocks in the requested visual order. The first named block
/// anchors the day and keeps its start; every following named block starts
/// where the previous one ends, back to back. Blocks not named in
/// `new_order` keep their original start, which can leave them overlapping
/// the repositioned ones.
pub fn reorder(blocks: &[Block], new_order: &[String]) -> Result<Vec<Block>, TimelineError> {
    let ordered: Vec<&Block> = new_order
        .iter()
        .filter_map(|id| blocks.iter().find(|b| b.id == *id))
        .collect();
    if ordered.is_empty() {
        return Err(TimelineError::BlocksNotFound);
    }

    let mut new_starts: HashMap<&str, DateTime<Utc>> = HashMap::new();
    let mut pointer = ordered[0].start;
    new_starts.insert(ordered[0].id.as_str(), pointer);
    for pair in ordered.windows(2) {
        pointer += Duration::minutes(pair[0].duration_min);
        new_starts.insert(pair[1].id.as_str(), pointer);
    }
    debug!("reorder repositioned {} of {} blocks", ordered.len(), blocks.len());

    let mut result: Vec<Block> = blocks
        .iter()
        .map(|block| {
            let mut updated = block.clone();
            if let Some(start) = new_starts.get(block.id.as_str()) {
                updated.start = *start;
            }
            updated
        })
        .collect();
    sort_by_start(&mut result);
    Ok(result)
}

/// Shifts every block at or after `insert_index` forward by the inserted
/// block's duration plus travel time. Apply once per logical insertion;
/// repeated calls compound the shift.
pub fn adjust_for_insertion(
    blocks: &[Block],
    insert_index: usize,
    duration_min: i64,
    travel_min: i64,
) -> Vec<Block> {
    let carry = Duration::minutes(duration_min + travel_min);
    blocks
        .iter()
        .enumerate()
        .map(|(position, block)| {
            let mut updated = block.clone();
            if position >= insert_index {
                updated.start += carry;
            }
            updated
        })
        .collect()
}

/// Slack between consecutive blocks in whole minutes, floored at zero.
pub fn compute_buffer(prev_end: DateTime<Utc>, next_start: DateTime<Utc>) -> i64 {
    (next_start - prev_end).num_minutes().max(0)
}

/// The block to announce for a read command: the first one starting after
/// `now`, or the day's first block when everything has already started.
pub fn next_upcoming<'a>(blocks: &'a [Block], now: DateTime<Utc>) -> Option<&'a Block> {
    blocks
        .iter()
        .find(|block| block.start > now)
        .or_else(|| blocks.first())
}

/// Stable sort by start; insertion order breaks ties.
pub fn sort_by_start(blocks: &mut [Block]) {
    blocks.sort_by_key(|block| block.start);
}
