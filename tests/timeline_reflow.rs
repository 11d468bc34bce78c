use chrono::{TimeZone, Utc};
use dayplan::models::block::Block;
use dayplan::service::timeline::{
    adjust_for_insertion, compute_buffer, next_upcoming, reorder, TimelineError,
};

fn block(id: &str, title: &str, hour: u32, minute: u32, duration_min: i64) -> Block {
    Block {
        id: id.to_string(),
        title: title.to_string(),
        start: Utc.with_ymd_and_hms(2024, 1, 1, hour, minute, 0).unwrap(),
        duration_min,
        location: None,
        notes: None,
        place_ref: None,
    }
}

fn day() -> Vec<Block> {
    vec![
        block("a", "standup", 9, 0, 30),
        block("b", "deep work", 10, 0, 60),
        block("c", "lunch", 12, 0, 45),
    ]
}

#[test]
fn reorder_anchors_first_block_and_packs_back_to_back() {
    let blocks = day();
    let order = vec!["b".to_string(), "a".to_string(), "c".to_string()];

    let result = reorder(&blocks, &order).unwrap();

    let by_id = |id: &str| result.iter().find(|b| b.id == id).unwrap();
    // b keeps its start; a follows b's 60 minutes; c follows a's 30.
    assert_eq!(by_id("b").start, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
    assert_eq!(by_id("a").start, Utc.with_ymd_and_hms(2024, 1, 1, 11, 0, 0).unwrap());
    assert_eq!(by_id("c").start, Utc.with_ymd_and_hms(2024, 1, 1, 11, 30, 0).unwrap());
}

#[test]
fn reorder_result_is_sorted_by_start() {
    let blocks = day();
    let order = vec!["c".to_string(), "b".to_string(), "a".to_string()];

    let result = reorder(&blocks, &order).unwrap();

    let starts: Vec<_> = result.iter().map(|b| b.start).collect();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted);
}

#[test]
fn reorder_subset_leaves_unnamed_blocks_untouched() {
    let blocks = day();
    let order = vec!["c".to_string(), "a".to_string()];

    let result = reorder(&blocks, &order).unwrap();

    let by_id = |id: &str| result.iter().find(|b| b.id == id).unwrap();
    assert_eq!(by_id("c").start, Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());
    assert_eq!(by_id("a").start, Utc.with_ymd_and_hms(2024, 1, 1, 12, 45, 0).unwrap());
    // b was not named and keeps its absolute time.
    assert_eq!(by_id("b").start, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
}

#[test]
fn reorder_skips_unknown_ids() {
    let blocks = day();
    let order = vec!["a".to_string(), "ghost".to_string(), "b".to_string()];

    let result = reorder(&blocks, &order).unwrap();

    let by_id = |id: &str| result.iter().find(|b| b.id == id).unwrap();
    assert_eq!(by_id("a").start, Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
    assert_eq!(by_id("b").start, Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap());
}

#[test]
fn reorder_with_no_matching_blocks_is_an_error() {
    let blocks = day();
    assert_eq!(reorder(&blocks, &[]), Err(TimelineError::BlocksNotFound));
    assert_eq!(
        reorder(&blocks, &["ghost".to_string()]),
        Err(TimelineError::BlocksNotFound)
    );
    // The caller's input is untouched either way.
    assert_eq!(blocks, day());
}

#[test]
fn insertion_shifts_tail_by_duration_plus_travel() {
    let blocks = day();

    let result = adjust_for_insertion(&blocks, 1, 30, 10);

    assert_eq!(result[0].start, blocks[0].start);
    assert_eq!(
        result[1].start,
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 40, 0).unwrap()
    );
    assert_eq!(
        result[2].start,
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 40, 0).unwrap()
    );
    // Relative spacing among shifted blocks is preserved.
    assert_eq!(result[2].start - result[1].start, blocks[2].start - blocks[1].start);
}

#[test]
fn insertion_at_the_front_shifts_everything() {
    let blocks = day();
    let result = adjust_for_insertion(&blocks, 0, 15, 0);
    for (shifted, original) in result.iter().zip(blocks.iter()) {
        assert_eq!(shifted.start, original.start + chrono::Duration::minutes(15));
    }
}

#[test]
fn insertion_past_the_end_is_a_no_op() {
    let blocks = day();
    assert_eq!(adjust_for_insertion(&blocks, 5, 30, 10), blocks);
}

#[test]
fn buffer_is_exact_when_next_follows_prev() {
    let prev_end = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
    let next_start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 45, 0).unwrap();
    assert_eq!(compute_buffer(prev_end, next_start), 15);
}

#[test]
fn buffer_never_goes_negative_on_overlap() {
    let prev_end = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
    let next_start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 45, 0).unwrap();
    assert_eq!(compute_buffer(prev_end, next_start), 0);
}

#[test]
fn next_upcoming_prefers_first_future_block() {
    let blocks = day();
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
    assert_eq!(next_upcoming(&blocks, now).unwrap().id, "b");
}

#[test]
fn next_upcoming_falls_back_to_first_block() {
    let blocks = day();
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 23, 0, 0).unwrap();
    assert_eq!(next_upcoming(&blocks, now).unwrap().id, "a");
    assert!(next_upcoming(&[], now).is_none());
}

#[test]
fn block_constructor_enforces_duration_bounds() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    assert!(Block::new("walk", start, 5).is_some());
    assert!(Block::new("walk", start, 720).is_some());
    assert!(Block::new("walk", start, 4).is_none());
    assert!(Block::new("walk", start, 721).is_none());
    assert!(Block::new("  ", start, 30).is_none());

    let a = Block::new("walk", start, 30).unwrap();
    let b = Block::new("walk", start, 30).unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(a.end(), start + chrono::Duration::minutes(30));
}
