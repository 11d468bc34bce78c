use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use log::debug;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Capability boundary for natural-language time resolution. Given free
/// text and a reference instant, returns the first resolvable timestamp,
/// forward-biased: a time-of-day earlier than `reference` with no explicit
/// day word is projected to its next occurrence, never into the past.
pub trait TimeExtractor {
    fn extract(
        &self,
        text: &str,
        reference: DateTime<Utc>,
        tz_hint: Option<Tz>,
    ) -> Option<DateTime<Utc>>;
}

/// Default extractor backed by a small set of regex patterns. Resolution
/// happens in the hinted timezone's wall clock (UTC without a hint).
pub struct PatternTimeExtractor;

struct TimePatterns {
    // 10:15, 9:05am
    clock: Regex,
    // 9am, 9 pm
    bare_meridiem: Regex,
    // at 9, kl 9, kl. 9
    prep_hour: Regex,
}

fn patterns() -> &'static TimePatterns {
    static PATTERNS: OnceLock<TimePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| TimePatterns {
        clock: Regex::new(r"\b(\d{1,2}):(\d{2})(?:\s*(am|pm))?\b")
            .expect("clock pattern compiles"),
        bare_meridiem: Regex::new(r"\b(\d{1,2})\s*(am|pm)\b")
            .expect("bare meridiem pattern compiles"),
        prep_hour: Regex::new(r"\b(?:at|kl)\.?\s+(\d{1,2})\b")
            .expect("preposition hour pattern compiles"),
    })
}

const TOMORROW_WORDS: &[&str] = &["tomorrow", "i morgen"];
const TODAY_WORDS: &[&str] = &["today", "i dag"];

impl TimeExtractor for PatternTimeExtractor {
    fn extract(
        &self,
        text: &str,
        reference: DateTime<Utc>,
        tz_hint: Option<Tz>,
    ) -> Option<DateTime<Utc>> {
        let lower = text.to_lowercase();
        let day_offset = day_offset(&lower);
        let time = time_of_day(&lower);
        if day_offset.is_none() && time.is_none() {
            return None;
        }

        let resolved = match tz_hint {
            Some(tz) => resolve_in_zone(&tz, reference, day_offset, time),
            None => resolve_in_zone(&Utc, reference, day_offset, time),
        };
        if let Some(instant) = resolved {
            debug!("resolved \"{}\" to {}", text.trim(), instant);
        }
        resolved
    }
}

/// Day words override the forward bias: "today" keeps the reference day
/// even when the named time has already passed.
fn day_offset(lower: &str) -> Option<i64> {
    if TOMORROW_WORDS.iter().any(|w| lower.contains(w)) {
        return Some(1);
    }
    if TODAY_WORDS.iter().any(|w| lower.contains(w)) {
        return Some(0);
    }
    None
}

fn time_of_day(lower: &str) -> Option<NaiveTime> {
    let p = patterns();
    if let Some(time) = p.clock.captures(lower).and_then(|caps| clock_time(&caps)) {
        return Some(time);
    }
    if let Some(caps) = p.bare_meridiem.captures(lower) {
        let hour: u32 = caps[1].parse().ok()?;
        if let Some(time) = meridiem_time(hour, 0, &caps[2]) {
            return Some(time);
        }
    }
    if let Some(caps) = p.prep_hour.captures(lower) {
        let hour: u32 = caps[1].parse().ok()?;
        if hour < 24 {
            return NaiveTime::from_hms_opt(hour, 0, 0);
        }
    }
    None
}

fn clock_time(caps: &Captures) -> Option<NaiveTime> {
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    match caps.get(3) {
        Some(meridiem) => meridiem_time(hour, minute, meridiem.as_str()),
        None if hour < 24 && minute < 60 => NaiveTime::from_hms_opt(hour, minute, 0),
        None => None,
    }
}

fn meridiem_time(hour: u32, minute: u32, meridiem: &str) -> Option<NaiveTime> {
    if !(1..=12).contains(&hour) || minute >= 60 {
        return None;
    }
    let hour24 = match (meridiem, hour) {
        ("am", 12) => 0,
        ("am", h) => h,
        ("pm", 12) => 12,
        ("pm", h) => h + 12,
        _ => return None,
    };
    NaiveTime::from_hms_opt(hour24, minute, 0)
}

fn resolve_in_zone<Z: TimeZone>(
    zone: &Z,
    reference: DateTime<Utc>,
    day_offset: Option<i64>,
    time: Option<NaiveTime>,
) -> Option<DateTime<Utc>> {
    let local_ref = reference.with_timezone(zone);
    let date = local_ref.date_naive() + Duration::days(day_offset.unwrap_or(0));
    let time = time.unwrap_or_else(|| local_ref.time());

    let candidate = to_utc(zone, date.and_time(time))?;
    if candidate < reference && day_offset.is_none() {
        return to_utc(zone, (date + Duration::days(1)).and_time(time));
    }
    Some(candidate)
}

fn to_utc<Z: TimeZone>(zone: &Z, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(instant) => Some(instant.with_timezone(&Utc)),
        // DST fold: take the earlier wall-clock reading.
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => None,
    }
}
