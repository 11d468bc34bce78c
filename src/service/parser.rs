use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::debug;
use regex::Regex;
use std::sync::OnceLock;

use crate::models::block::{duration_in_bounds, DEFAULT_BLOCK_MINUTES};
use crate::models::intent::{Intent, Locale};
use crate::service::time_extract::{PatternTimeExtractor, TimeExtractor};

/// Trigger words for one locale. Adding a language is a new table entry,
/// not new control flow.
pub struct CommandKeywords {
    pub read_phrases: &'static [&'static str],
    pub add_prefix: &'static str,
    pub add_time_preposition: &'static str,
    pub move_prefix: &'static str,
    pub move_target_preposition: &'static str,
    pub delete_prefix: &'static str,
    pub tz_hint: Option<Tz>,
}

const EN_KEYWORDS: CommandKeywords = CommandKeywords {
    read_phrases: &[
        "what's next",
        "what is next",
        "read my schedule",
        "read schedule",
        "read my plan",
        "read plan",
    ],
    add_prefix: "add",
    add_time_preposition: "at",
    move_prefix: "move",
    move_target_preposition: "to",
    delete_prefix: "delete",
    tz_hint: None,
};

const NO_KEYWORDS: CommandKeywords = CommandKeywords {
    read_phrases: &["hva er neste", "les planen", "les timeplanen"],
    add_prefix: "legg til",
    add_time_preposition: "kl",
    move_prefix: "flytt",
    move_target_preposition: "til",
    delete_prefix: "slett",
    tz_hint: Some(chrono_tz::Europe::Oslo),
};

pub fn keywords(locale: Locale) -> &'static CommandKeywords {
    match locale {
        Locale::En => &EN_KEYWORDS,
        Locale::No => &NO_KEYWORDS,
    }
}

struct LocaleMatchers {
    add_title: Regex,
    move_title: Regex,
}

fn title_matcher(prefix: &str, preposition: &str) -> Regex {
    // Non-greedy: the title runs up to the first preposition occurrence.
    let pattern = format!(
        r#"(?i){}\s+['"]?(.*?)['"]?\s+{}"#,
        regex::escape(prefix),
        regex::escape(preposition)
    );
    Regex::new(&pattern).expect("title pattern compiles")
}

fn matchers(locale: Locale) -> &'static LocaleMatchers {
    static EN: OnceLock<LocaleMatchers> = OnceLock::new();
    static NO: OnceLock<LocaleMatchers> = OnceLock::new();
    let cell = match locale {
        Locale::En => &EN,
        Locale::No => &NO,
    };
    cell.get_or_init(|| {
        let words = keywords(locale);
        LocaleMatchers {
            add_title: title_matcher(words.add_prefix, words.add_time_preposition),
            move_title: title_matcher(words.move_prefix, words.move_target_preposition),
        }
    })
}

fn duration_pattern() -> &'static Regex {
    static DURATION: OnceLock<Regex> = OnceLock::new();
    // "timer" is the Norwegian hour word; the value is still read as
    // minutes, matching the product's observed behavior.
    DURATION.get_or_init(|| {
        Regex::new(r"(?i)(\d{1,3})\s?(minutes?|mins?|timer?)").expect("duration pattern compiles")
    })
}

/// Classifies one utterance into an [`Intent`], using the default
/// time extractor. Returns `None` when the command is not understood;
/// the caller owns user-facing messaging.
pub fn parse_command(text: &str, reference: DateTime<Utc>, locale: Locale) -> Option<Intent> {
    parse_command_with(&PatternTimeExtractor, text, reference, locale)
}

/// Same as [`parse_command`] with a caller-supplied extractor.
pub fn parse_command_with(
    extractor: &dyn TimeExtractor,
    text: &str,
    reference: DateTime<Utc>,
    locale: Locale,
) -> Option<Intent> {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    let words = keywords(locale);

    if words.read_phrases.iter().any(|p| normalized.contains(p)) {
        return Some(Intent::Read);
    }
    if normalized.starts_with(words.add_prefix) {
        return parse_add(extractor, text, reference, locale);
    }
    if normalized.starts_with(words.move_prefix) {
        return parse_move(extractor, text, reference, locale);
    }
    if normalized.starts_with(words.delete_prefix) {
        return parse_delete(text, words);
    }

    debug!("no {} command keyword matched", locale);
    None
}

fn parse_add(
    extractor: &dyn TimeExtractor,
    input: &str,
    reference: DateTime<Utc>,
    locale: Locale,
) -> Option<Intent> {
    let words = keywords(locale);

    let explicit_duration = duration_pattern()
        .captures(input)
        .and_then(|caps| caps[1].parse::<i64>().ok());
    // Remove the duration text so its number cannot be read as a
    // time of day.
    let stripped = duration_pattern().replace(input, "");

    let title = matchers(locale)
        .add_title
        .captures(&stripped)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())?;
    if title.is_empty() {
        return None;
    }

    let start = extractor.extract(&stripped, reference, words.tz_hint)?;

    // An explicit out-of-range duration fails the parse; it is never clamped.
    let duration_min = explicit_duration.unwrap_or(DEFAULT_BLOCK_MINUTES);
    if !duration_in_bounds(duration_min) {
        return None;
    }

    Some(Intent::Add {
        title,
        start,
        duration_min,
    })
}

fn parse_move(
    extractor: &dyn TimeExtractor,
    input: &str,
    reference: DateTime<Utc>,
    locale: Locale,
) -> Option<Intent> {
    let words = keywords(locale);

    let title = matchers(locale)
        .move_title
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())?;
    if title.is_empty() {
        return None;
    }

    let start = extractor.extract(input, reference, words.tz_hint)?;
    Some(Intent::Move { title, start })
}

fn parse_delete(input: &str, words: &CommandKeywords) -> Option<Intent> {
    let trimmed = input.trim();
    // Keywords are ASCII, so the prefix byte length holds for the
    // original casing too.
    let rest = trimmed.get(words.delete_prefix.len()..)?;
    let title = strip_outer_quotes(rest.trim());
    if title.is_empty() {
        return None;
    }
    Some(Intent::Delete {
        title: title.to_string(),
    })
}

/// Strips at most one leading and one trailing quote character.
fn strip_outer_quotes(value: &str) -> &str {
    let value = value.strip_prefix(['\'', '"']).unwrap_or(value);
    value.strip_suffix(['\'', '"']).unwrap_or(value)
}
