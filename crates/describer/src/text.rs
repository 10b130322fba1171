//! Text shortening helpers
//!
//! Two cut strategies are used by descriptions:
//! - [`truncate_words`]: strips markup and never splits a word
//! - [`truncate_chars`]: cuts at an exact character count

use std::sync::LazyLock;

use regex::Regex;

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\n\r]+").expect("line break pattern"));

static TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));

static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").expect("space pattern"));

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);").expect("entity pattern")
});

/// Remove markup and collapse whitespace into single spaces
pub fn normalize(s: &str) -> String {
    let s = LINE_BREAKS.replace_all(s, " ");
    let s = TAGS.replace_all(&s, "");
    let s = SPACES.replace_all(&s, " ");
    s.trim().to_string()
}

/// Character count with each HTML entity counted once
pub fn visible_len(s: &str) -> usize {
    let hidden: usize = ENTITY
        .find_iter(s)
        .map(|m| m.as_str().chars().count() - 1)
        .sum();
    s.chars().count() - hidden
}

/// Word-safe truncation
///
/// Normalises `s`, then keeps whole words while the visible length stays
/// within `max`. `indicator` is appended only when something was cut. When
/// not even the first word fits, the result is the trimmed indicator alone.
pub fn truncate_words(s: &str, max: usize, indicator: &str) -> String {
    let text = normalize(s);
    if visible_len(&text) <= max {
        return text;
    }

    let mut kept = Vec::new();
    let mut used = 0;
    for word in text.split(' ') {
        used += visible_len(word);
        if used > max {
            break;
        }
        kept.push(word);
        // separating space
        used += 1;
    }

    if kept.is_empty() {
        indicator.trim_start().to_string()
    } else {
        kept.join(" ") + indicator
    }
}

/// Plain truncation to exactly `max` characters
///
/// No word or entity awareness; `indicator` is appended only when
/// something was cut.
pub fn truncate_chars(s: &str, max: usize, indicator: &str) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    s.chars().take(max).collect::<String>() + indicator
}
