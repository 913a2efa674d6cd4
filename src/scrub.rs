//! Caption post-processing: PII redaction, profanity masking, truncation.
//!
//! `clean` is pure and idempotent; the orchestrator applies it to every raw
//! provider response before assembly.

use regex::Regex;
use std::sync::LazyLock;

/// Hard cap on caption length, in characters.
pub const MAX_CAPTION_CHARS: usize = 220;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\+?[0-9][0-9\-\s]{6,}[0-9]\b").expect("valid phone regex")
});

static PROFANITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:damn|shit|fuck)\b").expect("valid profanity regex")
});

/// Redaction tokens that must survive `strip_stub_prefix`, keeping `clean`
/// idempotent when a redacted caption starts with one.
const REDACTION_TOKENS: &[&str] = &["[email]", "[phone]"];

/// Strip leading `[...]`-style stub/debug markers (e.g. `[Gemini STUB]`).
pub fn strip_stub_prefix(text: &str) -> &str {
    let mut rest = text.trim_start();
    while rest.starts_with('[') {
        let Some(end) = rest.find(']') else { break };
        if REDACTION_TOKENS.contains(&&rest[..=end]) {
            break;
        }
        rest = rest[end + 1..].trim_start();
    }
    rest
}

/// Mask a denylisted word, keeping the first and last letter.
fn mask(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 2 {
        return "*".repeat(chars.len());
    }
    let mut masked = String::with_capacity(word.len());
    masked.push(chars[0]);
    masked.extend(std::iter::repeat('*').take(chars.len() - 2));
    masked.push(chars[chars.len() - 1]);
    masked
}

/// Redact email-like and phone-like tokens.
pub fn scrub_pii(text: &str) -> String {
    let text = EMAIL_RE.replace_all(text, "[email]");
    PHONE_RE.replace_all(&text, "[phone]").into_owned()
}

/// Mask denylisted profanity in place.
pub fn filter_profanity(text: &str) -> String {
    PROFANITY_RE
        .replace_all(text, |caps: &regex::Captures| mask(&caps[0]))
        .into_owned()
}

/// Truncate to `max_chars` characters, ending with an ellipsis when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars - 1).collect();
    format!("{}…", cut.trim_end())
}

/// Full scrub pipeline with the default caption length cap.
pub fn clean(text: &str) -> String {
    clean_with_limit(text, MAX_CAPTION_CHARS)
}

pub fn clean_with_limit(text: &str, max_chars: usize) -> String {
    let text = strip_stub_prefix(text.trim());
    let text = scrub_pii(text);
    let text = filter_profanity(&text);
    truncate(&text, max_chars)
}
