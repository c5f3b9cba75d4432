use regex::Regex;
use std::sync::OnceLock;

fn pan_regex() -> &'static Regex {
    static PAN_RE: OnceLock<Regex> = OnceLock::new();
    PAN_RE.get_or_init(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap())
}

/// Strips one leading "+91" or "0" prefix, then accepts iff exactly 10
/// decimal digits remain. Returns the bare digits.
pub fn normalize_mobile(raw: &str) -> Option<String> {
    let stripped = raw
        .strip_prefix("+91")
        .or_else(|| raw.strip_prefix('0'))
        .unwrap_or(raw);
    if stripped.len() == 10 && stripped.chars().all(|c| c.is_ascii_digit()) {
        Some(stripped.to_string())
    } else {
        None
    }
}

/// Upper-cases and accepts iff the result is 5 letters, 4 digits, 1 letter.
pub fn normalize_pan(raw: &str) -> Option<String> {
    let upper = raw.to_uppercase();
    if pan_regex().is_match(&upper) {
        Some(upper)
    } else {
        None
    }
}
