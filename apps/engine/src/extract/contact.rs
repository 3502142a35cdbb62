//! Contact extraction — email and phone patterns isolated as pure functions.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ContactInfo;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email pattern")
});

// Loose shape match first, then a digit-count sanity check. International
// formats vary too much for a single strict pattern.
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\d[\d\s().\-]{6,16}\d").expect("valid phone pattern"));

pub fn extract_contact(text: &str) -> ContactInfo {
    ContactInfo {
        emails: extract_emails(text),
        phones: extract_phones(text),
    }
}

/// All distinct email addresses, in order of first appearance.
pub fn extract_emails(text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for m in EMAIL.find_iter(text) {
        let email = m.as_str().to_lowercase();
        if !seen.contains(&email) {
            seen.push(email);
        }
    }
    seen
}

/// Phone-shaped sequences with 9–15 digits, in order of first appearance.
/// Eight-digit runs collide with year ranges ("2015 - 2021"), so the floor
/// sits at nine.
pub fn extract_phones(text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for m in PHONE.find_iter(text) {
        let raw = m.as_str().trim().to_string();
        let digits = raw.chars().filter(|c| c.is_ascii_digit()).count();
        if (9..=15).contains(&digits) && !seen.contains(&raw) {
            seen.push(raw);
        }
    }
    seen
}
