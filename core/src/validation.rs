//! Client-side checks run before a create request is built.

use std::sync::LazyLock;

use regex::Regex;

use crate::draft::Draft;
use crate::outcome::Rejection;
use crate::types::NewRecord;

/// `local@domain.tld` shape. Matched as-is: no trimming, no case folding.
///
/// The excluded whitespace is the ECMAScript `\s` set (line terminators,
/// `Zs`, tab, vertical tab, form feed and U+FEFF) rather than the `regex`
/// crate's `\s`, which adds U+0085 and leaves out U+FEFF.
pub const EMAIL_PATTERN: &str = concat!(
    r"^[^\t\n\v\f\r\p{Zs}\x{2028}\x{2029}\x{FEFF}@]+",
    r"@[^\t\n\v\f\r\p{Zs}\x{2028}\x{2029}\x{FEFF}@]+",
    r"\.[^\t\n\v\f\r\p{Zs}\x{2028}\x{2029}\x{FEFF}@]+$",
);

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid email regex (verified by tests)"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Turn a draft into a create payload, or say why it cannot be sent.
///
/// Missing fields are reported before the email shape is looked at.
pub fn validate_draft(draft: &Draft) -> Result<NewRecord, Rejection> {
    if !draft.is_complete() {
        return Err(Rejection::MissingFields);
    }
    if !is_valid_email(&draft.email) {
        return Err(Rejection::InvalidEmail);
    }
    Ok(draft.to_new_record())
}
