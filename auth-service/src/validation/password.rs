use once_cell::sync::Lazy;
use regex::Regex;

static UPPER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("valid pattern"));
static SPECIAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]").expect("valid pattern"));

/// At least 8 characters, one uppercase letter and one character that is
/// neither a letter nor a digit.
pub fn is_valid_password(pw: &str) -> bool {
    pw.len() >= 8 && UPPER_RE.is_match(pw) && SPECIAL_RE.is_match(pw)
}
