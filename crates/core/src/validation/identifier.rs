//! Identifier format check.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum identifier length accepted from clients.
pub const MAX_IDENTIFIER_LEN: usize = 64;

static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]{0,63}$").expect("identifier pattern is valid")
});

/// Whether `value` is a well-formed entity identifier.
///
/// Accepts server-generated UUIDs as well as short handles such as `F1`.
pub fn is_valid_identifier(value: &str) -> bool {
    value.len() <= MAX_IDENTIFIER_LEN && IDENTIFIER_RE.is_match(value)
}
