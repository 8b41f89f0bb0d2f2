//! Text manipulation utilities for identifiers.

/// Check if a character can start an identifier.
///
/// Uses Unicode Standard Annex #31 rules, plus `_`.
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

/// Check if a character is considered part of a word (identifier).
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Whether `text` is a single identifier. A leading `@` (verbatim
/// identifier) is accepted.
///
/// # Example
/// ```
/// use autonotify::core::text_utils::is_identifier;
///
/// assert!(is_identifier("FirstName"));
/// assert!(is_identifier("@class"));
/// assert!(!is_identifier("first-name"));
/// assert!(!is_identifier("1st"));
/// ```
pub fn is_identifier(text: &str) -> bool {
    let text = text.strip_prefix('@').unwrap_or(text);
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_word_character),
        _ => false,
    }
}

/// Upper-case the first character, leaving the rest untouched.
///
/// Only single-character mappings apply: a character whose upper case
/// spans several characters (`ß` to `SS`) is kept as written.
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    let first = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };
    std::iter::once(first).chain(chars).collect()
}
