//! Display-string helpers for schema titles.

/// Upper-case the first character of `s`, leaving the remainder untouched.
///
/// `"x-lvc"` becomes `"X-lvc"`; an empty string stays empty.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
