//! String helpers shared by the renderers.

/// Upper-case the first character of `s`, leaving the rest untouched.
///
/// ## Examples
/// ```rust
/// use verdict_core::strings::capitalize_first;
///
/// assert_eq!(capitalize_first("all passed."), "All passed.");
/// assert_eq!(capitalize_first(""), "");
/// ```
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
