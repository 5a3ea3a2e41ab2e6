//! Text normalization for optional display strings.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Keep `value` only when it holds visible text.
///
/// Optional subtitles pass through here so an empty string never renders an
/// empty element.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
