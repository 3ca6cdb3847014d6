//! String normalization helpers for request payloads.

/// Returns `true` when the value is empty or whitespace only.
///
/// # Examples
///
/// ```
/// use roster_domain::common::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank("  \t"));
/// assert!(!is_blank(" mario "));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Collapses a blank optional string to `None`, trimming whatever remains.
///
/// Form fields and JSON bodies routinely carry `""` for "not supplied";
/// this keeps that case from reaching validation as a real value.
///
/// # Examples
///
/// ```
/// use roster_domain::common::blank_to_none;
///
/// assert_eq!(blank_to_none(Some("  ".to_string())), None);
/// assert_eq!(blank_to_none(Some(" mario ".to_string())), Some("mario".to_string()));
/// assert_eq!(blank_to_none(None), None);
/// ```
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value.and_then(|v| v.into_option())
}

/// Extension trait for strings providing `into_option` as a method.
pub trait StringExt {
    /// Trims the string, returning `None` if nothing is left.
    fn into_option(self) -> Option<String>;
}

impl StringExt for String {
    fn into_option(self) -> Option<String> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == self.len() {
            Some(self)
        } else {
            Some(trimmed.to_string())
        }
    }
}
