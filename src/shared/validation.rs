use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches every character that is not allowed in a storage key segment.
    /// Uploaded filenames are passed through this before being embedded in
    /// an object key, so a key never contains path separators or characters
    /// that need URL escaping.
    /// - Kept: ASCII letters, digits, '.', '_', '-'
    /// - Replaced with '_': everything else (spaces, slashes, unicode, ...)
    pub static ref UNSAFE_KEY_CHARS: Regex = Regex::new(r"[^A-Za-z0-9._-]").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsafe_key_chars_matches_separators() {
        assert!(UNSAFE_KEY_CHARS.is_match("a/b"));
        assert!(UNSAFE_KEY_CHARS.is_match("a\\b"));
        assert!(UNSAFE_KEY_CHARS.is_match("a b"));
        assert!(UNSAFE_KEY_CHARS.is_match("informe médico"));
        assert!(UNSAFE_KEY_CHARS.is_match("a?b=c"));
    }

    #[test]
    fn test_unsafe_key_chars_leaves_safe_names_alone() {
        assert!(!UNSAFE_KEY_CHARS.is_match("scan_week-12.v2.jpg"));
        assert!(!UNSAFE_KEY_CHARS.is_match("report.pdf"));
        assert!(!UNSAFE_KEY_CHARS.is_match("2024-03-01"));
    }
}
