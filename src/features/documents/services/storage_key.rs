//! Storage key construction and legacy reference resolution.
//!
//! Document rows persist the canonical object key (`{owner}/{ts}-{name}.{ext}`),
//! but rows written before the bucket went private hold fully-qualified public
//! URLs instead. Everything here is pure string work so the legacy shapes can
//! be tested exhaustively.

use crate::shared::validation::UNSAFE_KEY_CHARS;

/// Object API path prefix used by the hosted storage provider in the old
/// public-bucket deployment. Legacy rows contain URLs like
/// `https://host/storage/v1/object/{bucket}/{key}`.
const OBJECT_API_MARKER: &str = "/storage/v1/object/";

/// Reduce a persisted file reference to the canonical storage key.
///
/// - A reference that is not a URL is already a key and passes through.
/// - A URL containing the provider's object API path for `bucket` is cut
///   down to the suffix after it.
/// - Failing that, a URL containing a bare `/{bucket}/` segment is cut down
///   to the suffix after it.
/// - Anything else is returned unchanged; the caller must treat the result
///   as possibly still a full URL and cope with link issuance failing.
///
/// Never fails, and is idempotent: resolving an already-resolved key is a
/// no-op.
pub fn resolve(reference: &str, bucket: &str) -> String {
    if !reference.starts_with("http") {
        return reference.to_string();
    }

    let api_marker = format!("{}{}/", OBJECT_API_MARKER, bucket);
    if let Some(idx) = reference.find(&api_marker) {
        return reference[idx + api_marker.len()..].to_string();
    }

    let path_marker = format!("/{}/", bucket);
    if let Some(idx) = reference.find(&path_marker) {
        return reference[idx + path_marker.len()..].to_string();
    }

    reference.to_string()
}

/// Build the canonical storage key for a new upload:
/// `{owner_id}/{timestamp_millis}-{sanitized_stem}.{extension}`.
///
/// The timestamp segment makes collisions practically impossible; the
/// sanitized filename keeps the key path-safe. Extension falls back to
/// `bin` for extensionless uploads.
pub fn build(owner_id: &str, original_filename: &str, timestamp_millis: i64) -> String {
    let (stem, extension) = match original_filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => (stem, ext),
        _ => (original_filename, "bin"),
    };

    format!(
        "{}/{}-{}.{}",
        owner_id,
        timestamp_millis,
        sanitize(stem),
        sanitize(extension)
    )
}

/// Replace every character outside `[A-Za-z0-9._-]` with `_`.
pub fn sanitize(segment: &str) -> String {
    UNSAFE_KEY_CHARS.replace_all(segment, "_").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUCKET: &str = "medical-documents";

    #[test]
    fn test_resolve_canonical_key_passes_through() {
        let key = "user-1/1712345678901-scan.jpg";
        assert_eq!(resolve(key, BUCKET), key);
    }

    #[test]
    fn test_resolve_empty_reference_passes_through() {
        assert_eq!(resolve("", BUCKET), "");
    }

    #[test]
    fn test_resolve_object_api_url() {
        let url =
            "https://abc.example.co/storage/v1/object/medical-documents/user-1/1712-scan.jpg";
        assert_eq!(resolve(url, BUCKET), "user-1/1712-scan.jpg");
    }

    #[test]
    fn test_resolve_bare_bucket_path_url() {
        let url = "http://localhost:9000/medical-documents/user-1/1712-scan.jpg";
        assert_eq!(resolve(url, BUCKET), "user-1/1712-scan.jpg");
    }

    #[test]
    fn test_resolve_prefers_object_api_marker() {
        // The bucket name also appears as an earlier bare path segment; the
        // object API marker must win over it
        let url =
            "https://host/medical-documents/storage/v1/object/medical-documents/u1/f.pdf";
        assert_eq!(resolve(url, BUCKET), "u1/f.pdf");
    }

    #[test]
    fn test_resolve_unknown_url_returned_unchanged() {
        let url = "https://cdn.example.com/some/other/path/file.pdf";
        assert_eq!(resolve(url, BUCKET), url);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let inputs = [
            "user-1/1712-scan.jpg",
            "https://abc.example.co/storage/v1/object/medical-documents/user-1/1712-scan.jpg",
            "http://localhost:9000/medical-documents/user-1/1712-scan.jpg",
            "https://cdn.example.com/some/other/path/file.pdf",
            "",
        ];
        for input in inputs {
            let once = resolve(input, BUCKET);
            let twice = resolve(&once, BUCKET);
            assert_eq!(once, twice, "resolve not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_build_key_shape() {
        let key = build("user-1", "scan week 12.jpg", 1712345678901);
        assert_eq!(key, "user-1/1712345678901-scan_week_12.jpg");
    }

    #[test]
    fn test_build_key_sanitizes_hostile_filenames() {
        let key = build("user-1", "../../etc/passwd", 1712345678901);
        assert_eq!(key, "user-1/1712345678901-.._.._etc_passwd");
        // The only slash left is the owner partition separator
        assert_eq!(key.matches('/').count(), 1);
    }

    #[test]
    fn test_build_key_without_extension_falls_back_to_bin() {
        let key = build("user-1", "ultrasound", 1712345678901);
        assert_eq!(key, "user-1/1712345678901-ultrasound.bin");
    }

    #[test]
    fn test_build_key_keeps_owner_as_leading_segment() {
        let key = build("0b9f6d7e", "informe médico.pdf", 99);
        assert!(key.starts_with("0b9f6d7e/"));
        assert!(key.ends_with(".pdf"));
    }

    #[test]
    fn test_built_keys_resolve_to_themselves() {
        let key = build("user-1", "scan.jpg", 1712345678901);
        assert_eq!(resolve(&key, BUCKET), key);
    }

    #[test]
    fn test_sanitize_replaces_each_disallowed_char() {
        assert_eq!(sanitize("a b/c"), "a_b_c");
        assert_eq!(sanitize("análisis"), "an_lisis");
        assert_eq!(sanitize("ok-1.2_x"), "ok-1.2_x");
    }
}
