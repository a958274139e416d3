/// Lifetime of a signed document view link, in seconds.
///
/// Fixed system-wide: every read of a private document mints a fresh
/// capability URL with this TTL, bounding the blast radius of a leaked
/// link to one object and ten minutes.
pub const SIGNED_URL_TTL_SECS: u32 = 600;

/// Maximum uploaded document size in bytes (10MB)
pub const MAX_DOCUMENT_SIZE: usize = 10 * 1024 * 1024;
