//! Shared utility functions.

/// Number of leading characters of a secret that may appear in logs.
pub const SECRET_PREFIX_CHARS: usize = 10;

/// Shorten a secret for logging: keep at most [`SECRET_PREFIX_CHARS`]
/// characters and append `...` when anything was cut.
///
/// Counts characters, not bytes, so a multi-byte key never splits inside a
/// code point.
pub fn mask_secret(secret: &str) -> String {
    let mut chars = secret.char_indices();
    match chars.nth(SECRET_PREFIX_CHARS) {
        Some((end, _)) => format!("{}...", &secret[..end]),
        None => secret.to_string(),
    }
}
