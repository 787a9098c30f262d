//! Helper functions and utilities

use uuid::Uuid;

/// Generate a fresh random key for an identifier the caller left out
pub fn generate_key() -> String {
    Uuid::new_v4().to_string()
}

/// Use the supplied identifier as-is, or generate one
pub fn key_or_generate(supplied: Option<&str>) -> String {
    match supplied {
        Some(key) => key.to_string(),
        None => generate_key(),
    }
}
