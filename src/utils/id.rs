use ulid::Ulid;

/// Opaque, lower-case visit id.
pub fn fresh_id() -> String {
    Ulid::new().to_string().to_lowercase()
}
