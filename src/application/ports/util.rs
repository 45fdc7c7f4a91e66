// src/application/ports/util.rs
/// Turns a human-readable title or name into a URL-safe identifier.
/// Implementations must be pure: the same input always yields the same slug.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
