// src/application/ports/util.rs

/// Maps free text to a URL-safe slug candidate. Must be pure and
/// deterministic; whitespace-only input yields an empty string.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
