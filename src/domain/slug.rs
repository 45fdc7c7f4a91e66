// src/domain/slug.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Upper bound on the length of a generated slug, in characters.
pub const MAX_SLUG_LEN: usize = 200;

/// URL-safe identifier derived from a post title or category name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("slug cannot be empty"));
        }
        if value.chars().count() > MAX_SLUG_LEN {
            return Err(DomainError::validation(format!(
                "slug cannot exceed {MAX_SLUG_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_slug() {
        assert!(Slug::new("   ").is_err());
    }

    #[test]
    fn rejects_overlong_slug() {
        assert!(Slug::new("a".repeat(MAX_SLUG_LEN + 1)).is_err());
        assert!(Slug::new("a".repeat(MAX_SLUG_LEN)).is_ok());
    }
}
