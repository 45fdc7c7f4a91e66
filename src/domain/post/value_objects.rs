use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use std::collections::HashSet;
use std::fmt;
use url::Url;

const MAX_TITLE_LEN: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(i64);

impl PostId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("post id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PostId> for i64 {
    fn from(value: PostId) -> Self {
        value.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        if value.chars().count() > MAX_TITLE_LEN {
            return Err(DomainError::validation(format!(
                "title cannot exceed {MAX_TITLE_LEN} characters"
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

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("content cannot be empty"));
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

/// Cover image location. Empty means "no image"; anything else must be an
/// absolute http(s) URL or a data URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageUrl(String);

impl ImageUrl {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let parsed = Url::parse(trimmed)
            .map_err(|err| DomainError::validation(format!("image url is invalid: {err}")))?;
        match parsed.scheme() {
            "http" | "https" | "data" => Ok(Self(trimmed.to_string())),
            other => Err(DomainError::validation(format!(
                "image url scheme `{other}` is not supported"
            ))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Category ids attached to a post, de-duplicated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection(Vec<CategoryId>);

impl CategorySelection {
    pub fn new(ids: impl IntoIterator<Item = i64>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        let mut selected = Vec::new();
        for raw in ids {
            let id = CategoryId::new(raw)?;
            if seen.insert(id) {
                selected.push(id);
            }
        }
        Ok(Self(selected))
    }

    pub fn ids(&self) -> &[CategoryId] {
        &self.0
    }
}
