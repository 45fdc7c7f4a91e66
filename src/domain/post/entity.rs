// src/domain/post/entity.rs
use crate::domain::category::{CategoryId, CategoryName};
use crate::domain::post::value_objects::{
    CategorySelection, ImageUrl, PostContent, PostId, PostTitle,
};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

/// Category reference carried by a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCategory {
    pub id: CategoryId,
    pub name: CategoryName,
}

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: Slug,
    pub content: PostContent,
    pub published: bool,
    pub image_url: ImageUrl,
    pub categories: Vec<PostCategory>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: Slug,
    pub content: PostContent,
    pub published: bool,
    pub image_url: ImageUrl,
    pub categories: CategorySelection,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Replaces a post's editable fields and its whole category set.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: Slug,
    pub content: PostContent,
    pub published: bool,
    /// `None` keeps the stored image.
    pub image_url: Option<ImageUrl>,
    pub categories: CategorySelection,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PostListFilter {
    pub category_id: Option<CategoryId>,
    pub published: Option<bool>,
}

impl PostListFilter {
    pub fn with_category(mut self, id: CategoryId) -> Self {
        self.category_id = Some(id);
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }
}
