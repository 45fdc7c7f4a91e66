// src/infrastructure/repositories/aggregate.rs
use crate::domain::category::{CategoryId, CategoryName};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{ImageUrl, Post, PostCategory, PostContent, PostId, PostTitle};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::collections::HashMap;

/// A bare `posts` row.
#[derive(Debug, Clone, FromRow)]
pub(super) struct PostRow {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub published: bool,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            content: PostContent::new(row.content)?,
            published: row.published,
            image_url: ImageUrl::new(row.image_url)?,
            categories: Vec::new(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// One row of `posts LEFT JOIN post_categories LEFT JOIN categories`: a post
/// repeated once per category, or once with no category at all.
#[derive(Debug, Clone, FromRow)]
pub(super) struct PostCategoryRow {
    #[sqlx(flatten)]
    pub post: PostRow,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
}

impl PostCategoryRow {
    fn category(&self) -> DomainResult<Option<PostCategory>> {
        match (self.category_id, &self.category_name) {
            (Some(id), Some(name)) => Ok(Some(PostCategory {
                id: CategoryId::new(id)?,
                name: CategoryName::new(name.clone())?,
            })),
            _ => Ok(None),
        }
    }
}

/// Collapses join rows into posts in a single pass. Posts keep the order in
/// which their first row appears; scalar fields come from that first row.
pub(super) fn aggregate_posts(rows: Vec<PostCategoryRow>) -> DomainResult<Vec<Post>> {
    let mut posts: Vec<Post> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for row in rows {
        let category = row.category()?;
        let slot = match index.get(&row.post.id) {
            Some(&slot) => slot,
            None => {
                index.insert(row.post.id, posts.len());
                posts.push(Post::try_from(row.post)?);
                posts.len() - 1
            }
        };

        if let Some(category) = category {
            posts[slot].categories.push(category);
        }
    }

    Ok(posts)
}
