use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostListFilter, PostUpdate};
use crate::domain::post::value_objects::PostId;
use crate::domain::slug::Slug;
use async_trait::async_trait;

/// Write side. Each call is atomic: the post row and its category
/// associations either all change or none do.
#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    /// Returns the stored post without its categories.
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    /// Returns the updated post without its categories.
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>>;
    /// Oldest first, each post carrying all of its categories.
    async fn list(&self, filter: PostListFilter) -> DomainResult<Vec<Post>>;
}
