use super::PostQueryService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::{category::CategoryId, post::PostListFilter},
};

#[derive(Debug, Default)]
pub struct ListPostsQuery {
    /// Only posts associated with this category; each still lists all of
    /// its categories.
    pub category_id: Option<i64>,
    /// Only published posts (`true`) or only drafts (`false`).
    pub published: Option<bool>,
}

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<Vec<PostDto>> {
        let mut filter = PostListFilter::default();
        if let Some(id) = query.category_id {
            filter = filter.with_category(CategoryId::new(id)?);
        }
        if let Some(published) = query.published {
            filter = filter.with_published(published);
        }

        let posts = self.read_repo.list(filter).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }
}
