use super::PostQueryService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::slug::Slug,
};

pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    /// `Ok(None)` when no post carries the slug.
    pub async fn get_post_by_slug(
        &self,
        query: GetPostBySlugQuery,
    ) -> ApplicationResult<Option<PostDto>> {
        // A value that could never be stored as a slug simply matches nothing.
        let Ok(slug) = Slug::new(query.slug) else {
            return Ok(None);
        };
        let post = self.read_repo.find_by_slug(&slug).await?;
        Ok(post.map(Into::into))
    }
}
