use super::PostCommandService;
use crate::{
    application::{commands::derive_slug, dto::PostDto, error::ApplicationResult},
    domain::post::{CategorySelection, ImageUrl, PostContent, PostId, PostTitle, PostUpdate},
};

/// Full replacement of a post. `published` defaults to a draft when the
/// caller leaves it out; the category list replaces the stored one.
pub struct UpdatePostCommand {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub published: Option<bool>,
    pub image_url: Option<String>,
    pub category_ids: Vec<i64>,
}

impl PostCommandService {
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let UpdatePostCommand {
            id,
            title,
            content,
            published,
            image_url,
            category_ids,
        } = command;

        let id = PostId::new(id)?;
        let title = PostTitle::new(title)?;
        let content = PostContent::new(content)?;
        let image_url = image_url.map(ImageUrl::new).transpose()?;
        let categories = CategorySelection::new(category_ids)?;
        let slug = derive_slug(self.slugger.as_ref(), title.as_str())?;

        let update = PostUpdate {
            id,
            title,
            slug,
            content,
            published: published.unwrap_or(false),
            image_url,
            categories,
            updated_at: self.clock.now(),
        };

        let updated = self.write_repo.update(update).await?;
        tracing::info!(post_id = %updated.id, slug = %updated.slug, "post updated");
        Ok(updated.into())
    }
}
