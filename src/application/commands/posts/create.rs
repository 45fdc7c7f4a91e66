// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{commands::derive_slug, dto::PostDto, error::ApplicationResult},
    domain::post::{CategorySelection, ImageUrl, NewPost, PostContent, PostTitle},
};

pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub published: bool,
    pub image_url: Option<String>,
    pub category_ids: Vec<i64>,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    published: bool,
    image_url: Option<String>,
    category_ids: Vec<i64>,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn category_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.category_ids = ids.into_iter().collect();
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            published: self.published,
            image_url: self.image_url,
            category_ids: self.category_ids,
        })
    }
}

impl PostCommandService {
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let image_url = ImageUrl::new(command.image_url.unwrap_or_default())?;
        let categories = CategorySelection::new(command.category_ids)?;
        let slug = derive_slug(self.slugger.as_ref(), title.as_str())?;
        let now = self.clock.now();

        let new_post = NewPost {
            title,
            slug,
            content,
            published: command.published,
            image_url,
            categories,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_post).await?;
        tracing::info!(post_id = %created.id, slug = %created.slug, "post created");
        Ok(created.into())
    }
}
