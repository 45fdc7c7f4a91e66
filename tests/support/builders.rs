// tests/support/builders.rs
use shiori::application::commands::categories::CreateCategoryCommand;
use shiori::application::commands::posts::{CreatePostCommand, UpdatePostCommand};

pub fn category(name: &str) -> CreateCategoryCommand {
    CreateCategoryCommand {
        name: name.into(),
        description: None,
    }
}

pub fn post(title: &str, category_ids: &[i64]) -> CreatePostCommand {
    CreatePostCommand::builder()
        .title(title)
        .content(format!("{title} body"))
        .category_ids(category_ids.iter().copied())
        .build()
        .expect("title and content are set")
}

/// Update payload that keeps title and content and swaps the categories.
pub struct PostUpdateBuilder {
    command: UpdatePostCommand,
}

impl PostUpdateBuilder {
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            command: UpdatePostCommand {
                id,
                title: title.into(),
                content: format!("{title} body"),
                published: None,
                image_url: None,
                category_ids: Vec::new(),
            },
        }
    }

    pub fn content(mut self, content: &str) -> Self {
        self.command.content = content.into();
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.command.published = Some(published);
        self
    }

    pub fn image_url(mut self, url: &str) -> Self {
        self.command.image_url = Some(url.into());
        self
    }

    pub fn categories(mut self, ids: &[i64]) -> Self {
        self.command.category_ids = ids.to_vec();
        self
    }

    pub fn build(self) -> UpdatePostCommand {
        self.command
    }
}
