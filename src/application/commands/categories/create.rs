use super::CategoryCommandService;
use crate::{
    application::{commands::derive_slug, dto::CategoryDto, error::ApplicationResult},
    domain::category::{CategoryDescription, CategoryName, NewCategory},
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let slug = derive_slug(self.slugger.as_ref(), name.as_str())?;

        let created = self
            .repo
            .insert(NewCategory {
                name,
                slug,
                description: CategoryDescription::new(command.description),
            })
            .await?;

        tracing::info!(category_id = %created.id, slug = %created.slug, "category created");
        Ok(created.into())
    }
}
