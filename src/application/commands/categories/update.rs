use super::CategoryCommandService;
use crate::{
    application::{commands::derive_slug, dto::CategoryDto, error::ApplicationResult},
    domain::category::{CategoryDescription, CategoryId, CategoryName, CategoryUpdate},
};

pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        let name = CategoryName::new(command.name)?;
        let slug = derive_slug(self.slugger.as_ref(), name.as_str())?;

        let updated = self
            .repo
            .update(CategoryUpdate {
                id,
                name,
                slug,
                description: CategoryDescription::new(command.description),
            })
            .await?;

        tracing::info!(category_id = %updated.id, slug = %updated.slug, "category updated");
        Ok(updated.into())
    }
}
