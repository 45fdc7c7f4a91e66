use crate::domain::category::entity::{Category, CategoryUpdate, NewCategory};
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    /// All categories ordered by name.
    async fn list(&self) -> DomainResult<Vec<Category>>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    /// Removes the category together with its post associations.
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
}
