use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::models::ListCategoriesQuery;
use crate::domain::category::models::UpdateCategoryCommand;
use crate::domain::pagination::Page;

/// Port for category domain service operations.
#[async_trait]
pub trait CategoryServicePort: Send + Sync + 'static {
    async fn list_categories(
        &self,
        query: ListCategoriesQuery,
    ) -> Result<Page<Category>, CategoryError>;

    async fn get_category(&self, id: &CategoryId) -> Result<Category, CategoryError>;

    async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CategoryError>;

    async fn update_category(
        &self,
        id: &CategoryId,
        command: UpdateCategoryCommand,
    ) -> Result<Category, CategoryError>;

    async fn activate_category(&self, id: &CategoryId) -> Result<Category, CategoryError>;

    async fn deactivate_category(&self, id: &CategoryId) -> Result<Category, CategoryError>;

    async fn delete_category(&self, id: &CategoryId) -> Result<(), CategoryError>;
}

/// Persistence operations for the category aggregate.
#[async_trait]
pub trait CategoryRepository: Send + Sync + 'static {
    async fn create(&self, category: Category) -> Result<Category, CategoryError>;

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, CategoryError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, CategoryError>;

    async fn list(&self, query: &ListCategoriesQuery) -> Result<Page<Category>, CategoryError>;

    async fn update(&self, category: Category) -> Result<Category, CategoryError>;

    async fn delete(&self, id: &CategoryId) -> Result<(), CategoryError>;
}
