use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::models::ListCategoriesQuery;
use crate::domain::category::models::UpdateCategoryCommand;
use crate::domain::category::ports::CategoryRepository;
use crate::domain::category::ports::CategoryServicePort;
use crate::domain::pagination::Page;

/// Domain service implementation for category operations.
pub struct CategoryService<CR>
where
    CR: CategoryRepository,
{
    repository: Arc<CR>,
}

impl<CR> CategoryService<CR>
where
    CR: CategoryRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CategoryServicePort for CategoryService<CR>
where
    CR: CategoryRepository,
{
    async fn list_categories(
        &self,
        query: ListCategoriesQuery,
    ) -> Result<Page<Category>, CategoryError> {
        self.repository.list(&query).await
    }

    async fn get_category(&self, id: &CategoryId) -> Result<Category, CategoryError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound)
    }

    async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CategoryError> {
        if self.repository.find_by_name(&command.name).await?.is_some() {
            return Err(CategoryError::NameAlreadyExists);
        }

        let now = Utc::now();
        let category = Category {
            id: CategoryId::new(),
            name: command.name,
            description: command.description,
            is_active: command.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };

        self.repository.create(category).await
    }

    async fn update_category(
        &self,
        id: &CategoryId,
        command: UpdateCategoryCommand,
    ) -> Result<Category, CategoryError> {
        let mut category = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound)?;

        if let Some(new_name) = &command.name {
            if new_name != &category.name
                && self.repository.find_by_name(new_name).await?.is_some()
            {
                return Err(CategoryError::NameAlreadyExists);
            }
        }

        if let Some(name) = command.name {
            category.name = name;
        }
        if let Some(description) = command.description {
            category.description = Some(description);
        }
        if let Some(is_active) = command.is_active {
            category.is_active = is_active;
        }
        category.updated_at = Utc::now();

        self.repository.update(category).await
    }

    async fn activate_category(&self, id: &CategoryId) -> Result<Category, CategoryError> {
        let mut category = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound)?;

        if category.is_active {
            return Err(CategoryError::AlreadyActive);
        }

        category.is_active = true;
        category.updated_at = Utc::now();

        self.repository.update(category).await
    }

    async fn deactivate_category(&self, id: &CategoryId) -> Result<Category, CategoryError> {
        let mut category = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound)?;

        if !category.is_active {
            return Err(CategoryError::AlreadyInactive);
        }

        category.is_active = false;
        category.updated_at = Utc::now();

        self.repository.update(category).await
    }

    async fn delete_category(&self, id: &CategoryId) -> Result<(), CategoryError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound)?;

        self.repository.delete(id).await
    }
}
