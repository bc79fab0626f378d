use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::author::errors::AuthorError;
use crate::domain::author::models::Author;
use crate::domain::author::models::AuthorId;
use crate::domain::author::models::CreateAuthorCommand;
use crate::domain::author::models::ListAuthorsQuery;
use crate::domain::author::models::UpdateAuthorCommand;
use crate::domain::author::ports::AuthorRepository;
use crate::domain::author::ports::AuthorServicePort;
use crate::domain::pagination::Page;

/// Domain service implementation for author operations.
pub struct AuthorService<AR>
where
    AR: AuthorRepository,
{
    repository: Arc<AR>,
}

impl<AR> AuthorService<AR>
where
    AR: AuthorRepository,
{
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<AR> AuthorServicePort for AuthorService<AR>
where
    AR: AuthorRepository,
{
    async fn list_authors(&self, query: ListAuthorsQuery) -> Result<Page<Author>, AuthorError> {
        self.repository.list(&query).await
    }

    async fn get_author(&self, id: &AuthorId) -> Result<Author, AuthorError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AuthorError::NotFound)
    }

    async fn create_author(&self, command: CreateAuthorCommand) -> Result<Author, AuthorError> {
        if self.repository.find_by_name(&command.name).await?.is_some() {
            return Err(AuthorError::NameAlreadyExists);
        }

        let now = Utc::now();
        let author = Author {
            id: AuthorId::new(),
            name: command.name,
            bio: command.bio,
            birth_date: command.birth_date,
            nationality: command.nationality,
            is_active: command.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };

        self.repository.create(author).await
    }

    async fn update_author(
        &self,
        id: &AuthorId,
        command: UpdateAuthorCommand,
    ) -> Result<Author, AuthorError> {
        let mut author = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AuthorError::NotFound)?;

        if let Some(new_name) = &command.name {
            if new_name != &author.name && self.repository.find_by_name(new_name).await?.is_some()
            {
                return Err(AuthorError::NameAlreadyExists);
            }
        }

        if let Some(name) = command.name {
            author.name = name;
        }
        if let Some(bio) = command.bio {
            author.bio = Some(bio);
        }
        if let Some(birth_date) = command.birth_date {
            author.birth_date = Some(birth_date);
        }
        if let Some(nationality) = command.nationality {
            author.nationality = Some(nationality);
        }
        if let Some(is_active) = command.is_active {
            author.is_active = is_active;
        }
        author.updated_at = Utc::now();

        self.repository.update(author).await
    }

    async fn activate_author(&self, id: &AuthorId) -> Result<Author, AuthorError> {
        let mut author = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AuthorError::NotFound)?;

        if author.is_active {
            return Err(AuthorError::AlreadyActive);
        }

        author.is_active = true;
        author.updated_at = Utc::now();

        self.repository.update(author).await
    }

    async fn deactivate_author(&self, id: &AuthorId) -> Result<Author, AuthorError> {
        let mut author = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AuthorError::NotFound)?;

        if !author.is_active {
            return Err(AuthorError::AlreadyInactive);
        }

        author.is_active = false;
        author.updated_at = Utc::now();

        self.repository.update(author).await
    }

    async fn delete_author(&self, id: &AuthorId) -> Result<(), AuthorError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AuthorError::NotFound)?;

        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestAuthorRepository {}

        #[async_trait]
        impl AuthorRepository for TestAuthorRepository {
            async fn create(&self, author: Author) -> Result<Author, AuthorError>;
            async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, AuthorError>;
            async fn find_by_name(&self, name: &str) -> Result<Option<Author>, AuthorError>;
            async fn list(&self, query: &ListAuthorsQuery) -> Result<Page<Author>, AuthorError>;
            async fn update(&self, author: Author) -> Result<Author, AuthorError>;
            async fn delete(&self, id: &AuthorId) -> Result<(), AuthorError>;
        }
    }

    fn sample_author(is_active: bool) -> Author {
        let now = Utc::now();
        Author {
            id: AuthorId::new(),
            name: "Ursula K. Le Guin".to_string(),
            bio: None,
            birth_date: None,
            nationality: Some("American".to_string()),
            is_active,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_author_success() {
        let mut repository = MockTestAuthorRepository::new();
        repository
            .expect_find_by_name()
            .with(eq("Ursula K. Le Guin"))
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|author| author.is_active)
            .times(1)
            .returning(|author| Ok(author));

        let service = AuthorService::new(Arc::new(repository));
        let command = CreateAuthorCommand {
            name: "Ursula K. Le Guin".to_string(),
            bio: None,
            birth_date: None,
            nationality: None,
            is_active: None,
        };

        let result = service.create_author(command).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_author_duplicate_name() {
        let mut repository = MockTestAuthorRepository::new();
        repository
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(Some(sample_author(true))));
        repository.expect_create().times(0);

        let service = AuthorService::new(Arc::new(repository));
        let command = CreateAuthorCommand {
            name: "Ursula K. Le Guin".to_string(),
            bio: None,
            birth_date: None,
            nationality: None,
            is_active: None,
        };

        let result = service.create_author(command).await;
        assert!(matches!(result, Err(AuthorError::NameAlreadyExists)));
    }

    #[tokio::test]
    async fn test_get_author_not_found() {
        let mut repository = MockTestAuthorRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthorService::new(Arc::new(repository));
        let result = service.get_author(&AuthorId::new()).await;
        assert!(matches!(result, Err(AuthorError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_author_rejects_taken_name() {
        let author = sample_author(true);
        let author_id = author.id;

        let mut repository = MockTestAuthorRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(author.clone())));
        repository
            .expect_find_by_name()
            .with(eq("Octavia Butler"))
            .times(1)
            .returning(|_| Ok(Some(sample_author(true))));
        repository.expect_update().times(0);

        let service = AuthorService::new(Arc::new(repository));
        let command = UpdateAuthorCommand {
            name: Some("Octavia Butler".to_string()),
            ..Default::default()
        };

        let result = service.update_author(&author_id, command).await;
        assert!(matches!(result, Err(AuthorError::NameAlreadyExists)));
    }

    #[tokio::test]
    async fn test_activate_author_already_active() {
        let author = sample_author(true);
        let author_id = author.id;

        let mut repository = MockTestAuthorRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(author.clone())));
        repository.expect_update().times(0);

        let service = AuthorService::new(Arc::new(repository));
        let result = service.activate_author(&author_id).await;
        assert!(matches!(result, Err(AuthorError::AlreadyActive)));
    }

    #[tokio::test]
    async fn test_deactivate_author_success() {
        let author = sample_author(true);
        let author_id = author.id;

        let mut repository = MockTestAuthorRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(author.clone())));
        repository
            .expect_update()
            .withf(|author| !author.is_active)
            .times(1)
            .returning(|author| Ok(author));

        let service = AuthorService::new(Arc::new(repository));
        let result = service.deactivate_author(&author_id).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_deactivate_author_already_inactive() {
        let author = sample_author(false);
        let author_id = author.id;

        let mut repository = MockTestAuthorRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(author.clone())));
        repository.expect_update().times(0);

        let service = AuthorService::new(Arc::new(repository));
        let result = service.deactivate_author(&author_id).await;
        assert!(matches!(result, Err(AuthorError::AlreadyInactive)));
    }

    #[tokio::test]
    async fn test_delete_author_not_found() {
        let mut repository = MockTestAuthorRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_delete().times(0);

        let service = AuthorService::new(Arc::new(repository));
        let result = service.delete_author(&AuthorId::new()).await;
        assert!(matches!(result, Err(AuthorError::NotFound)));
    }
}
