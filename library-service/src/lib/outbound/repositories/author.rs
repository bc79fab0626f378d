use async_trait::async_trait;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::QueryBuilder;
use uuid::Uuid;

use crate::domain::author::errors::AuthorError;
use crate::domain::author::models::Author;
use crate::domain::author::models::AuthorId;
use crate::domain::author::models::ListAuthorsQuery;
use crate::domain::author::ports::AuthorRepository;
use crate::domain::pagination::Page;

const SELECT_COLUMNS: &str =
    "id, name, bio, birth_date, nationality, is_active, created_at, updated_at";

pub struct PostgresAuthorRepository {
    pool: PgPool,
}

impl PostgresAuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AuthorRow {
    id: Uuid,
    name: String,
    bio: Option<String>,
    birth_date: Option<NaiveDate>,
    nationality: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Author {
            id: AuthorId(row.id),
            name: row.name,
            bio: row.bio,
            birth_date: row.birth_date,
            nationality: row.nationality,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn map_unique_violation(e: sqlx::Error) -> AuthorError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some("authors_name_key") {
            return AuthorError::NameAlreadyExists;
        }
    }
    AuthorError::DatabaseError(e.to_string())
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &ListAuthorsQuery) {
    if let Some(is_active) = query.is_active {
        builder.push(" AND is_active = ").push_bind(is_active);
    }

    if let Some(search) = &query.search {
        let pattern = format!("%{}%", search);
        builder
            .push(" AND (name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR bio ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR nationality ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn create(&self, author: Author) -> Result<Author, AuthorError> {
        sqlx::query(
            r#"
            INSERT INTO authors (id, name, bio, birth_date, nationality, is_active,
                                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(author.id.0)
        .bind(&author.name)
        .bind(&author.bio)
        .bind(author.birth_date)
        .bind(&author.nationality)
        .bind(author.is_active)
        .bind(author.created_at)
        .bind(author.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(author)
    }

    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, AuthorError> {
        let row = sqlx::query_as::<_, AuthorRow>(&format!(
            "SELECT {} FROM authors WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthorError::DatabaseError(e.to_string()))?;

        Ok(row.map(Author::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, AuthorError> {
        let row = sqlx::query_as::<_, AuthorRow>(&format!(
            "SELECT {} FROM authors WHERE name = $1",
            SELECT_COLUMNS
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthorError::DatabaseError(e.to_string()))?;

        Ok(row.map(Author::from))
    }

    async fn list(&self, query: &ListAuthorsQuery) -> Result<Page<Author>, AuthorError> {
        let mut count_builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM authors WHERE 1 = 1");
        push_filters(&mut count_builder, query);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AuthorError::DatabaseError(e.to_string()))?;

        let mut builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {} FROM authors WHERE 1 = 1", SELECT_COLUMNS));
        push_filters(&mut builder, query);

        let offset = i64::from(query.page.saturating_sub(1)) * i64::from(query.limit);
        builder
            .push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(i64::from(query.limit))
            .push(" OFFSET ")
            .push_bind(offset);

        let rows: Vec<AuthorRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AuthorError::DatabaseError(e.to_string()))?;

        Ok(Page {
            items: rows.into_iter().map(Author::from).collect(),
            total: total as u64,
        })
    }

    async fn update(&self, author: Author) -> Result<Author, AuthorError> {
        let result = sqlx::query(
            r#"
            UPDATE authors
            SET name = $2, bio = $3, birth_date = $4, nationality = $5, is_active = $6,
                updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(author.id.0)
        .bind(&author.name)
        .bind(&author.bio)
        .bind(author.birth_date)
        .bind(&author.nationality)
        .bind(author.is_active)
        .bind(author.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        if result.rows_affected() == 0 {
            return Err(AuthorError::NotFound);
        }

        Ok(author)
    }

    async fn delete(&self, id: &AuthorId) -> Result<(), AuthorError> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| AuthorError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AuthorError::NotFound);
        }

        Ok(())
    }
}
