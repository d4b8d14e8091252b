use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::Row;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),
    #[error("Connection error: {0}")]
    Connection(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub classification: String,
}

#[async_trait]
pub trait StorageBackend {
    /// Stores a resolved work and returns the generated row id.
    async fn insert_book(
        &self,
        title: &str,
        author: &str,
        book_id: &str,
        classification: &str,
    ) -> Result<i32, StorageError>;
    async fn list_books(&self) -> Result<Vec<Book>, StorageError>;
    async fn ping(&self) -> Result<(), StorageError>;
}

pub struct PostgresBackend {
    pool: PgPool,
}

impl PostgresBackend {
    /// Builds a lazy pool; nothing is dialed until the first query.
    pub fn new(options: PgConnectOptions) -> Self {
        let pool = PgPoolOptions::new().connect_lazy_with(options);
        Self { pool }
    }

    pub async fn init_schema(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS books (
                id SERIAL PRIMARY KEY,
                title TEXT,
                author TEXT,
                book_id TEXT,
                classification TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl StorageBackend for PostgresBackend {
    async fn insert_book(
        &self,
        title: &str,
        author: &str,
        book_id: &str,
        classification: &str,
    ) -> Result<i32, StorageError> {
        let row = sqlx::query(
            r#"
            INSERT INTO books (title, author, book_id, classification)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(title)
        .bind(author)
        .bind(book_id)
        .bind(classification)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get::<i32, _>("id"))
    }

    async fn list_books(&self) -> Result<Vec<Book>, StorageError> {
        let rows = sqlx::query("SELECT id, title, author, classification FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let books = rows
            .into_iter()
            .map(|row| Book {
                id: row.get("id"),
                title: row.get::<Option<String>, _>("title").unwrap_or_default(),
                author: row.get::<Option<String>, _>("author").unwrap_or_default(),
                classification: row
                    .get::<Option<String>, _>("classification")
                    .unwrap_or_default(),
            })
            .collect();

        Ok(books)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}

/// In-process backend for local runs and tests. The external work id is
/// not kept, since no read path returns it.
#[derive(Default)]
pub struct MemoryBackend {
    rows: Mutex<Vec<Book>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Book>>, StorageError> {
        self.rows
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn insert_book(
        &self,
        title: &str,
        author: &str,
        _book_id: &str,
        classification: &str,
    ) -> Result<i32, StorageError> {
        let mut rows = self.lock()?;
        let id = rows.last().map(|book| book.id + 1).unwrap_or(1);

        rows.push(Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            classification: classification.to_string(),
        });

        Ok(id)
    }

    async fn list_books(&self) -> Result<Vec<Book>, StorageError> {
        let rows = self.lock()?;
        Ok(rows.clone())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.lock().map(|_| ())
    }
}
