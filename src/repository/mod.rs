//! Repository layer for database operations

pub mod books;
pub mod members;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Book, BookSearch, CreateBook, CreateMember, Member, UpdateBook, UpdateMember},
};

/// Record store operations for members and books.
///
/// Every mutating operation commits on success and rolls back on failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LibraryStore: Send + Sync {
    async fn create_member(&self, data: &CreateMember) -> AppResult<Member>;
    async fn get_member(&self, id: i32) -> AppResult<Member>;
    async fn list_members(&self) -> AppResult<Vec<Member>>;
    async fn update_member(&self, id: i32, data: &UpdateMember) -> AppResult<Member>;
    async fn delete_member(&self, id: i32) -> AppResult<()>;

    async fn create_book(&self, data: &CreateBook) -> AppResult<Book>;
    async fn get_book(&self, id: i32) -> AppResult<Book>;
    async fn list_books(&self) -> AppResult<Vec<Book>>;
    async fn update_book(&self, id: i32, data: &UpdateBook) -> AppResult<Book>;
    async fn delete_book(&self, id: i32) -> AppResult<()>;
    async fn search_books(&self, query: &BookSearch) -> AppResult<Vec<Book>>;

    /// Check database connectivity
    async fn ping(&self) -> AppResult<()>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub members: members::MembersRepository,
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            members: members::MembersRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create the `member` and `book` tables if they do not exist yet
    pub async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS member (
                id SERIAL PRIMARY KEY,
                name VARCHAR(100) NOT NULL,
                email VARCHAR(100) NOT NULL UNIQUE,
                joined_date TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS book (
                id INTEGER PRIMARY KEY,
                title VARCHAR(200) NOT NULL,
                author VARCHAR(100) NOT NULL,
                available BOOLEAN NOT NULL DEFAULT TRUE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl LibraryStore for Repository {
    async fn create_member(&self, data: &CreateMember) -> AppResult<Member> {
        self.members.create(data).await
    }

    async fn get_member(&self, id: i32) -> AppResult<Member> {
        self.members.get_by_id(id).await
    }

    async fn list_members(&self) -> AppResult<Vec<Member>> {
        self.members.list().await
    }

    async fn update_member(&self, id: i32, data: &UpdateMember) -> AppResult<Member> {
        self.members.update(id, data).await
    }

    async fn delete_member(&self, id: i32) -> AppResult<()> {
        self.members.delete(id).await
    }

    async fn create_book(&self, data: &CreateBook) -> AppResult<Book> {
        self.books.create(data).await
    }

    async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.books.get_by_id(id).await
    }

    async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.books.list().await
    }

    async fn update_book(&self, id: i32, data: &UpdateBook) -> AppResult<Book> {
        self.books.update(id, data).await
    }

    async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.books.delete(id).await
    }

    async fn search_books(&self, query: &BookSearch) -> AppResult<Vec<Book>> {
        self.books.search(query).await
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
