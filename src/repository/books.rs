//! Books repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{contains_pattern, Book, BookSearch, CreateBook, UpdateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books in id order
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM book ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM book WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Insert a book under the caller-supplied id
    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO book (id, title, author, available)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(data.id)
        .bind(&data.title)
        .bind(&data.author)
        .bind(data.available)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(book)
    }

    /// Overwrite the supplied fields, keeping the others
    pub async fn update(&self, id: i32, data: &UpdateBook) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let book = sqlx::query_as::<_, Book>(
            r#"
            UPDATE book
            SET title = COALESCE($1, title),
                author = COALESCE($2, author),
                available = COALESCE($3, available)
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(data.title.as_deref())
        .bind(data.author.as_deref())
        .bind(data.available)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

        tx.commit().await?;
        Ok(book)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM book WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Case-insensitive substring search on title and/or author.
    /// Missing filters match every book.
    pub async fn search(&self, query: &BookSearch) -> AppResult<Vec<Book>> {
        let title = query.title.as_deref().map(contains_pattern);
        let author = query.author.as_deref().map(contains_pattern);

        let rows = sqlx::query_as::<_, Book>(
            r#"
            SELECT * FROM book
            WHERE ($1::text IS NULL OR title ILIKE $1)
              AND ($2::text IS NULL OR author ILIKE $2)
            ORDER BY id
            "#,
        )
        .bind(title)
        .bind(author)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
