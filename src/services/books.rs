//! Book catalog service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::book::{Book, BookSearch, CreateBook, UpdateBook},
    repository::LibraryStore,
};

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn LibraryStore>,
}

impl BooksService {
    pub fn new(store: Arc<dyn LibraryStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.store.list_books().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.store.get_book(id).await
    }

    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let book = self.store.create_book(data).await?;
        tracing::info!(book_id = book.id, "book created");
        Ok(book)
    }

    /// Apply a partial update. An empty payload returns the stored book untouched.
    pub async fn update(&self, id: i32, data: &UpdateBook) -> AppResult<Book> {
        if data.is_empty() {
            return self.store.get_book(id).await;
        }
        let book = self.store.update_book(id, data).await?;
        tracing::info!(book_id = id, "book updated");
        Ok(book)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.store.delete_book(id).await?;
        tracing::info!(book_id = id, "book deleted");
        Ok(())
    }

    /// Search by title and/or author substring; empty filters are ignored
    pub async fn search(&self, query: BookSearch) -> AppResult<Vec<Book>> {
        let query = query.normalized();
        tracing::debug!(title = ?query.title, author = ?query.author, "searching books");
        self.store.search_books(&query).await
    }
}
