//! Business logic services

pub mod books;
pub mod members;

use std::sync::Arc;

use crate::{error::AppResult, repository::LibraryStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub members: members::MembersService,
    pub books: books::BooksService,
    store: Arc<dyn LibraryStore>,
}

impl Services {
    /// Create all services over the given record store
    pub fn new(store: Arc<dyn LibraryStore>) -> Self {
        Self {
            members: members::MembersService::new(store.clone()),
            books: books::BooksService::new(store.clone()),
            store,
        }
    }

    /// Check that the record store is reachable
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
