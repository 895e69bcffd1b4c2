//! Book catalog endpoints

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookSearch, CreateBook, UpdateBook},
    AppState,
};

use super::{DeletedResponse, RecordId, ValidatedJson};

/// Body returned after creating or updating a book
#[derive(Debug, Serialize, ToSchema)]
pub struct BookResponse {
    pub success: bool,
    pub book: Book,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            success: true,
            book,
        }
    }
}

/// Add a book under a caller-chosen id
#[utoipa::path(
    post,
    path = "/library/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = BookResponse),
        (status = 400, description = "Invalid payload", body = crate::error::ErrorResponse),
        (status = 500, description = "Store error, e.g. duplicate id", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateBook>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    let book = state.services.books.create(&data).await?;
    Ok((StatusCode::CREATED, Json(book.into())))
}

/// List all books
#[utoipa::path(
    get,
    path = "/library/books",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/library/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Update title, author and/or availability of a book
#[utoipa::path(
    put,
    path = "/library/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    ValidatedJson(data): ValidatedJson<UpdateBook>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.books.update(id, &data).await?;
    Ok(Json(book.into()))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/library/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = DeletedResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<DeletedResponse>> {
    state.services.books.delete(id).await?;
    Ok(Json(DeletedResponse {
        success: true,
        message: "Book deleted".to_string(),
    }))
}

/// Search books by title and/or author substring (case-insensitive)
#[utoipa::path(
    get,
    path = "/library/books/search",
    tag = "books",
    params(BookSearch),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>),
        (status = 500, description = "Store error", body = crate::error::ErrorResponse)
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    query: Result<Query<BookSearch>, QueryRejection>,
) -> AppResult<Json<Vec<Book>>> {
    let Query(query) = query.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let books = state.services.books.search(query).await?;
    Ok(Json(books))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use mockall::predicate::eq;
    use serde_json::json;

    use crate::{
        api::test_support::{app, send},
        error::AppError,
        models::book::{Book, BookSearch, CreateBook, UpdateBook},
        repository::MockLibraryStore,
    };

    fn dune() -> Book {
        Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            available: true,
        }
    }

    #[tokio::test]
    async fn test_create_book_uses_caller_id() {
        let mut store = MockLibraryStore::new();
        store
            .expect_create_book()
            .withf(|data: &CreateBook| data.id == 1 && data.available)
            .times(1)
            .returning(|data| {
                Ok(Book {
                    id: data.id,
                    title: data.title.clone(),
                    author: data.author.clone(),
                    available: data.available,
                })
            });

        let (status, body) = send(
            app(store),
            Method::POST,
            "/library/books",
            Some(json!({"id": 1, "title": "Dune", "author": "Frank Herbert", "available": true})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({"success": true, "book": {"id": 1, "title": "Dune", "author": "Frank Herbert", "available": true}})
        );
    }

    #[tokio::test]
    async fn test_create_book_without_id_is_rejected() {
        let (status, _) = send(
            app(MockLibraryStore::new()),
            Method::POST,
            "/library/books",
            Some(json!({"title": "Dune", "author": "Frank Herbert", "available": true})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_duplicate_book_id_is_server_error() {
        let mut store = MockLibraryStore::new();
        store
            .expect_create_book()
            .returning(|_| Err(AppError::Conflict("duplicate key value violates unique constraint \"book_pkey\"".into())));

        let (status, _) = send(
            app(store),
            Method::POST,
            "/library/books",
            Some(json!({"id": 1, "title": "Dune", "author": "Frank Herbert", "available": true})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_get_unknown_book_is_404() {
        let mut store = MockLibraryStore::new();
        store
            .expect_get_book()
            .with(eq(77))
            .returning(|id| Err(AppError::NotFound(format!("Book {} not found", id))));

        let (status, body) = send(app(store), Method::GET, "/library/books/77", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Book 77 not found");
    }

    #[tokio::test]
    async fn test_update_availability_only() {
        let mut store = MockLibraryStore::new();
        store
            .expect_update_book()
            .withf(|id: &i32, data: &UpdateBook| {
                *id == 1 && data.available == Some(false) && data.title.is_none() && data.author.is_none()
            })
            .times(1)
            .returning(|_, _| Ok(Book { available: false, ..dune() }));

        let (status, body) = send(
            app(store),
            Method::PUT,
            "/library/books/1",
            Some(json!({"available": false})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["book"]["available"], false);
        assert_eq!(body["book"]["title"], "Dune");
    }

    #[tokio::test]
    async fn test_delete_book() {
        let mut store = MockLibraryStore::new();
        store.expect_delete_book().with(eq(1)).times(1).returning(|_| Ok(()));

        let (status, body) = send(app(store), Method::DELETE, "/library/books/1", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "message": "Book deleted"}));
    }

    #[tokio::test]
    async fn test_search_is_not_shadowed_by_id_route() {
        let mut store = MockLibraryStore::new();
        store.expect_get_book().never();
        store
            .expect_search_books()
            .withf(|query: &BookSearch| {
                query.title.is_none() && query.author.as_deref() == Some("herb")
            })
            .times(1)
            .returning(|_| Ok(vec![dune()]));

        let (status, body) = send(app(store), Method::GET, "/library/books/search?author=herb", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["title"], "Dune");
    }

    #[tokio::test]
    async fn test_search_passes_both_filters_and_drops_empty_ones() {
        let mut store = MockLibraryStore::new();
        store
            .expect_search_books()
            .withf(|query: &BookSearch| {
                query.title.as_deref() == Some("dune") && query.author.as_deref() == Some("herbert")
            })
            .times(1)
            .returning(|_| Ok(vec![]));
        store
            .expect_search_books()
            .withf(|query: &BookSearch| *query == BookSearch::default())
            .times(1)
            .returning(|_| Ok(vec![dune()]));

        let app = app(store);
        let (status, body) = send(
            app.clone(),
            Method::GET,
            "/library/books/search?title=dune&author=herbert",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, body) = send(app, Method::GET, "/library/books/search?title=&author=", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_unknown_book_is_404() {
        let mut store = MockLibraryStore::new();
        store
            .expect_update_book()
            .withf(|id: &i32, _: &UpdateBook| *id == 5555)
            .returning(|id, _| Err(AppError::NotFound(format!("Book {} not found", id))));

        let (status, body) = send(
            app(store),
            Method::PUT,
            "/library/books/5555",
            Some(json!({"title": "Children of Dune"})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Book 5555 not found");
    }

    #[tokio::test]
    async fn test_delete_unknown_book_is_404() {
        let mut store = MockLibraryStore::new();
        store
            .expect_delete_book()
            .with(eq(5555))
            .returning(|id| Err(AppError::NotFound(format!("Book {} not found", id))));

        let (status, body) = send(app(store), Method::DELETE, "/library/books/5555", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Book 5555 not found");
    }
}
