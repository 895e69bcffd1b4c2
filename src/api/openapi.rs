//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, members};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Records API",
        version = "0.1.0",
        description = "Members and books of a library, over REST JSON"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Members
        members::create_member,
        members::list_members,
        members::get_member,
        members::update_member,
        members::delete_member,
        // Books
        books::create_book,
        books::list_books,
        books::get_book,
        books::update_book,
        books::delete_book,
        books::search_books,
    ),
    components(
        schemas(
            // Members
            crate::models::member::Member,
            crate::models::member::MemberShort,
            crate::models::member::CreateMember,
            crate::models::member::UpdateMember,
            members::MemberResponse,
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            books::BookResponse,
            // Shared
            crate::api::DeletedResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "members", description = "Library member management"),
        (name = "books", description = "Book catalog management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_library_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/library/members",
            "/library/members/{id}",
            "/library/books",
            "/library/books/{id}",
            "/library/books/search",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
