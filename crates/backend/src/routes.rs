use axum::{routing::get, Router};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // LIST VIEWS
        // ========================================
        .route("/api/customers/list", get(handlers::a001_customer::list))
        .route("/api/employees/list", get(handlers::a002_employee::list))
        .route("/api/suppliers/list", get(handlers::a003_supplier::list))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn status_of(uri: &str) -> StatusCode {
        configure_routes()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_health() {
        assert_eq!(status_of("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_without_database_is_server_error() {
        // в юнит-тестах глобальное подключение к БД не инициализируется
        assert_eq!(
            status_of("/api/suppliers/list?searchText=alpi").await,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_unknown_route() {
        assert_eq!(status_of("/api/products/list").await, StatusCode::NOT_FOUND);
    }
}
