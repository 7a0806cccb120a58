mod create;
mod delete;
mod get;
mod list;

use crate::types::Context;
use axum::{http::StatusCode, response::IntoResponse, routing, Router};
use std::sync::Arc;

async fn unsupported_method() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Unsupported HTTP method")
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route(
            "/cakes",
            routing::get(list::handler::handler)
                .post(create::handler::handler)
                .fallback(unsupported_method),
        )
        .route(
            "/cake",
            routing::get(get::handler::handler)
                .delete(delete::handler::handler)
                .fallback(unsupported_method),
        )
}

#[cfg(test)]
mod tests {
    use super::get_router;
    use crate::{
        types::{AppContext, Context},
        utils::database::DatabaseConnection,
    };
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use sqlx::postgres::PgPoolOptions;
    use std::sync::Arc;
    use tower::ServiceExt;

    // Lazy pool: the paths under test respond before any query runs.
    fn test_router() -> axum::Router {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://127.0.0.1/cakes")
            .unwrap();

        let ctx = Arc::new(Context {
            app: AppContext {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            db_conn: DatabaseConnection { pool },
        });

        get_router().with_state(ctx)
    }

    #[tokio::test]
    async fn unsupported_methods_get_plain_text_404() {
        for (method, uri) in [
            ("PUT", "/cakes"),
            ("PATCH", "/cakes"),
            ("PUT", "/cake"),
            ("PATCH", "/cake"),
        ] {
            let response = test_router()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri(uri)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::NOT_FOUND);

            let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
            assert_eq!(&body[..], b"Unsupported HTTP method");
        }
    }

    #[tokio::test]
    async fn malformed_create_body_is_bad_request() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/cakes")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_delete_body_is_bad_request() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/cake")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
