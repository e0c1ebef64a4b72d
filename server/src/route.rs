mod book;

pub use self::book::*;

use axum::extract::Request;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::handler::DependOnInventory;

/// All routes with the shared middleware stack. Every request gets an
/// `x-request-id` (kept when the client sent one) that is echoed on the
/// response and recorded on the request span.
pub fn app<S>(module: S) -> Router
where
    S: DependOnInventory,
{
    Router::<S>::new()
        .route_book()
        .layer(CorsLayer::new())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or_default();
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id,
                )
            }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(module)
}

#[cfg(test)]
mod test {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::handler::memory::MemoryInventory;
    use crate::route::app;

    fn listing() -> Request<Body> {
        Request::builder().uri("/books").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn responses_carry_a_request_id() {
        let first = app(MemoryInventory::default()).oneshot(listing()).await.unwrap();
        let second = app(MemoryInventory::default()).oneshot(listing()).await.unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let id = |response: &axum::response::Response| {
            response.headers()["x-request-id"]
                .to_str()
                .unwrap()
                .to_string()
        };
        assert!(!id(&first).is_empty());
        assert_ne!(id(&first), id(&second));
    }

    #[tokio::test]
    async fn client_request_id_is_kept() {
        let request = Request::builder()
            .uri("/books/7")
            .header("x-request-id", "trace-me")
            .body(Body::empty())
            .unwrap();
        let response = app(MemoryInventory::default()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["x-request-id"], "trace-me");
    }
}
