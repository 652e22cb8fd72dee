//! Site routes

use axum::{extract::State, response::Html, routing::get, Router};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Create the router: document at `/`, static files, and the document again
/// for every other path.
///
/// The page shell never derives its view from the URL, so deep links load
/// the home view like a reload does.
pub fn site_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        // Static files
        .nest_service("/assets", ServeDir::new(&state.config.asset_dir))
        .nest_service("/pkg", ServeDir::new(&state.config.bundle_dir))
        .fallback(index)
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.document.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{self, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::config::Config;

    fn test_app() -> Router {
        let config = Config {
            asset_dir: std::env::temp_dir().join("ggjc-missing-assets"),
            bundle_dir: std::env::temp_dir().join("ggjc-missing-bundle"),
            ..Config::default()
        };
        site_routes(AppState::new(config))
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let request = Request::get(uri).body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        let status = response.status();
        let body = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, String::from_utf8(body.to_vec()).expect("utf8"))
    }

    #[tokio::test]
    async fn index_serves_prerendered_home() {
        let (status, body) = get_body(test_app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("GLOBAL GAME JAM"));
        assert!(body.contains("data-view=\"home\""));
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_home_document() {
        let app = test_app();
        let (_, index) = get_body(app.clone(), "/").await;

        for uri in ["/schedule", "/register", "/some/deep/link"] {
            let (status, body) = get_body(app.clone(), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, index, "{uri}");
        }
    }

    #[tokio::test]
    async fn missing_asset_is_not_found() {
        let (status, _) = get_body(test_app(), "/assets/foto1.jpg").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
