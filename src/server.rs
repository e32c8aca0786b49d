use axum::{
    extract::Request,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::api::{self, VibeApi};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub api: VibeApi,
}

impl AppState {
    pub fn new(config: Config, api: VibeApi) -> Self {
        Self {
            config: Arc::new(config),
            api,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/recommendations", get(api::list_recommendations))
        .route("/api/recommendations/:id", get(api::get_recommendation))
        .route(
            "/api/recommendations/:id/save",
            post(api::save_recommendation),
        )
        .route("/api/categories", get(api::list_categories))
        .route("/api/user", get(api::get_current_user))
        .route(
            "/api/users/:id/preferences",
            put(api::update_preferences),
        )
        .route(
            "/api/users/:id/onboarding",
            post(api::complete_onboarding),
        )
        .route("/api/users/:id/saved", get(api::get_saved_locations));

    let mut router = Router::new()
        .route("/health", get(health_handler))
        .merge(api_routes)
        .fallback(fallback_handler);

    if let Some(ref appdir) = state.config.appdir {
        router = router.fallback_service(ServeDir::new(appdir));
    }

    let routes = router.with_state(state);

    // Layers on a router run after route matching, so the routes sit behind
    // an empty outer router whose fallback sees the rewritten path.
    Router::new()
        .fallback_service(routes)
        .layer(axum::middleware::from_fn(crate::middleware::normalize_path))
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn health_handler() -> &'static str {
    "OK"
}

async fn fallback_handler(req: Request<axum::body::Body>) -> impl IntoResponse {
    if req.method() == axum::http::Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    StatusCode::NOT_FOUND.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{default_seed, InMemorySource};
    use crate::config::LatencyConfig;
    use crate::query::QueryEngine;
    use crate::user::InMemoryUserStore;
    use axum::body::Body;
    use axum::http::{header, Method};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let engine = QueryEngine::with_defaults(Arc::new(InMemorySource::new(default_seed())));
        let api = VibeApi::new(
            engine,
            Arc::new(InMemoryUserStore::default()),
            LatencyConfig::none(),
        );
        build_router(AppState::new(Config::default(), api))
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = axum::http::Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn ids(json: &Value) -> Vec<String> {
        json["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["recommendationId"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_list_recommendations() {
        let (status, json) = send(app(), Method::GET, "/api/recommendations", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&json), vec!["3", "1", "5", "4", "2", "6"]);
        assert_eq!(json["total"], 6);
        assert_eq!(json["page"], 1);
        assert_eq!(json["limit"], 10);
    }

    #[tokio::test]
    async fn test_filtered_recommendations() {
        let (_, json) = send(
            app(),
            Method::GET,
            "/api/recommendations?vibes=Nightlife",
            None,
        )
        .await;
        assert_eq!(ids(&json), vec!["1", "5"]);

        let (_, json) = send(app(), Method::GET, "/api/recommendations?distance=3", None).await;
        assert_eq!(ids(&json), vec!["3", "1", "5"]);

        let (_, json) = send(
            app(),
            Method::GET,
            "/api/recommendations?vibes=Cozy&category=Nightlife",
            None,
        )
        .await;
        assert_eq!(ids(&json), vec!["1"]);

        let (_, json) = send(
            app(),
            Method::GET,
            "/api/recommendations?page=5&limit=2",
            None,
        )
        .await;
        assert!(ids(&json).is_empty());
        assert_eq!(json["total"], 6);
    }

    #[tokio::test]
    async fn test_bad_query_parameter() {
        let (status, json) = send(app(), Method::GET, "/api/recommendations?page=x", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("page"));
    }

    #[tokio::test]
    async fn test_get_recommendation() {
        let (status, json) = send(app(), Method::GET, "/api/recommendations/4", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["venue_name"], "Harvest Table");

        let (status, json) = send(app(), Method::GET, "/api/recommendations/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Recommendation not found: 999");
    }

    #[tokio::test]
    async fn test_save_recommendation() {
        let (status, json) = send(
            app(),
            Method::POST,
            "/api/recommendations/2/save",
            Some(serde_json::json!({ "userId": "user-123" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["saved"], true);

        let (status, _) = send(
            app(),
            Method::POST,
            "/api/recommendations/2/save",
            Some(serde_json::json!({ "userId": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_user_flow() {
        let app = app();

        let (status, json) = send(app.clone(), Method::GET, "/api/user", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["userId"], "user-123");
        assert_eq!(json["onboarding_complete"], false);

        let (status, json) = send(
            app.clone(),
            Method::PUT,
            "/api/users/user-123/preferences",
            Some(serde_json::json!({ "location": "Brooklyn, NY" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["preferences"]["location"], "Brooklyn, NY");
        assert_eq!(json["preferences"]["vibes"][0], "Trendy");

        let (_, json) = send(
            app.clone(),
            Method::POST,
            "/api/users/user-123/onboarding",
            Some(serde_json::json!({ "vibes": ["Chill"] })),
        )
        .await;
        assert_eq!(json["onboarding_complete"], true);
        assert_eq!(json["preferences"]["location"], "Brooklyn, NY");

        let (status, json) = send(app.clone(), Method::GET, "/api/users/user-123/saved", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!([]));

        let (status, _) = send(app, Method::GET, "/api/users/nobody/saved", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_categories_and_health() {
        let (status, json) = send(app(), Method::GET, "/api/categories", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 6);
        assert_eq!(json[0], "Drinks");

        let response = app()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let (status, _) = send(app(), Method::GET, "/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_path_normalization() {
        let (status, json) = send(app(), Method::GET, "//api//recommendations/4/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["recommendationId"], "4");

        let (status, json) = send(app(), Method::GET, "/api/recommendations/?limit=1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&json), vec!["3"]);
    }
}
