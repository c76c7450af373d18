mod categories;
mod results;
mod search;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use clubfind_catalog::CatalogClient;
use clubfind_core::{DisplayConfig, RefData};
use clubfind_llm::ChatClient;

use crate::cache::ResultCache;
use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<ChatClient>,
    pub catalog: Arc<CatalogClient>,
    pub refdata: Arc<RefData>,
    pub display: Arc<DisplayConfig>,
    pub cache: Arc<ResultCache>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/search", post(search::run))
        .route("/api/v1/results/{id}", get(results::take))
        .route("/api/v1/categories", get(categories::list))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    Json(ApiResponse {
        data: HealthData { status: "ok" },
        meta: ResponseMeta::new(req_id.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn api_error_validation_error_maps_to_bad_request() {
        let response = ApiError::new("req-1", "validation_error", "invalid input").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_not_found_maps_to_404() {
        let response = ApiError::new("req-2", "not_found", "no such result").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn api_error_unknown_code_maps_to_500() {
        let response = ApiError::new("req-3", "boom", "unexpected").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    fn refdata_fixture(name: &str) -> RefData {
        let root =
            std::env::temp_dir().join(format!("clubfind-routes-{name}-{}", std::process::id()));
        std::fs::create_dir_all(root.join("models")).unwrap();
        std::fs::create_dir_all(root.join("placeholders")).unwrap();
        std::fs::write(root.join("brandlist.txt"), "Ping\nTitleist\n").unwrap();
        std::fs::write(root.join("models/driver.txt"), "G430 Max\n").unwrap();
        std::fs::write(
            root.join("placeholders/driver.txt"),
            "a forgiving driver for a mid handicapper\n",
        )
        .unwrap();
        RefData::load(&root)
    }

    fn chat_body(content: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })
    }

    fn state_with(llm: &MockServer, name: &str) -> AppState {
        AppState {
            backend: Arc::new(
                ChatClient::new(&llm.uri(), None, "test-model", 5).expect("chat client"),
            ),
            catalog: Arc::new(CatalogClient::new(5, "clubfind-test/0.1").expect("catalog client")),
            refdata: Arc::new(refdata_fixture(name)),
            display: Arc::new(DisplayConfig::default()),
            cache: Arc::new(ResultCache::new(300)),
        }
    }

    #[tokio::test]
    async fn health_returns_ok_with_request_id_header() {
        let llm = MockServer::start().await;
        let app = build_app(state_with(&llm, "health"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn categories_lists_all_eight_with_placeholder() {
        let llm = MockServer::start().await;
        let app = build_app(state_with(&llm, "categories"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/categories")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json");
        let data = json["data"].as_array().expect("data array");
        assert_eq!(data.len(), 8);
        let driver = data
            .iter()
            .find(|c| c["slug"] == "driver")
            .expect("driver entry");
        assert_eq!(driver["label"], "Driver");
        assert_eq!(
            driver["placeholder"],
            "a forgiving driver for a mid handicapper"
        );
        let putter = data
            .iter()
            .find(|c| c["slug"] == "putter")
            .expect("putter entry");
        assert!(putter["placeholder"].is_null());
    }

    #[tokio::test]
    async fn search_rejects_empty_query() {
        let llm = MockServer::start().await;
        let app = build_app(state_with(&llm, "empty-query"));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/search")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"query": "  ", "category": "driver"}"#))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn search_rejects_unknown_category() {
        let llm = MockServer::start().await;
        let app = build_app(state_with(&llm, "bad-category"));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/search")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"query": "driver", "category": "mallet"}"#))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn search_then_results_consumes_the_entry() {
        let llm = MockServer::start().await;
        let catalog = MockServer::start().await;

        // Classification fires first, then filter inference.
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_body("0")))
            .up_to_n_times(1)
            .mount(&llm)
            .await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_body(&format!(
                "{}/golf-clubs/drivers?g2_dexterity%5B0%5D=Left+Handed",
                catalog.uri()
            ))))
            .mount(&llm)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<html><body>
                <p class="toolbar-amount"><span class="toolbar-number">1</span></p>
                <div class="product-box product-item-info">
                  <div class="product-brand">Ping</div>
                  <div class="pmp-product-category">G430 Max Driver</div>
                  <div class="current-price">$399.99</div>
                </div>
                </body></html>"#,
            ))
            .mount(&catalog)
            .await;

        let app = build_app(state_with(&llm, "search-results"));

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/search")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"query": "left-handed driver", "category": "driver"}"#,
                    ))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(json["data"]["record_count"], 1);
        assert_eq!(json["data"]["is_model_specific"], false);
        let result_id = json["data"]["result_id"].as_str().expect("result_id");

        let uri = format!("/api/v1/results/{result_id}");
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(&uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(json["data"]["records"][0]["brand"], "Ping");
        assert_eq!(json["data"]["category_label"], "Driver");

        // Render-once: the same id is gone on the second fetch.
        let response = app
            .oneshot(
                Request::builder()
                    .uri(&uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn results_rejects_malformed_id() {
        let llm = MockServer::start().await;
        let app = build_app(state_with(&llm, "bad-id"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/results/not-a-uuid")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
