//! House Price API Server
//!
//! HTTP surface the presentation layer calls: feature encoding plus model
//! inference behind a small set of JSON endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod fixtures;
mod routes;
mod settings;

pub use settings::Settings;

use price_model::Predictor;

/// Application state shared across handlers.
///
/// The predictor wraps the model loaded at startup; it is never mutated
/// afterwards, so plain `Arc` sharing is safe.
pub struct AppState {
    /// Predictor around the loaded regression model
    pub predictor: Predictor,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create application state around a predictor
    pub fn new(predictor: Predictor) -> Self {
        Self {
            predictor,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub model_loaded: bool,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/predict", post(routes::predict::predict))
        .route("/api/v1/states", get(routes::states::get_states))
        .route("/api/v1/examples", get(routes::examples::get_examples))
        .route("/api/v1/comparison", get(routes::examples::get_comparison))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let model_loaded = state.predictor.is_ready();
    let status = if model_loaded { "healthy" } else { "degraded" };

    let response = HealthResponse {
        status: status.to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        model_loaded,
    };

    let code = if model_loaded {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(response))
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server
pub async fn run_server(
    addr: &str,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);

    info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use price_model::{ModelError, RegressionModel};
    use tower::ServiceExt;

    struct StubModel {
        output: f64,
    }

    impl RegressionModel for StubModel {
        fn regress(
            &self,
            _features: &feature_codec::FeatureVector,
        ) -> Result<f64, ModelError> {
            Ok(self.output)
        }
    }

    fn router_with_stub(output: f64) -> Router {
        let predictor = Predictor::new(Arc::new(StubModel { output }));
        create_router(Arc::new(AppState::new(predictor)))
    }

    fn router_without_model() -> Router {
        create_router(Arc::new(AppState::new(Predictor::uninitialized())))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn predict_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/predict")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_ok() {
        let app = router_with_stub(0.0);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["model_loaded"], true);
    }

    #[tokio::test]
    async fn test_health_degraded_without_model() {
        let app = router_without_model();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(response).await;
        assert_eq!(json["status"], "degraded");
    }

    #[tokio::test]
    async fn test_predict_round_trip() {
        let app = router_with_stub(47500.0_f64.ln());
        let response = app
            .oneshot(predict_request(serde_json::json!({
                "bed": 2,
                "bath": 1,
                "acre_lot": 10.0,
                "state": "Massachusetts",
                "house_size": 100.0
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let price = json["price"].as_f64().unwrap();
        assert!((price - 47500.00).abs() < 0.01);
        assert_eq!(json["features"][3], 4.0);
    }

    #[tokio::test]
    async fn test_predict_unknown_state() {
        let app = router_with_stub(0.0);
        let response = app
            .oneshot(predict_request(serde_json::json!({
                "bed": 2,
                "bath": 1,
                "acre_lot": 10.0,
                "state": "Atlantis",
                "house_size": 100.0
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("Atlantis"));
    }

    #[tokio::test]
    async fn test_predict_out_of_form_bounds() {
        let app = router_with_stub(0.0);
        let response = app
            .oneshot(predict_request(serde_json::json!({
                "bed": 2,
                "bath": 1,
                "acre_lot": 10.0,
                "state": "Maine",
                "house_size": 99999.0
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_predict_without_model_is_503() {
        let app = router_without_model();
        let response = app
            .oneshot(predict_request(serde_json::json!({
                "bed": 2,
                "bath": 1,
                "acre_lot": 10.0,
                "state": "Maine",
                "house_size": 100.0
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_states_listing() {
        let app = router_with_stub(0.0);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/states")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let states = json["states"].as_array().unwrap();
        assert_eq!(states.len(), 18);
        assert_eq!(states[4]["name"], "Massachusetts");
        assert_eq!(states[4]["code"], 4);
        assert_eq!(states[8]["name"], "Pennsylvania");
        assert_eq!(states[8]["code"], 8);
    }

    #[tokio::test]
    async fn test_examples_are_pinned() {
        let app = router_with_stub(0.0);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/examples")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let examples = json["examples"].as_array().unwrap();
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0]["state"], "Massachusetts");
        assert_eq!(examples[0]["price"], 47500.00);
        assert_eq!(examples[0]["features"][3], 4.0);
        assert_eq!(examples[1]["state"], "Pennsylvania");
        assert_eq!(examples[1]["price"], 92451.63);
    }

    #[tokio::test]
    async fn test_comparison_covers_all_states() {
        let app = router_with_stub(0.0);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/comparison")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let rows = json["prices"].as_array().unwrap();
        assert_eq!(rows.len(), 18);
    }
}
