use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::handlers::FoodDetector;
use crate::models::{DetectFoodRequest, DetectFoodResponse, ErrorResponse};

/// Request bodies carry whole images inline
pub const MAX_BODY_BYTES: usize = 100 * 1024 * 1024;

pub struct AppState {
    pub detector: Arc<FoodDetector>,
}

pub fn create_router(detector: Arc<FoodDetector>) -> Router {
    let state = Arc::new(AppState { detector });

    let detect_food = post(detect_food_handler).fallback(method_not_allowed);

    Router::new()
        .route("/", detect_food.clone())
        .route("/api/detect_food", detect_food)
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// Any failure inside the handler, rendered as `{"success": false, "message": ...}`
pub struct ApiError(anyhow::Error);

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        log::error!("❌ Request failed: {}", message);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}

async fn detect_food_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<DetectFoodResponse>, ApiError> {
    log::info!("🔔 Detection request received ({} bytes)", body.len());

    let request: DetectFoodRequest = serde_json::from_slice(&body)?;
    let image = match request.image {
        Some(serde_json::Value::String(image)) => image,
        _ => return Err(anyhow::anyhow!("Invalid image data format.").into()),
    };

    let result = state.detector.detect_food_and_calories(&image).await?;

    Ok(Json(DetectFoodResponse {
        result,
        success: true,
    }))
}

async fn method_not_allowed(method: Method) -> Response {
    log::warn!("⚠️ Rejected {} request", method);

    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        format!("Method {} Not Allowed", method),
    )
        .into_response()
}

async fn health_check() -> &'static str {
    "OK"
}
