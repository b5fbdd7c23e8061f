use crate::error::ApiError;
use crate::routes::AppState;
use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::error;

const PREDICT_TIMEOUT: Duration = Duration::from_secs(10);
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Proxies a landmark sequence to the external prediction service. The call
/// is independent of room state; the result goes only to the requester.
pub async fn predict(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let landmarks = body
        .get("landmarks")
        .and_then(Value::as_array)
        .filter(|a| !a.is_empty())
        .ok_or_else(|| {
            ApiError::BadRequest("Invalid request: landmarks array is required".to_string())
        })?;

    let url = format!("{}/predict", state.config.ai_model_url);
    let response = state
        .http
        .post(&url)
        .json(&json!({ "landmarks": landmarks }))
        .timeout(PREDICT_TIMEOUT)
        .send()
        .await
        .map_err(|e| map_send_error(&url, e))?;

    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(String::from))
            .unwrap_or_else(|| "AI model prediction failed".to_string());
        return Err(ApiError::Upstream {
            status: status.as_u16(),
            message,
        });
    }

    let payload: Value = response.json().await.map_err(|e| {
        error!("Unreadable prediction response from {url}: {e}");
        ApiError::Internal
    })?;

    Ok(Json(json!({
        "ok": true,
        "prediction": payload.get("prediction"),
    })))
}

/// Reachability probe for the prediction service. Always answers 200; the
/// availability verdict is in the body.
pub async fn prediction_health(State(state): State<AppState>) -> Json<Value> {
    let url = format!("{}/predict", state.config.ai_model_url);

    match state.http.get(&url).timeout(PROBE_TIMEOUT).send().await {
        Ok(response) => Json(json!({
            "ok": true,
            "aiModelAvailable": response.status().as_u16() != 503,
            "aiModelUrl": state.config.ai_model_url,
        })),
        Err(_) => Json(json!({
            "ok": true,
            "aiModelAvailable": false,
            "aiModelUrl": state.config.ai_model_url,
            "error": "AI model service is not reachable",
        })),
    }
}

fn map_send_error(url: &str, e: reqwest::Error) -> ApiError {
    error!("Prediction request to {url} failed: {e}");
    if e.is_timeout() || e.is_connect() {
        ApiError::ServiceUnavailable(
            "AI model service is unavailable. Please ensure the prediction server is running."
                .to_string(),
        )
    } else {
        ApiError::Internal
    }
}
