use crate::error::ApiError;
use crate::routes::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use rand::distr::{Alphanumeric, SampleString};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

const TOKEN_LEN: usize = 8;

#[derive(Serialize)]
pub struct InviteResponse {
    pub ok: bool,
    #[serde(rename = "inviteLink")]
    pub invite_link: String,
}

/// Issues a join link for a room. Stateless: the token is not persisted and
/// carries no entitlement; the link is a convenience for sharing.
pub async fn create_invitation(
    State(_state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<InviteResponse>, ApiError> {
    let email = body.get("email").and_then(Value::as_str).unwrap_or_default();
    let room_id = body
        .get("roomId")
        .and_then(Value::as_str)
        .unwrap_or_default();

    if !is_valid_email(email) {
        return Err(ApiError::BadRequest("a valid email is required".to_string()));
    }
    if !(3..=64).contains(&room_id.chars().count()) {
        return Err(ApiError::BadRequest(
            "roomId must be 3-64 characters".to_string(),
        ));
    }

    let token = Alphanumeric.sample_string(&mut rand::rng(), TOKEN_LEN);
    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    let invite_link = format!("{proto}://{host}/join/{room_id}?i={token}");

    info!("Invite for {email}: {invite_link}");

    Ok(Json(InviteResponse {
        ok: true,
        invite_link,
    }))
}

fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
}
