use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use smartrail_booking::{BookingStep, PendingAction};
use smartrail_core::identity::{User, VerificationError};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    /// Accepted but not checked by the default verifier.
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: User,
    /// The intent that was interrupted by the login prompt, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resumed: Option<PendingAction>,
    pub step: BookingStep,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/auth/login", post(login))
        .route("/v1/auth/logout", post(logout))
}

/// Sign in by display name and auto-resume any booking intent that was
/// parked behind the login prompt.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let name = state
        .verifier
        .verify(&req.username, req.password.as_deref())
        .await
        .map_err(|err| match err {
            VerificationError::EmptyName => AppError::ValidationError(err.to_string()),
            VerificationError::Rejected(_) => AppError::LoginRequired(err.to_string()),
        })?;

    let user = state
        .sessions
        .write()
        .await
        .login(&name)
        .ok_or_else(|| AppError::ValidationError("Display name must not be empty".into()))?;

    let mut flow = state.flow.write().await;
    let resumed = flow.resume_after_login();
    if let Some(action) = resumed {
        info!("Resuming pending action after login: {:?}", action);
    }
    let step = flow.step();

    Ok(Json(LoginResponse {
        user,
        resumed,
        step,
    }))
}

/// Sign out. In-progress search and booking state is reset; the user's
/// booking history stays in the store until the same name returns.
async fn logout(State(state): State<AppState>) -> StatusCode {
    state.sessions.write().await.logout();
    state.flow.write().await.reset();
    *state.trip.write().await = None;
    StatusCode::NO_CONTENT
}
