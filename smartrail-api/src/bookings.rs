use axum::{
    extract::State,
    routing::{get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use smartrail_booking::machine::BookNowOutcome;
use smartrail_booking::{BookingStep, PendingAction, PlatformQuote, SeasonQuote};
use smartrail_core::booking::Booking;
use smartrail_core::identity::User;
use smartrail_core::models::TicketOption;
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectRequest {
    pub ticket_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PassengerUpdate {
    pub adults: u32,
    pub children: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformRequest {
    pub station_name: String,
    pub platform_number: String,
    pub people_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRequest {
    pub from_station: String,
    pub to_station: String,
    pub people_count: u32,
    pub duration_days: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStatus {
    pub step: BookingStep,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_ticket: Option<TicketOption>,
    pub login_required: bool,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: User,
    pub bookings: Vec<Booking>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/booking", get(flow_status))
        .route("/v1/booking/select", post(select_ticket))
        .route("/v1/booking/book-now", post(book_now))
        .route("/v1/booking/pay", post(proceed_to_payment))
        .route("/v1/booking/back", post(back_to_options))
        .route("/v1/booking/confirm", post(confirm_booking))
        .route("/v1/booking/close", post(close_flow))
        .route("/v1/booking/passengers", patch(update_passengers))
        .route("/v1/booking/platform", post(book_platform))
        .route("/v1/booking/season", post(book_season))
        .route("/v1/profile", get(profile))
}

async fn status_of(state: &AppState, login_required: bool) -> FlowStatus {
    let flow = state.flow.read().await;
    FlowStatus {
        step: flow.step(),
        selected_ticket: flow.selected_ticket().cloned(),
        login_required,
    }
}

async fn flow_status(State(state): State<AppState>) -> Json<FlowStatus> {
    Json(status_of(&state, false).await)
}

/// Toggle selection of a ticket from the current search results.
async fn select_ticket(
    State(state): State<AppState>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<FlowStatus>, AppError> {
    let ticket = {
        let trip = state.trip.read().await;
        let context = trip
            .as_ref()
            .ok_or_else(|| AppError::ValidationError("No active search results".into()))?;
        context
            .ticket_options
            .iter()
            .find(|t| t.id == req.ticket_id)
            .cloned()
            .ok_or_else(|| {
                AppError::NotFoundError(format!("No ticket option with id {}", req.ticket_id))
            })?
    };

    state.flow.write().await.select_ticket(ticket);
    Ok(Json(status_of(&state, false).await))
}

/// Start the purchase flow for the selected ticket. Without an authenticated
/// session the intent is parked and the caller is told to sign in first.
async fn book_now(State(state): State<AppState>) -> Result<Json<FlowStatus>, AppError> {
    let authenticated = state.sessions.read().await.current_user().is_some();
    let outcome = state
        .flow
        .write()
        .await
        .book_now(authenticated)
        .map_err(AppError::from_flow)?;
    Ok(Json(status_of(&state, outcome == BookNowOutcome::LoginRequired).await))
}

async fn proceed_to_payment(State(state): State<AppState>) -> Result<Json<FlowStatus>, AppError> {
    state
        .flow
        .write()
        .await
        .proceed_to_payment()
        .map_err(AppError::from_flow)?;
    Ok(Json(status_of(&state, false).await))
}

async fn back_to_options(State(state): State<AppState>) -> Result<Json<FlowStatus>, AppError> {
    state
        .flow
        .write()
        .await
        .back_to_options()
        .map_err(AppError::from_flow)?;
    Ok(Json(status_of(&state, false).await))
}

/// Confirm the long-distance purchase: snapshots the final passenger counts
/// into the booking record and prepends it to the user's history.
async fn confirm_booking(State(state): State<AppState>) -> Result<Json<Booking>, AppError> {
    let user = state
        .sessions
        .read()
        .await
        .current_user()
        .cloned()
        .ok_or_else(|| AppError::LoginRequired("Sign in to confirm a booking".into()))?;

    let context = state
        .trip
        .read()
        .await
        .clone()
        .ok_or_else(|| AppError::ValidationError("No active trip to confirm".into()))?;

    let ticket = state
        .flow
        .write()
        .await
        .confirm()
        .map_err(AppError::from_flow)?;

    let mut query_info = context.query;
    query_info.adults = context.adults;
    query_info.children = context.children;

    let booking = Booking::long_distance(ticket, query_info);
    state
        .sessions
        .write()
        .await
        .add_booking(&user.name, booking.clone());
    info!("Booking confirmed: {}", booking.booking_id());

    Ok(Json(booking))
}

async fn close_flow(State(state): State<AppState>) -> Json<FlowStatus> {
    state.flow.write().await.close();
    Json(status_of(&state, false).await)
}

/// Adjust the passenger counts for the active results. Adults are floored at
/// one; children at zero.
async fn update_passengers(
    State(state): State<AppState>,
    Json(req): Json<PassengerUpdate>,
) -> Result<Json<PassengerUpdate>, AppError> {
    let mut trip = state.trip.write().await;
    let context = trip
        .as_mut()
        .ok_or_else(|| AppError::ValidationError("No active search results".into()))?;
    context.adults = req.adults.max(1);
    context.children = req.children;
    Ok(Json(PassengerUpdate {
        adults: context.adults,
        children: context.children,
    }))
}

/// Issue a platform-entry ticket. The base rate is drawn fresh for this
/// booking, so identical inputs can price differently across bookings.
async fn book_platform(
    State(state): State<AppState>,
    Json(req): Json<PlatformRequest>,
) -> Result<Json<Booking>, AppError> {
    let user = match state.sessions.read().await.current_user().cloned() {
        Some(user) => user,
        None => {
            state
                .flow
                .write()
                .await
                .remember_pending(PendingAction::Platform);
            return Err(AppError::LoginRequired(
                "Sign in to book a platform ticket".into(),
            ));
        }
    };

    if req.station_name.trim().is_empty() || req.platform_number.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Station name and platform number are required".into(),
        ));
    }

    let quote = PlatformQuote::sample();
    let booking = quote.confirm(req.station_name, req.platform_number, req.people_count);
    state
        .sessions
        .write()
        .await
        .add_booking(&user.name, booking.clone());
    info!("Platform ticket issued: {}", booking.booking_id());

    Ok(Json(booking))
}

/// Issue a season pass. The per-day rate is drawn fresh for this booking.
async fn book_season(
    State(state): State<AppState>,
    Json(req): Json<SeasonRequest>,
) -> Result<Json<Booking>, AppError> {
    let user = match state.sessions.read().await.current_user().cloned() {
        Some(user) => user,
        None => {
            state
                .flow
                .write()
                .await
                .remember_pending(PendingAction::Season);
            return Err(AppError::LoginRequired(
                "Sign in to book a season ticket".into(),
            ));
        }
    };

    if req.from_station.trim().is_empty() || req.to_station.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Both stations are required".into(),
        ));
    }

    let quote = SeasonQuote::sample();
    let booking = quote.confirm(
        req.from_station,
        req.to_station,
        req.people_count,
        req.duration_days,
    );
    state
        .sessions
        .write()
        .await
        .add_booking(&user.name, booking.clone());
    info!("Season ticket issued: {}", booking.booking_id());

    Ok(Json(booking))
}

/// The signed-in user's profile: identity plus bookings, newest-first by
/// each booking's own date.
async fn profile(State(state): State<AppState>) -> Result<Json<ProfileResponse>, AppError> {
    let sessions = state.sessions.read().await;
    let user = sessions
        .current_user()
        .cloned()
        .ok_or_else(|| AppError::LoginRequired("Sign in to view your profile".into()))?;
    let bookings = sessions.bookings_for(&user.name);
    Ok(Json(ProfileResponse { user, bookings }))
}
