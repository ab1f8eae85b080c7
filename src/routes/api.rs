use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{error::AppError, models::trip::TripRecord, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/plan-trip", post(plan_trip))
        .route("/save-trip", post(save_trip))
        .route("/my-trips", get(my_trips))
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct PlanTripRequest {
    text_prompt: Option<String>,
    user_identifier: Option<String>,
}

#[derive(Serialize)]
struct PlanTripResponse {
    response: String,
}

async fn plan_trip(
    State(state): State<AppState>,
    Json(request): Json<PlanTripRequest>,
) -> Result<Json<PlanTripResponse>, AppError> {
    let plan = state
        .planner
        .plan_trip(request.text_prompt.as_deref())
        .await?;

    // Best-effort record of the generation; the plan is already in hand.
    let record = TripRecord::auto(
        request.user_identifier.as_deref(),
        request.text_prompt.as_deref(),
        plan.clone(),
    );
    if let Err(err) = state.trips.insert(&record).await {
        error!("failed to record generated trip: {err:?}");
    }

    Ok(Json(PlanTripResponse { response: plan }))
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct SaveTripRequest {
    guest_name: Option<String>,
    trip_plan: Option<String>,
    aesthetic_prompt: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveTripResponse {
    success: bool,
    message: String,
    trip_id: String,
    saved_at: DateTime<Utc>,
}

async fn save_trip(
    State(state): State<AppState>,
    Json(request): Json<SaveTripRequest>,
) -> Result<Json<SaveTripResponse>, AppError> {
    let guest_name = require_field(request.guest_name.as_deref())?;
    let trip_plan = require_field(request.trip_plan.as_deref())?;

    let record = TripRecord::manual(guest_name, request.aesthetic_prompt.as_deref(), trip_plan);
    state.trips.insert(&record).await?;
    info!(user = %record.user_identifier, trip = %record.id, "trip saved");

    Ok(Json(SaveTripResponse {
        success: true,
        message: format!("Trip saved successfully for {guest_name}!"),
        trip_id: record.id,
        saved_at: record.created_at,
    }))
}

fn require_field(value: Option<&str>) -> Result<&str, AppError> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            AppError::BadRequest("Missing required fields: guestName and tripPlan".to_string())
        })
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct MyTripsQuery {
    user: Option<String>,
}

#[derive(Serialize)]
struct MyTripsResponse {
    trips: Vec<TripSummary>,
}

#[derive(Serialize)]
struct TripSummary {
    id: String,
    prompt: String,
    plan: PlanPayload,
    created_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct PlanPayload {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
}

impl From<TripRecord> for TripSummary {
    fn from(record: TripRecord) -> Self {
        Self {
            id: record.id,
            prompt: record.prompt,
            plan: PlanPayload {
                text: record.plan_text,
                saved_at: record.saved_at,
            },
            created_at: record.created_at,
        }
    }
}

async fn my_trips(
    State(state): State<AppState>,
    Query(query): Query<MyTripsQuery>,
) -> Result<Json<MyTripsResponse>, AppError> {
    let user = query
        .user
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing user query param".to_string()))?;

    let trips = state
        .trips
        .list_manual(user)
        .await?
        .into_iter()
        .map(TripSummary::from)
        .collect();

    Ok(Json(MyTripsResponse { trips }))
}
