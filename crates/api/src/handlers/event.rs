//! Handlers for the `/events` resource and its volunteer links.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use domus_core::types::DbId;
use domus_db::models::event::{CreateEvent, Event, UpdateEvent, VolunteeringTotals};
use domus_db::models::volunteer::Volunteer;
use domus_db::repositories::EventRepo;
use serde::Deserialize;

use super::LinkChange;
use crate::error::AppResult;
use crate::query::SearchParams;
use crate::state::AppState;

/// Request body for replacing an event's volunteer set.
#[derive(Debug, Deserialize)]
pub struct SetVolunteers {
    pub volunteer_ids: Vec<DbId>,
}

/// POST /api/v1/events
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let event = EventRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/v1/events?q=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Event>>> {
    let events = match params.term() {
        Some(term) => EventRepo::search(&state.pool, term).await?,
        None => EventRepo::list(&state.pool).await?,
    };
    Ok(Json(events))
}

/// GET /api/v1/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Event>> {
    Ok(Json(EventRepo::get(&state.pool, id).await?))
}

/// PUT /api/v1/events/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::update(&state.pool, id, &input).await?;
    Ok(Json(event))
}

/// DELETE /api/v1/events/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    EventRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Volunteer links
// ---------------------------------------------------------------------------

/// GET /api/v1/events/{id}/volunteers
pub async fn list_volunteers(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Volunteer>>> {
    EventRepo::get(&state.pool, id).await?;
    let volunteers = EventRepo::list_volunteers(&state.pool, id).await?;
    Ok(Json(volunteers))
}

/// PUT /api/v1/events/{id}/volunteers
pub async fn set_volunteers(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetVolunteers>,
) -> AppResult<Json<Vec<Volunteer>>> {
    EventRepo::set_volunteers(&state.pool, id, &input.volunteer_ids).await?;
    let volunteers = EventRepo::list_volunteers(&state.pool, id).await?;
    Ok(Json(volunteers))
}

/// PUT /api/v1/events/{id}/volunteers/{volunteer_id}
pub async fn attach_volunteer(
    State(state): State<AppState>,
    Path((id, volunteer_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<LinkChange>> {
    let changed = EventRepo::attach_volunteer(&state.pool, id, volunteer_id).await?;
    Ok(Json(LinkChange { changed }))
}

/// DELETE /api/v1/events/{id}/volunteers/{volunteer_id}
pub async fn detach_volunteer(
    State(state): State<AppState>,
    Path((id, volunteer_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<LinkChange>> {
    let changed = EventRepo::detach_volunteer(&state.pool, id, volunteer_id).await?;
    Ok(Json(LinkChange { changed }))
}

/// GET /api/v1/volunteering/totals
pub async fn totals(State(state): State<AppState>) -> AppResult<Json<VolunteeringTotals>> {
    Ok(Json(EventRepo::totals(&state.pool).await?))
}
