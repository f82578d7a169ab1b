//! Handlers for the `/volunteers` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use domus_core::types::DbId;
use domus_db::models::event::Event;
use domus_db::models::volunteer::{CreateVolunteer, UpdateVolunteer, Volunteer};
use domus_db::repositories::VolunteerRepo;

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::state::AppState;

/// POST /api/v1/volunteers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateVolunteer>,
) -> AppResult<(StatusCode, Json<Volunteer>)> {
    let volunteer = VolunteerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(volunteer)))
}

/// GET /api/v1/volunteers?q=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Volunteer>>> {
    let volunteers = match params.term() {
        Some(term) => VolunteerRepo::search(&state.pool, term).await?,
        None => VolunteerRepo::list(&state.pool).await?,
    };
    Ok(Json(volunteers))
}

/// GET /api/v1/volunteers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Volunteer>> {
    Ok(Json(VolunteerRepo::get(&state.pool, id).await?))
}

/// PUT /api/v1/volunteers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVolunteer>,
) -> AppResult<Json<Volunteer>> {
    let volunteer = VolunteerRepo::update(&state.pool, id, &input).await?;
    Ok(Json(volunteer))
}

/// DELETE /api/v1/volunteers/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    VolunteerRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/volunteers/{id}/events
pub async fn list_events(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Event>>> {
    VolunteerRepo::get(&state.pool, id).await?;
    let events = VolunteerRepo::list_events(&state.pool, id).await?;
    Ok(Json(events))
}
