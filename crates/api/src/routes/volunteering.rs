//! Routes for volunteers, events and their links.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{event, volunteer};
use crate::state::AppState;

/// ```text
/// GET    /volunteers                              -> list (?q= searches)
/// POST   /volunteers                              -> create
/// GET    /volunteers/{id}                         -> get_by_id
/// PUT    /volunteers/{id}                         -> update
/// DELETE /volunteers/{id}                         -> delete
/// GET    /volunteers/{id}/events                  -> list_events
///
/// GET    /events                                  -> list (?q= searches)
/// POST   /events                                  -> create
/// GET    /events/{id}                             -> get_by_id
/// PUT    /events/{id}                             -> update
/// DELETE /events/{id}                             -> delete
/// GET    /events/{id}/volunteers                  -> list_volunteers
/// PUT    /events/{id}/volunteers                  -> set_volunteers
/// PUT    /events/{id}/volunteers/{volunteer_id}   -> attach_volunteer
/// DELETE /events/{id}/volunteers/{volunteer_id}   -> detach_volunteer
///
/// GET    /volunteering/totals                     -> totals
/// ```
pub fn router() -> Router<AppState> {
    let volunteers = Router::new()
        .route("/", get(volunteer::list).post(volunteer::create))
        .route(
            "/{id}",
            get(volunteer::get_by_id)
                .put(volunteer::update)
                .delete(volunteer::delete),
        )
        .route("/{id}/events", get(volunteer::list_events));

    let events = Router::new()
        .route("/", get(event::list).post(event::create))
        .route(
            "/{id}",
            get(event::get_by_id).put(event::update).delete(event::delete),
        )
        .route(
            "/{id}/volunteers",
            get(event::list_volunteers).put(event::set_volunteers),
        )
        .route(
            "/{id}/volunteers/{volunteer_id}",
            put(event::attach_volunteer).delete(event::detach_volunteer),
        );

    Router::new()
        .nest("/volunteers", volunteers)
        .nest("/events", events)
        .route("/volunteering/totals", get(event::totals))
}
