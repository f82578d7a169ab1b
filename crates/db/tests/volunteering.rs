//! Integration tests for volunteers, events and their links.

use assert_matches::assert_matches;
use chrono::NaiveDate;
use domus_core::error::CoreError;
use domus_db::models::event::CreateEvent;
use domus_db::models::volunteer::CreateVolunteer;
use domus_db::repositories::{EventRepo, VolunteerRepo};
use domus_db::StoreError;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_volunteer(name: &str, email: &str) -> CreateVolunteer {
    CreateVolunteer {
        name: name.to_string(),
        email: email.to_string(),
        phone: Some("+34 600 123 456".to_string()),
    }
}

fn new_event(title: &str, date: NaiveDate) -> CreateEvent {
    CreateEvent {
        title: title.to_string(),
        description: "Beach clean-up".to_string(),
        date,
        volunteer_ids: None,
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

async fn link_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM event_volunteers")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Volunteers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_then_get_volunteer(pool: SqlitePool) {
    let created = VolunteerRepo::create(&pool, &new_volunteer("Ana", "ana@example.org"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, "Ana");
    assert_eq!(created.email, "ana@example.org");
    assert_eq!(created.phone.as_deref(), Some("+34 600 123 456"));

    let fetched = VolunteerRepo::get(&pool, created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_blank_phone_stored_as_null(pool: SqlitePool) {
    let mut input = new_volunteer("Ana", "ana@example.org");
    input.phone = Some("   ".to_string());
    let created = VolunteerRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.phone, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_invalid_volunteer_rejected(pool: SqlitePool) {
    let err = VolunteerRepo::create(&pool, &new_volunteer("  ", "ana@example.org"))
        .await
        .unwrap_err();
    assert_matches!(err, StoreError::Core(CoreError::Validation { field: "name", .. }));

    let err = VolunteerRepo::create(&pool, &new_volunteer("Ana", "not-an-email"))
        .await
        .unwrap_err();
    assert_matches!(err, StoreError::Core(CoreError::Validation { field: "email", .. }));

    let mut bad_phone = new_volunteer("Ana", "ana@example.org");
    bad_phone.phone = Some("call me".to_string());
    let err = VolunteerRepo::create(&pool, &bad_phone).await.unwrap_err();
    assert_matches!(err, StoreError::Core(CoreError::Validation { field: "phone", .. }));

    assert_eq!(VolunteerRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_keeps_registered_at(pool: SqlitePool) {
    let created = VolunteerRepo::create(&pool, &new_volunteer("Ana", "ana@example.org"))
        .await
        .unwrap();

    let updated = VolunteerRepo::update(
        &pool,
        created.id,
        &CreateVolunteer {
            name: "Ana María".to_string(),
            email: "ana.maria@example.org".to_string(),
            phone: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "Ana María");
    assert_eq!(updated.email, "ana.maria@example.org");
    assert_eq!(updated.phone, None);
    assert_eq!(updated.registered_at, created.registered_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_missing_volunteer_is_not_found(pool: SqlitePool) {
    assert!(VolunteerRepo::find_by_id(&pool, 42).await.unwrap().is_none());

    let err = VolunteerRepo::get(&pool, 42).await.unwrap_err();
    assert_matches!(
        err,
        StoreError::Core(CoreError::NotFound { entity: "Volunteer", id: 42 })
    );

    let err = VolunteerRepo::update(&pool, 42, &new_volunteer("Ana", "ana@example.org"))
        .await
        .unwrap_err();
    assert_matches!(err, StoreError::Core(CoreError::NotFound { .. }));

    let err = VolunteerRepo::delete(&pool, 42).await.unwrap_err();
    assert_matches!(err, StoreError::Core(CoreError::NotFound { .. }));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_volunteers_newest_first(pool: SqlitePool) {
    let first = VolunteerRepo::create(&pool, &new_volunteer("Ana", "ana@example.org"))
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = VolunteerRepo::create(&pool, &new_volunteer("Bea", "bea@example.org"))
        .await
        .unwrap();

    let ids: Vec<i64> = VolunteerRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|v| v.id)
        .collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_volunteers(pool: SqlitePool) {
    VolunteerRepo::create(&pool, &new_volunteer("Ana", "ana@example.org"))
        .await
        .unwrap();
    VolunteerRepo::create(&pool, &new_volunteer("Bea", "bea@example.net"))
        .await
        .unwrap();

    let hits = VolunteerRepo::search(&pool, "EXAMPLE.NET").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Bea");

    assert!(VolunteerRepo::search(&pool, "%").await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_then_get_event(pool: SqlitePool) {
    let created = EventRepo::create(&pool, &new_event("Clean-up", day(15)))
        .await
        .unwrap();
    assert_eq!(created.title, "Clean-up");
    assert_eq!(created.description, "Beach clean-up");
    assert_eq!(created.date, day(15));

    let fetched = EventRepo::get(&pool, created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_events_latest_date_first(pool: SqlitePool) {
    EventRepo::create(&pool, &new_event("Early", day(1))).await.unwrap();
    EventRepo::create(&pool, &new_event("Late", day(20))).await.unwrap();
    EventRepo::create(&pool, &new_event("Middle", day(10))).await.unwrap();

    let titles: Vec<String> = EventRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(titles, vec!["Late", "Middle", "Early"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_event_with_volunteers(pool: SqlitePool) {
    let ana = VolunteerRepo::create(&pool, &new_volunteer("Ana", "ana@example.org"))
        .await
        .unwrap();
    let bea = VolunteerRepo::create(&pool, &new_volunteer("Bea", "bea@example.org"))
        .await
        .unwrap();

    let mut input = new_event("Clean-up", day(15));
    input.volunteer_ids = Some(vec![bea.id, ana.id, bea.id]);
    let event = EventRepo::create(&pool, &input).await.unwrap();

    let names: Vec<String> = EventRepo::list_volunteers(&pool, event.id)
        .await
        .unwrap()
        .into_iter()
        .map(|v| v.name)
        .collect();
    assert_eq!(names, vec!["Ana", "Bea"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_event_with_unknown_volunteer_rolls_back(pool: SqlitePool) {
    let mut input = new_event("Clean-up", day(15));
    input.volunteer_ids = Some(vec![999]);
    let err = EventRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(
        err,
        StoreError::Core(CoreError::Validation { field: "volunteer_ids", .. })
    );
    assert_eq!(EventRepo::count(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Links
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_attach_volunteer_is_idempotent(pool: SqlitePool) {
    let volunteer = VolunteerRepo::create(&pool, &new_volunteer("Ana", "ana@example.org"))
        .await
        .unwrap();
    let event = EventRepo::create(&pool, &new_event("Clean-up", day(15)))
        .await
        .unwrap();

    assert!(EventRepo::attach_volunteer(&pool, event.id, volunteer.id).await.unwrap());
    assert!(!EventRepo::attach_volunteer(&pool, event.id, volunteer.id).await.unwrap());
    assert_eq!(link_count(&pool).await, 1);

    assert!(EventRepo::detach_volunteer(&pool, event.id, volunteer.id).await.unwrap());
    assert!(!EventRepo::detach_volunteer(&pool, event.id, volunteer.id).await.unwrap());
    assert_eq!(link_count(&pool).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_attach_requires_both_sides(pool: SqlitePool) {
    let event = EventRepo::create(&pool, &new_event("Clean-up", day(15)))
        .await
        .unwrap();
    let err = EventRepo::attach_volunteer(&pool, event.id, 77).await.unwrap_err();
    assert_matches!(
        err,
        StoreError::Core(CoreError::NotFound { entity: "Volunteer", id: 77 })
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_set_volunteers_replaces_links(pool: SqlitePool) {
    let ana = VolunteerRepo::create(&pool, &new_volunteer("Ana", "ana@example.org"))
        .await
        .unwrap();
    let bea = VolunteerRepo::create(&pool, &new_volunteer("Bea", "bea@example.org"))
        .await
        .unwrap();
    let event = EventRepo::create(&pool, &new_event("Clean-up", day(15)))
        .await
        .unwrap();

    EventRepo::set_volunteers(&pool, event.id, &[ana.id]).await.unwrap();
    EventRepo::set_volunteers(&pool, event.id, &[bea.id]).await.unwrap();

    let linked = EventRepo::list_volunteers(&pool, event.id).await.unwrap();
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].id, bea.id);

    let events = VolunteerRepo::list_events(&pool, bea.id).await.unwrap();
    assert_eq!(events.len(), 1);
    assert!(VolunteerRepo::list_events(&pool, ana.id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_volunteer_keeps_events(pool: SqlitePool) {
    let volunteer = VolunteerRepo::create(&pool, &new_volunteer("Ana", "ana@example.org"))
        .await
        .unwrap();
    let event = EventRepo::create(&pool, &new_event("Clean-up", day(15)))
        .await
        .unwrap();
    EventRepo::attach_volunteer(&pool, event.id, volunteer.id)
        .await
        .unwrap();

    VolunteerRepo::delete(&pool, volunteer.id).await.unwrap();

    assert_eq!(link_count(&pool).await, 0);
    assert!(EventRepo::find_by_id(&pool, event.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_event_keeps_volunteers(pool: SqlitePool) {
    let volunteer = VolunteerRepo::create(&pool, &new_volunteer("Ana", "ana@example.org"))
        .await
        .unwrap();
    let event = EventRepo::create(&pool, &new_event("Clean-up", day(15)))
        .await
        .unwrap();
    EventRepo::attach_volunteer(&pool, event.id, volunteer.id)
        .await
        .unwrap();

    EventRepo::delete(&pool, event.id).await.unwrap();

    assert_eq!(link_count(&pool).await, 0);
    assert!(VolunteerRepo::find_by_id(&pool, volunteer.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_totals(pool: SqlitePool) {
    VolunteerRepo::create(&pool, &new_volunteer("Ana", "ana@example.org"))
        .await
        .unwrap();
    EventRepo::create(&pool, &new_event("One", day(1))).await.unwrap();
    EventRepo::create(&pool, &new_event("Two", day(2))).await.unwrap();

    let totals = EventRepo::totals(&pool).await.unwrap();
    assert_eq!(totals.volunteers, 1);
    assert_eq!(totals.events, 2);
}
