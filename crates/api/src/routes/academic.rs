//! Routes for professors, courses, students, enrollments and profiles.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{course, enrollment, professor, profile, student};
use crate::state::AppState;

/// ```text
/// GET    /professors                     -> list (?q= searches)
/// POST   /professors                     -> create
/// GET    /professors/{id}                -> get_by_id
/// PUT    /professors/{id}                -> update
/// DELETE /professors/{id}                -> delete (cascades to courses)
/// GET    /professors/{id}/courses        -> list_courses
///
/// GET    /courses                        -> list (?q= searches)
/// POST   /courses                        -> create
/// GET    /courses/{id}                   -> get_by_id
/// PUT    /courses/{id}                   -> update
/// DELETE /courses/{id}                   -> delete (cascades to enrollments)
/// GET    /courses/{id}/students          -> list_students
/// GET    /courses/{id}/enrollments       -> list_enrollments
///
/// GET    /students                       -> list (?q= searches)
/// POST   /students                       -> create
/// GET    /students/{id}                  -> get_by_id
/// PUT    /students/{id}                  -> update
/// DELETE /students/{id}                  -> delete (cascades to profile, enrollments)
/// GET    /students/{id}/courses          -> list_courses
/// GET    /students/{id}/enrollments      -> list_enrollments
/// GET    /students/{id}/profile          -> profile::get_for_student
/// PUT    /students/{id}/profile          -> profile::update_for_student
/// DELETE /students/{id}/profile          -> profile::delete_for_student
///
/// GET    /enrollments                    -> list (?status=&course_id=&student_id=)
/// POST   /enrollments                    -> create
/// GET    /enrollments/{id}               -> get_by_id
/// PUT    /enrollments/{id}               -> update
/// DELETE /enrollments/{id}               -> delete
/// PUT    /enrollments/{id}/outcome       -> set_outcome
///
/// GET    /profiles                       -> list
/// POST   /profiles                       -> create
/// ```
pub fn router() -> Router<AppState> {
    let professors = Router::new()
        .route("/", get(professor::list).post(professor::create))
        .route(
            "/{id}",
            get(professor::get_by_id)
                .put(professor::update)
                .delete(professor::delete),
        )
        .route("/{id}/courses", get(professor::list_courses));

    let courses = Router::new()
        .route("/", get(course::list).post(course::create))
        .route(
            "/{id}",
            get(course::get_by_id)
                .put(course::update)
                .delete(course::delete),
        )
        .route("/{id}/students", get(course::list_students))
        .route("/{id}/enrollments", get(course::list_enrollments));

    let students = Router::new()
        .route("/", get(student::list).post(student::create))
        .route(
            "/{id}",
            get(student::get_by_id)
                .put(student::update)
                .delete(student::delete),
        )
        .route("/{id}/courses", get(student::list_courses))
        .route("/{id}/enrollments", get(student::list_enrollments))
        .route(
            "/{id}/profile",
            get(profile::get_for_student)
                .put(profile::update_for_student)
                .delete(profile::delete_for_student),
        );

    let enrollments = Router::new()
        .route("/", get(enrollment::list).post(enrollment::create))
        .route(
            "/{id}",
            get(enrollment::get_by_id)
                .put(enrollment::update)
                .delete(enrollment::delete),
        )
        .route("/{id}/outcome", put(enrollment::set_outcome));

    let profiles = Router::new().route("/", get(profile::list).post(profile::create));

    Router::new()
        .nest("/professors", professors)
        .nest("/courses", courses)
        .nest("/students", students)
        .nest("/enrollments", enrollments)
        .nest("/profiles", profiles)
}
