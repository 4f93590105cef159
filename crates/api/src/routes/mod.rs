pub mod alumni;
pub mod assignments;
pub mod events;
pub mod health;
pub mod mentors;
pub mod students;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /alumni                          list, create
/// /alumni/search                   single-field exact-match search
/// /alumni/{id}                     get, update, delete
/// /alumni/{id}/events              my events, join event
///
/// /students                        list, create
/// /students/search                 single-field exact-match search
/// /students/{id}                   get, update, delete
/// /students/{id}/events            my events, join event
/// /students/{id}/mentors           my mentorship assignments
/// /students/{id}/mentorships       join a mentorship
///
/// /events                          list (filtered), create
/// /events/{id}                     get, update, delete
/// /events/{id}/participants        registered users
///
/// /mentors                         list, create
/// /mentors/{id}                    get, update, delete
/// /mentors/{id}/students           assignments held by the mentor
///
/// /assignments                     list
/// /assignments/{id}                get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/alumni", alumni::router())
        .nest("/students", students::router())
        .nest("/events", events::router())
        .nest("/mentors", mentors::router())
        .nest("/assignments", assignments::router())
}
