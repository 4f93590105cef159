mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{build_test_app, delete, expect_json, get, post_json, put_json};

fn sample_alumni(email: &str) -> serde_json::Value {
    json!({
        "name": "Ada Lovelace",
        "email": email,
        "industry": "Computing",
        "graduation_year": 2015,
        "location": "London",
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_fetch_alumni(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(&app, "/api/v1/alumni", sample_alumni("ada@example.com")).await;
    let body = expect_json(response, StatusCode::OK).await;
    let id = body["data"]["id"].as_i64().expect("id in response");
    assert_eq!(body["data"]["email"], "ada@example.com");

    let response = get(&app, &format!("/api/v1/alumni/{id}")).await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["name"], "Ada Lovelace");
    assert_eq!(body["data"]["graduation_year"], 2015);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_required_field_is_400(pool: PgPool) {
    let app = build_test_app(pool);

    let mut payload = sample_alumni("blank@example.com");
    payload["name"] = json!("   ");
    let response = post_json(&app, "/api/v1/alumni", payload).await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["error"].as_str().unwrap().contains("name"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_is_409(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(&app, "/api/v1/alumni", sample_alumni("dup@example.com")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(&app, "/api/v1/alumni", sample_alumni("dup@example.com")).await;
    let body = expect_json(response, StatusCode::CONFLICT).await;
    assert_eq!(body["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn fetch_unknown_alumni_is_404(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(&app, "/api/v1/alumni/424242").await;
    let body = expect_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_by_field_and_invalid_field(pool: PgPool) {
    let app = build_test_app(pool);

    let response =
        post_json(&app, "/api/v1/alumni", sample_alumni("search@example.com")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, "/api/v1/alumni/search?field=industry&value=Computing").await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // Unknown column names are rejected before touching the database.
    let response = get(&app, "/api/v1/alumni/search?field=password&value=x").await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["code"], "BAD_REQUEST");

    // A valid field with no matching rows is a not-found, not an empty list.
    let response = get(&app, "/api/v1/alumni/search?field=location&value=Nowhere").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_supports_equality_filters(pool: PgPool) {
    let app = build_test_app(pool);

    let mut first = sample_alumni("one@example.com");
    first["location"] = json!("Berlin");
    let response = post_json(&app, "/api/v1/alumni", first).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(&app, "/api/v1/alumni", sample_alumni("two@example.com")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, "/api/v1/alumni?location=berlin").await;
    let body = expect_json(response, StatusCode::OK).await;
    let hits = body["data"].as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["email"], "one@example.com");

    // No filters returns everything; no matches returns an empty list.
    let response = get(&app, "/api/v1/alumni").await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let response = get(&app, "/api/v1/alumni?location=Nowhere").await;
    let body = expect_json(response, StatusCode::OK).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_and_delete_alumni(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(&app, "/api/v1/alumni", sample_alumni("upd@example.com")).await;
    let body = expect_json(response, StatusCode::OK).await;
    let id = body["data"]["id"].as_i64().unwrap();

    let response = put_json(
        &app,
        &format!("/api/v1/alumni/{id}"),
        json!({"location": "Berlin"}),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["location"], "Berlin");
    // Untouched fields survive a partial update.
    assert_eq!(body["data"]["industry"], "Computing");

    let response = delete(&app, &format!("/api/v1/alumni/{id}")).await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["id"], id);

    let response = get(&app, &format!("/api/v1/alumni/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn join_event_flow(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(&app, "/api/v1/alumni", sample_alumni("joiner@example.com")).await;
    let body = expect_json(response, StatusCode::OK).await;
    let alumni_id = body["data"]["id"].as_i64().unwrap();

    let response = post_json(
        &app,
        "/api/v1/events",
        json!({
            "name": "Homecoming Gala",
            "event_date": "2026-10-03",
            "location": "Main Hall",
            "description": "Annual reunion dinner",
        }),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    let event_id = body["data"]["id"].as_i64().unwrap();

    let response = post_json(
        &app,
        &format!("/api/v1/alumni/{alumni_id}/events"),
        json!({"event_id": event_id}),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["user_type"], "alumni");

    let response = get(&app, &format!("/api/v1/alumni/{alumni_id}/events")).await;
    let body = expect_json(response, StatusCode::OK).await;
    let events = body["data"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["name"], "Homecoming Gala");

    let response = get(&app, &format!("/api/v1/events/{event_id}/participants")).await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // Joining a nonexistent event surfaces the downstream lookup failure.
    let response = post_json(
        &app,
        &format!("/api/v1/alumni/{alumni_id}/events"),
        json!({"event_id": 999_999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn event_search_filters_are_case_insensitive(pool: PgPool) {
    let app = build_test_app(pool);

    for (name, location) in [("Tech Meetup", "Lab"), ("Career Fair", "Gym")] {
        let response = post_json(
            &app,
            "/api/v1/events",
            json!({
                "name": name,
                "event_date": "2026-09-12",
                "location": location,
                "description": "n/a",
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get(&app, "/api/v1/alumni/events-search?name=tech%20meetup").await;
    let body = expect_json(response, StatusCode::OK).await;
    let events = body["data"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["location"], "Lab");
}
