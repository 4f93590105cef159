mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{build_test_app, delete, expect_json, get, post_json, put_json};

async fn create_alumni(app: &axum::Router, email: &str) -> i64 {
    let response = post_json(
        app,
        "/api/v1/alumni",
        json!({
            "name": "Grace Hopper",
            "email": email,
            "industry": "Defense",
            "graduation_year": 1998,
            "location": "Arlington",
        }),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    body["data"]["id"].as_i64().unwrap()
}

async fn create_student(app: &axum::Router, email: &str) -> i64 {
    let response = post_json(
        app,
        "/api/v1/students",
        json!({
            "name": "Sam Park",
            "email": email,
            "course": "Mathematics",
            "year": 2,
        }),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    body["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mentor_registration_requires_existing_alumni(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/mentors",
        json!({"alumni_id": 777, "skills": "Rust"}),
    )
    .await;
    let body = expect_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["error"].as_str().unwrap().contains("Alumni"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn full_mentorship_flow(pool: PgPool) {
    let app = build_test_app(pool);

    let alumni_id = create_alumni(&app, "mentor@example.com").await;
    let student_id = create_student(&app, "mentee@example.com").await;

    let response = post_json(
        &app,
        "/api/v1/mentors",
        json!({"alumni_id": alumni_id, "skills": "Systems programming"}),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    let mentor_id = body["data"]["id"].as_i64().unwrap();

    let response = post_json(
        &app,
        &format!("/api/v1/students/{student_id}/mentorships"),
        json!({"mentor_id": mentor_id, "start_date": "2026-09-01"}),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    let assignment_id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["mentor_id"], mentor_id);
    assert_eq!(body["data"]["student_id"], student_id);

    // Visible from both sides of the pairing.
    let response = get(&app, &format!("/api/v1/students/{student_id}/mentors")).await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let response = get(&app, &format!("/api/v1/mentors/{mentor_id}/students")).await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // Close the assignment by setting an end date.
    let response = put_json(
        &app,
        &format!("/api/v1/assignments/{assignment_id}"),
        json!({"end_date": "2027-06-30"}),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["end_date"], "2027-06-30");
    assert_eq!(body["data"]["start_date"], "2026-09-01");

    let response = delete(&app, &format!("/api/v1/assignments/{assignment_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, &format!("/api/v1/assignments/{assignment_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn join_mentorship_with_unknown_mentor_is_404(pool: PgPool) {
    let app = build_test_app(pool);

    let student_id = create_student(&app, "lonely@example.com").await;

    let response = post_json(
        &app,
        &format!("/api/v1/students/{student_id}/mentorships"),
        json!({"mentor_id": 999}),
    )
    .await;
    let body = expect_json(response, StatusCode::NOT_FOUND).await;
    assert!(body["error"].as_str().unwrap().contains("Mentor"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn student_year_out_of_range_is_400(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/students",
        json!({
            "name": "Out Of Range",
            "email": "oor@example.com",
            "year": 9,
        }),
    )
    .await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_alumni_cascades_to_mentor(pool: PgPool) {
    let app = build_test_app(pool);

    let alumni_id = create_alumni(&app, "cascade@example.com").await;
    let response = post_json(
        &app,
        "/api/v1/mentors",
        json!({"alumni_id": alumni_id, "skills": null}),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;
    let mentor_id = body["data"]["id"].as_i64().unwrap();

    let response = delete(&app, &format!("/api/v1/alumni/{alumni_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, &format!("/api/v1/mentors/{mentor_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
