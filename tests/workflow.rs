//! End-to-end workflow tests against the full router with an in-memory
//! database.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

use crewboard::{
    config::{AdminConfig, Config, DatabaseConfig, JwtConfig, ServerConfig},
    db::run_migrations,
    services::SessionService,
    AppState,
};

const ADMIN_EMAIL: &str = "admin@crewboard.test";
const ADMIN_PASSWORD: &str = "AdminPass123";

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "warn".to_string(),
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: "workflow-test-secret".to_string(),
            expiry_hours: 1,
        },
        admin: AdminConfig {
            email: Some(ADMIN_EMAIL.to_string()),
            password: Some(ADMIN_PASSWORD.to_string()),
        },
    }
}

/// Build the app against a fresh in-memory database with the admin seeded.
///
/// One connection only, so every handler shares the same in-memory store.
async fn spawn_app() -> (Router, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    run_migrations(&pool).await.unwrap();

    let config = test_config();
    SessionService::seed_administrator(&pool, &config.admin)
        .await
        .unwrap();

    let state = AppState::new(pool.clone(), config);
    (crewboard::app(state), pool)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_req(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn registration_body(email: &str, name: &str) -> Value {
    json!({
        "name": name,
        "email": email,
        "password": "Password123",
        "phone": "9876543210",
        "representative_type": "college",
        "college": "IIT Bombay",
        "district": "Mumbai",
        "state": "Maharashtra",
        "year_of_study": "2",
    })
}

async fn register(app: &Router, email: &str, name: &str) {
    let (status, body) = send(app, post_json("/api/submit-form", None, &registration_body(email, name))).await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
}

async fn sign_in(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        post_json("/api/sign-in", None, &json!({"email": email, "password": password})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "sign-in failed: {body}");
    assert_eq!(body["role"], "representative");
    body["token"].as_str().unwrap().to_string()
}

async fn admin_sign_in(app: &Router) -> String {
    let (status, body) = send(
        app,
        post_json(
            "/api/admin-sign-in",
            None,
            &json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "admin sign-in failed: {body}");
    assert_eq!(body["role"], "administrator");
    body["token"].as_str().unwrap().to_string()
}

async fn create_task(app: &Router, admin_token: &str, title: &str, points: i64) -> String {
    let (status, body) = send(
        app,
        post_json(
            "/api/admin/upload-task",
            Some(admin_token),
            &json!({
                "title": title,
                "description": "Do the thing and link proof",
                "points": points,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "upload-task failed: {body}");

    let (status, body) = send(app, get_req("/api/tasks", None)).await;
    assert_eq!(status, StatusCode::OK);
    body["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["title"] == title)
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string()
}

async fn submit(app: &Router, token: &str, email: &str, task_id: &str, link: &str) -> (StatusCode, Value) {
    send(
        app,
        post_json(
            "/api/submit-task",
            Some(token),
            &json!({"email": email, "taskId": task_id, "link": link}),
        ),
    )
    .await
}

#[tokio::test]
async fn health_answers() {
    let (app, _pool) = spawn_app().await;
    let (status, body) = send(&app, get_req("/api/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn full_workflow_register_submit_score_rank() {
    let (app, _pool) = spawn_app().await;

    register(&app, "rep@x.com", "Rhea").await;
    let rep_token = sign_in(&app, "rep@x.com", "Password123").await;
    let admin_token = admin_sign_in(&app).await;

    let task_id = create_task(&app, &admin_token, "Poster drive", 50).await;

    let (status, _) = submit(&app, &rep_token, "rep@x.com", &task_id, "https://drive.example/proof").await;
    assert_eq!(status, StatusCode::CREATED);

    // Review queue shows the pending submission
    let (status, body) = send(&app, get_req("/api/admin/submissions", Some(&admin_token))).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["submissions"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["email"], "rep@x.com");
    assert_eq!(rows[0]["taskTitle"], "Poster drive");
    assert_eq!(rows[0]["status"], "pending");
    assert!(rows[0]["pointsAwarded"].is_null());

    // Award and verify the ledger and leaderboard both reflect it
    let (status, _) = send(
        &app,
        post_json(
            "/api/admin/update-points",
            Some(&admin_token),
            &json!({"email": "rep@x.com", "taskId": task_id, "pointsAwarded": 45}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, get_req("/api/submissions", Some(&rep_token))).await;
    assert_eq!(status, StatusCode::OK);
    let own = body["submissions"].as_array().unwrap();
    assert_eq!(own[0]["status"], "scored");
    assert_eq!(own[0]["pointsAwarded"], 45);

    let (status, body) = send(&app, get_req("/api/leaderboard", None)).await;
    assert_eq!(status, StatusCode::OK);
    let entries = body["leaderboard"].as_array().unwrap();
    assert_eq!(entries[0]["name"], "Rhea");
    assert_eq!(entries[0]["college"], "IIT Bombay");
    assert_eq!(entries[0]["points"], 45);
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let (app, _pool) = spawn_app().await;

    register(&app, "dup@x.com", "First").await;
    let (status, body) = send(
        &app,
        post_json("/api/submit-form", None, &registration_body("dup@x.com", "Second")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "DUPLICATE_IDENTITY");
}

#[tokio::test]
async fn admin_email_cannot_use_representative_sign_in() {
    let (app, _pool) = spawn_app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/sign-in",
            None,
            &json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn invalid_link_rejected_before_recording() {
    let (app, _pool) = spawn_app().await;

    register(&app, "rep@x.com", "Rhea").await;
    let rep_token = sign_in(&app, "rep@x.com", "Password123").await;
    let admin_token = admin_sign_in(&app).await;
    let task_id = create_task(&app, &admin_token, "Outreach", 30).await;

    let (status, body) = submit(&app, &rep_token, "rep@x.com", &task_id, "not a url").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_LINK");

    // Nothing was recorded, so a valid retry succeeds
    let (status, body) = send(&app, get_req("/api/submissions", Some(&rep_token))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["submissions"].as_array().unwrap().is_empty());

    let (status, _) = submit(&app, &rep_token, "rep@x.com", &task_id, "https://x.example/p").await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn duplicate_submission_rejected() {
    let (app, _pool) = spawn_app().await;

    register(&app, "rep@x.com", "Rhea").await;
    let rep_token = sign_in(&app, "rep@x.com", "Password123").await;
    let admin_token = admin_sign_in(&app).await;
    let task_id = create_task(&app, &admin_token, "Outreach", 30).await;

    let (status, _) = submit(&app, &rep_token, "rep@x.com", &task_id, "https://x.example/1").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = submit(&app, &rep_token, "rep@x.com", &task_id, "https://x.example/2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "DUPLICATE_SUBMISSION");

    // Exactly one row in the ledger, and the original link stands
    let (_, body) = send(&app, get_req("/api/submissions", Some(&rep_token))).await;
    let submissions = body["submissions"].as_array().unwrap();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0]["link"], "https://x.example/1");
}

#[tokio::test]
async fn concurrent_duplicate_submissions_record_exactly_one() {
    let (app, _pool) = spawn_app().await;

    register(&app, "rep@x.com", "Rhea").await;
    let rep_token = sign_in(&app, "rep@x.com", "Password123").await;
    let admin_token = admin_sign_in(&app).await;
    let task_id = create_task(&app, &admin_token, "Outreach", 30).await;

    let a = submit(&app, &rep_token, "rep@x.com", &task_id, "https://x.example/a");
    let b = submit(&app, &rep_token, "rep@x.com", &task_id, "https://x.example/b");
    let ((status_a, _), (status_b, _)) = tokio::join!(a, b);

    let statuses = [status_a, status_b];
    assert!(statuses.contains(&StatusCode::CREATED));
    assert!(statuses.contains(&StatusCode::BAD_REQUEST));

    let (_, body) = send(&app, get_req("/api/submissions", Some(&rep_token))).await;
    assert_eq!(body["submissions"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn second_award_conflicts_and_points_stand() {
    let (app, _pool) = spawn_app().await;

    register(&app, "rep@x.com", "Rhea").await;
    let rep_token = sign_in(&app, "rep@x.com", "Password123").await;
    let admin_token = admin_sign_in(&app).await;
    let task_id = create_task(&app, &admin_token, "Outreach", 30).await;
    submit(&app, &rep_token, "rep@x.com", &task_id, "https://x.example/p").await;

    let award = |points: i64| {
        post_json(
            "/api/admin/update-points",
            Some(&admin_token),
            &json!({"email": "rep@x.com", "taskId": task_id, "pointsAwarded": points}),
        )
    };

    let (status, _) = send(&app, award(30)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, award(10)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "ALREADY_SCORED");

    // First award stands
    let (_, body) = send(&app, get_req("/api/submissions", Some(&rep_token))).await;
    assert_eq!(body["submissions"][0]["pointsAwarded"], 30);
}

#[tokio::test]
async fn award_for_missing_submission_is_not_found() {
    let (app, _pool) = spawn_app().await;

    register(&app, "rep@x.com", "Rhea").await;
    let admin_token = admin_sign_in(&app).await;
    let task_id = create_task(&app, &admin_token, "Outreach", 30).await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/admin/update-points",
            Some(&admin_token),
            &json!({"email": "rep@x.com", "taskId": task_id, "pointsAwarded": 10}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn expired_deadline_blocks_submission() {
    let (app, _pool) = spawn_app().await;

    register(&app, "rep@x.com", "Rhea").await;
    let rep_token = sign_in(&app, "rep@x.com", "Password123").await;
    let admin_token = admin_sign_in(&app).await;

    let (status, _) = send(
        &app,
        post_json(
            "/api/admin/upload-task",
            Some(&admin_token),
            &json!({
                "title": "Closed task",
                "description": "Too late",
                "points": 20,
                "deadline": "2020-01-01T00:00:00Z",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, get_req("/api/tasks", None)).await;
    let task_id = body["tasks"][0]["id"].as_str().unwrap().to_string();

    let (status, body) = submit(&app, &rep_token, "rep@x.com", &task_id, "https://x.example/p").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn task_accepts_string_points_and_local_deadline() {
    let (app, _pool) = spawn_app().await;
    let admin_token = admin_sign_in(&app).await;

    let (status, _) = send(
        &app,
        post_json(
            "/api/admin/upload-task",
            Some(&admin_token),
            &json!({
                "title": "Form task",
                "description": "Posted from the form",
                "points": "75",
                "deadline": "2030-06-15T18:30",
                "submissionType": "team",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, get_req("/api/tasks", None)).await;
    let task = &body["tasks"][0];
    assert_eq!(task["points"], 75);
    assert_eq!(task["submissionMode"], "team");
    assert!(task["deadline"].as_str().unwrap().starts_with("2030-06-15T18:30"));
}

#[tokio::test]
async fn nonpositive_task_points_rejected() {
    let (app, _pool) = spawn_app().await;
    let admin_token = admin_sign_in(&app).await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/admin/upload-task",
            Some(&admin_token),
            &json!({"title": "Freebie", "description": "No points", "points": 0}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn admin_routes_reject_missing_and_representative_sessions() {
    let (app, _pool) = spawn_app().await;

    register(&app, "rep@x.com", "Rhea").await;
    let rep_token = sign_in(&app, "rep@x.com", "Password123").await;

    let (status, body) = send(&app, get_req("/api/admin/submissions", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");

    let (status, body) = send(&app, get_req("/api/admin/submissions", Some(&rep_token))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");
}

#[tokio::test]
async fn tampered_token_rejected() {
    let (app, _pool) = spawn_app().await;

    register(&app, "rep@x.com", "Rhea").await;
    let mut token = sign_in(&app, "rep@x.com", "Password123").await;
    token.push('x');

    let (status, body) = send(&app, get_req("/api/submissions", Some(&token))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn profile_is_owner_or_admin_only() {
    let (app, _pool) = spawn_app().await;

    register(&app, "one@x.com", "One").await;
    register(&app, "two@x.com", "Two").await;
    let one_token = sign_in(&app, "one@x.com", "Password123").await;
    let admin_token = admin_sign_in(&app).await;

    let (status, body) = send(&app, get_req("/api/profile?email=one@x.com", Some(&one_token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["name"], "One");
    assert_eq!(body["profile"]["college"], "IIT Bombay");
    assert!(body["profile"].get("password_hash").is_none());

    let (status, body) = send(&app, get_req("/api/profile?email=two@x.com", Some(&one_token))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");

    let (status, _) = send(&app, get_req("/api/profile?email=two@x.com", Some(&admin_token))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn profile_update_round_trips() {
    let (app, _pool) = spawn_app().await;

    register(&app, "rep@x.com", "Rhea").await;
    let rep_token = sign_in(&app, "rep@x.com", "Password123").await;

    let (status, body) = send(
        &app,
        Request::builder()
            .method("PUT")
            .uri("/api/profile")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {rep_token}"))
            .body(Body::from(
                json!({
                    "name": "Rhea S",
                    "phone": "9123456780",
                    "representative_type": "college",
                    "college": "IIT Delhi",
                    "district": "Delhi",
                    "state": "DL",
                    "year_of_study": "3",
                })
                .to_string(),
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "update failed: {body}");
    assert_eq!(body["profile"]["college"], "IIT Delhi");

    let (_, body) = send(&app, get_req("/api/profile?email=rep@x.com", Some(&rep_token))).await;
    assert_eq!(body["profile"]["name"], "Rhea S");
}

#[tokio::test]
async fn leaderboard_includes_zero_scored_and_orders_by_points() {
    let (app, _pool) = spawn_app().await;

    register(&app, "high@x.com", "High").await;
    register(&app, "low@x.com", "Low").await;
    register(&app, "idle@x.com", "Idle").await;
    let high_token = sign_in(&app, "high@x.com", "Password123").await;
    let low_token = sign_in(&app, "low@x.com", "Password123").await;
    let admin_token = admin_sign_in(&app).await;

    let t1 = create_task(&app, &admin_token, "Task one", 50).await;
    let t2 = create_task(&app, &admin_token, "Task two", 20).await;

    submit(&app, &high_token, "high@x.com", &t1, "https://x.example/h1").await;
    submit(&app, &high_token, "high@x.com", &t2, "https://x.example/h2").await;
    submit(&app, &low_token, "low@x.com", &t1, "https://x.example/l1").await;

    for (email, task, points) in [
        ("high@x.com", &t1, 50),
        ("high@x.com", &t2, 20),
        ("low@x.com", &t1, 25),
    ] {
        let (status, _) = send(
            &app,
            post_json(
                "/api/admin/update-points",
                Some(&admin_token),
                &json!({"email": email, "taskId": task, "pointsAwarded": points}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, get_req("/api/leaderboard", None)).await;
    assert_eq!(status, StatusCode::OK);
    let entries = body["leaderboard"].as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["name"], "High");
    assert_eq!(entries[0]["points"], 70);
    assert_eq!(entries[1]["name"], "Low");
    assert_eq!(entries[1]["points"], 25);
    assert_eq!(entries[2]["name"], "Idle");
    assert_eq!(entries[2]["points"], 0);
}

#[tokio::test]
async fn leaderboard_shows_school_affiliation_for_school_representatives() {
    let (app, _pool) = spawn_app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/submit-form",
            None,
            &json!({
                "name": "Sana",
                "email": "sana@x.com",
                "password": "Password123",
                "phone": "9876543210",
                "representative_type": "school",
                "college": "",
                "school": "DPS Pune",
                "district": "Pune",
                "state": "Maharashtra",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");

    let (_, body) = send(&app, get_req("/api/leaderboard", None)).await;
    assert_eq!(body["leaderboard"][0]["college"], "DPS Pune");
}

#[tokio::test]
async fn pending_awards_do_not_count_toward_leaderboard() {
    let (app, _pool) = spawn_app().await;

    register(&app, "rep@x.com", "Rhea").await;
    let rep_token = sign_in(&app, "rep@x.com", "Password123").await;
    let admin_token = admin_sign_in(&app).await;
    let task_id = create_task(&app, &admin_token, "Outreach", 30).await;
    submit(&app, &rep_token, "rep@x.com", &task_id, "https://x.example/p").await;

    let (_, body) = send(&app, get_req("/api/leaderboard", None)).await;
    assert_eq!(body["leaderboard"][0]["points"], 0);
}

#[tokio::test]
async fn representative_cannot_submit_as_someone_else() {
    let (app, _pool) = spawn_app().await;

    register(&app, "one@x.com", "One").await;
    register(&app, "two@x.com", "Two").await;
    let one_token = sign_in(&app, "one@x.com", "Password123").await;
    let admin_token = admin_sign_in(&app).await;
    let task_id = create_task(&app, &admin_token, "Outreach", 30).await;

    let (status, body) = submit(&app, &one_token, "two@x.com", &task_id, "https://x.example/p").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");
}
