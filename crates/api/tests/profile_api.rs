//! HTTP-level integration tests for profile upsert, display, the map
//! view, and the leaderboard.

mod common;

use axum::http::StatusCode;
use axum::routing::get as axum_get;
use axum::{Json, Router};
use common::{build_test_app, build_test_app_with, expect_status, get, post_json};
use ecosort_api::config::AdapterConfig;
use ecosort_core::profile::DEFAULT_PROFILE_IMAGE;
use ecosort_core::types::DbId;
use sqlx::PgPool;

/// Insert an account row directly and return its id.
async fn create_account(pool: &PgPool, email: &str) -> DbId {
    let (id,): (DbId,) = sqlx::query_as(
        "INSERT INTO users (email, password_hash, role)
         VALUES ($1, 'x', 'user') RETURNING id",
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .expect("account insert should succeed");
    id
}

// ---------------------------------------------------------------------------
// Upsert
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_is_idempotent_and_keeps_one_row(pool: PgPool) {
    let user_id = create_account(&pool, "ada@example.com").await;

    let first = serde_json::json!({
        "user_id": user_id,
        "name": "Ada",
        "bio": "first bio",
        "age": 30,
    });
    let second = serde_json::json!({
        "user_id": user_id,
        "name": "Ada L.",
        "bio": "second bio",
        "age": 31,
    });

    let response = post_json(build_test_app(pool.clone()), "/getprofile", first).await;
    expect_status(response, StatusCode::OK).await;

    let response = post_json(build_test_app(pool.clone()), "/getprofile", second).await;
    let json = expect_status(response, StatusCode::OK).await;

    // Second call's values won.
    assert_eq!(json["profile"]["name"], "Ada L.");
    assert_eq!(json["profile"]["bio"], "second bio");
    assert_eq!(json["profile"]["age"], 31);

    // Still exactly one row for the account.
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_profile WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_preserves_gameplay_counters(pool: PgPool) {
    let user_id = create_account(&pool, "ada@example.com").await;

    let body = serde_json::json!({ "user_id": user_id, "name": "Ada" });
    let response = post_json(build_test_app(pool.clone()), "/getprofile", body.clone()).await;
    expect_status(response, StatusCode::OK).await;

    // Simulate earned progress.
    sqlx::query("UPDATE user_profile SET points = 120, visit = 4 WHERE user_id = $1")
        .bind(user_id)
        .execute(&pool)
        .await
        .unwrap();

    let response = post_json(build_test_app(pool.clone()), "/getprofile", body).await;
    let json = expect_status(response, StatusCode::OK).await;

    assert_eq!(json["profile"]["points"], 120);
    assert_eq!(json["profile"]["visit"], 4);
}

// ---------------------------------------------------------------------------
// Geocoding
// ---------------------------------------------------------------------------

/// Serve a canned geocoding response on an ephemeral port.
async fn spawn_geocode_stub() -> AdapterConfig {
    let router = Router::new().route(
        "/search",
        axum_get(|| async {
            Json(serde_json::json!([{ "lat": "48.8566", "lon": "2.3522" }]))
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    AdapterConfig {
        geocoder_url: format!("http://{addr}"),
        bin_detector_url: format!("http://{addr}/detect"),
        classifier_url: format!("http://{addr}/classify"),
        http_timeout_secs: 5,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_geocodes_supplied_location(pool: PgPool) {
    let user_id = create_account(&pool, "ada@example.com").await;
    let adapters = spawn_geocode_stub().await;

    let body = serde_json::json!({ "user_id": user_id, "name": "Ada", "location": "Paris" });
    let response = post_json(build_test_app_with(pool.clone(), adapters), "/getprofile", body).await;
    expect_status(response, StatusCode::OK).await;

    let (stored,): (Option<String>,) =
        sqlx::query_as("SELECT coordinates FROM user_profile WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored.as_deref(), Some("48.8566, 2.3522"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_survives_geocoder_outage(pool: PgPool) {
    let user_id = create_account(&pool, "ada@example.com").await;

    // Default test adapters refuse connections; the upsert must still land,
    // just without coordinates.
    let body = serde_json::json!({ "user_id": user_id, "name": "Ada", "location": "Paris" });
    let response = post_json(build_test_app(pool.clone()), "/getprofile", body).await;
    expect_status(response, StatusCode::OK).await;

    let (stored,): (Option<String>,) =
        sqlx::query_as("SELECT coordinates FROM user_profile WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, None);
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn display_profile_hides_coordinates(pool: PgPool) {
    let user_id = create_account(&pool, "ada@example.com").await;
    sqlx::query(
        "INSERT INTO user_profile (user_id, name, coordinates)
         VALUES ($1, 'Ada', '52.5, 13.4')",
    )
    .bind(user_id)
    .execute(&pool)
    .await
    .unwrap();

    let uri = format!("/displayprofile?user_id={user_id}");
    let response = get(build_test_app(pool), &uri).await;
    let json = expect_status(response, StatusCode::OK).await;

    assert_eq!(json["profile"]["name"], "Ada");
    assert!(
        json["profile"].get("coordinates").is_none(),
        "coordinates must not be serialized"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn display_profile_unknown_user_is_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/displayprofile?user_id=4242").await;
    let json = expect_status(response, StatusCode::NOT_FOUND).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Map view
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn map_view_serves_only_parseable_coordinates(pool: PgPool) {
    let with_coords = create_account(&pool, "a@example.com").await;
    let without_coords = create_account(&pool, "b@example.com").await;

    sqlx::query(
        "INSERT INTO user_profile (user_id, name, bio, coordinates)
         VALUES ($1, 'A', 'has coords', '52.5, 13.4'), ($2, 'B', 'no coords', NULL)",
    )
    .bind(with_coords)
    .bind(without_coords)
    .execute(&pool)
    .await
    .unwrap();

    let response = get(build_test_app(pool), "/getalluserprofile").await;
    let json = expect_status(response, StatusCode::OK).await;

    let locations = json["locations"].as_array().unwrap();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0]["user_id"], with_coords);
    assert_eq!(locations[0]["lat"], 52.5);
    assert_eq!(locations[0]["lng"], 13.4);
}

// ---------------------------------------------------------------------------
// Leaderboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn leaderboard_is_capped_and_sorted(pool: PgPool) {
    // 25 profiles with distinct points; only the top 20 may appear.
    for i in 0..25 {
        let user_id = create_account(&pool, &format!("user{i}@example.com")).await;
        sqlx::query(
            "INSERT INTO user_profile (user_id, name, points)
             VALUES ($1, $2, $3)",
        )
        .bind(user_id)
        .bind(format!("User {i}"))
        .bind(i as i64 * 10)
        .execute(&pool)
        .await
        .unwrap();
    }

    let response = get(build_test_app(pool), "/leaderboard").await;
    let json = expect_status(response, StatusCode::OK).await;

    let entries = json["leaderboard"].as_array().unwrap();
    assert_eq!(entries.len(), 20);

    let points: Vec<i64> = entries
        .iter()
        .map(|e| e["points"].as_i64().unwrap())
        .collect();
    assert!(
        points.windows(2).all(|w| w[0] >= w[1]),
        "points must be non-increasing"
    );
    assert_eq!(points[0], 240);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn leaderboard_substitutes_placeholder_image(pool: PgPool) {
    let user_id = create_account(&pool, "ada@example.com").await;
    sqlx::query("INSERT INTO user_profile (user_id, name, points) VALUES ($1, 'Ada', 50)")
        .bind(user_id)
        .execute(&pool)
        .await
        .unwrap();

    let response = get(build_test_app(pool.clone()), "/leaderboard").await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["leaderboard"][0]["profile_image"], DEFAULT_PROFILE_IMAGE);

    // The substitution is response-time only; the row still has NULL.
    let (stored,): (Option<String>,) =
        sqlx::query_as("SELECT profile_image FROM user_profile WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, None);
}
