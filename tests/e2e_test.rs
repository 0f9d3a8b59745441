use axum::body::Body;
use axum::http::{Request, StatusCode};
use movie_rental::adapters::mock::MockTransaction;
use movie_rental::api::handlers::AppState;
use movie_rental::api::router::create_router;
use movie_rental::api::types::*;
use movie_rental::domain::value_objects::*;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

mod common;

use common::{MockWorld, sample_movie, utc};

// ============================================================================
// E2Eテスト用のヘルパー関数
// ============================================================================

/// モックアダプターで組み立てたルーター
fn setup_app(world: &MockWorld) -> axum::Router {
    let app_state: Arc<AppState<MockTransaction>> = Arc::new(AppState {
        movie_deps: world.movie_deps(),
        rental_deps: world.rental_deps(),
    });

    create_router(app_state)
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let world = MockWorld::new();

    let response = setup_app(&world).oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_movies() {
    let world = MockWorld::new();
    let alien = sample_movie("Alien", "Horror", utc(1979, 5, 25));
    let heat = sample_movie("Heat", "Crime", utc(1995, 12, 15));
    world.movies.add_movie(alien.clone());
    world.movies.add_movie(heat.clone());

    let (status, body) = send(setup_app(&world), get("/movies")).await;

    assert_eq!(status, StatusCode::OK);
    let movies = body.as_array().expect("Expected JSON array");
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0]["id"], json!(alien.movie_id.value()));
    assert_eq!(movies[0]["title"], "Alien");
    assert_eq!(movies[0]["poster_url"], json!(alien.poster_url));
    assert!(movies[0].get("video_url").is_none());
    assert_eq!(movies[1]["id"], json!(heat.movie_id.value()));
}

#[tokio::test]
async fn test_get_movie_for_viewing() {
    let world = MockWorld::new();
    let heat = sample_movie("Heat", "Crime", utc(1995, 12, 15));
    world.movies.add_movie(heat.clone());

    let (status, body) = send(
        setup_app(&world),
        get(&format!("/movies/{}", heat.movie_id.value())),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["video_url"], json!(heat.video_url));
    assert_eq!(body["category"], "Crime");
    assert!(body.get("poster_url").is_none());
}

#[tokio::test]
async fn test_get_movie_not_found() {
    let world = MockWorld::new();
    let movie_id = MovieId::new();

    let (status, body) = send(
        setup_app(&world),
        get(&format!("/movies/{}", movie_id.value())),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "MOVIE_NOT_FOUND");
}

#[tokio::test]
async fn test_rent_movie_and_view_rental() {
    let world = MockWorld::new();
    let customer_id = CustomerId::new();
    let movie_id = MovieId::new();

    let (status, body) = send(
        setup_app(&world),
        post_json(
            "/rentals",
            json!({
                "customer_id": customer_id.value(),
                "movie_id": movie_id.value(),
                "movie_category_name": "Crime",
                "movie_title": "Heat",
                "start_of_rental": "2024-01-01T00:00:00Z",
                "end_of_rental": "2024-01-04T00:00:00Z",
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let created: RentalCreatedResponse = serde_json::from_value(body).unwrap();

    let (status, body) = send(
        setup_app(&world),
        get(&format!("/rentals/{}", created.rental_id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(created.rental_id));
    assert_eq!(body["customer_id"], json!(customer_id.value()));
    assert_eq!(body["movie_title"], "Heat");
    assert_eq!(body["rental_days"], json!(3.0));
    assert!(body.get("created_at").is_none());
    assert!(body.get("updated_at").is_none());
}

#[tokio::test]
async fn test_view_rental_not_found() {
    let world = MockWorld::new();

    let (status, body) = send(
        setup_app(&world),
        get(&format!("/rentals/{}", RentalId::new().value())),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "RENTAL_NOT_FOUND");
}

#[tokio::test]
async fn test_rent_movie_malformed_body_is_rejected() {
    let world = MockWorld::new();

    let (status, _) = send(
        setup_app(&world),
        post_json("/rentals", json!({ "movie_title": "Heat" })),
    )
    .await;

    assert!(status.is_client_error());
    assert!(world.transactions.journal().is_empty());
}

// 内部エラーの詳細はクライアントに返さない
#[tokio::test]
async fn test_repository_failure_returns_generic_500() {
    let world = MockWorld::new();
    world.movies.fail_with("password authentication failed for user");

    let (status, body) = send(setup_app(&world), get("/movies")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "REPOSITORY_ERROR");
    assert!(!body.to_string().contains("password"));
}
