#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use favorites_core::assets::{Asset, Audience, Chart, Insight, Point};
use favorites_core::user::User;
use favorites_store::InMemoryUserRepo;
use http_body_util::BodyExt;
use tower::ServiceExt;

use favorites_api::config::ServerConfig;
use favorites_api::router::build_app_router;
use favorites_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. Seeding is left to the caller.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_users: 0,
        seed_assets_per_user: 0,
    }
}

pub fn sample_insight() -> Asset {
    Asset::Insight(Insight {
        id: 1,
        description: "Sample Insight".into(),
        text: "Sample Insight Text".into(),
    })
}

pub fn sample_chart() -> Asset {
    Asset::Chart(Chart {
        id: 2,
        description: "Sample Chart".into(),
        title: "Sample Chart Title".into(),
        x_axis_title: "X-Axis".into(),
        y_axis_title: "Y-Axis".into(),
        data_points: vec![Point { x: 10.0, y: 10.0 }, Point { x: 20.0, y: 20.0 }],
    })
}

pub fn sample_audience() -> Asset {
    Asset::Audience(Audience {
        id: 3,
        description: "Sample Audience".into(),
        age: 25,
        age_group: "26-40".into(),
        gender: "Male".into(),
        birth_country: "USA".into(),
        hours_spent_on_media: 18,
        number_of_purchases: 4,
    })
}

/// A store where users 1, 2 and 3 each own Insight 1, Chart 2 and Audience 3.
pub fn seeded_store() -> Arc<InMemoryUserRepo> {
    let users: HashMap<_, _> = (1..=3)
        .map(|id| {
            let user = User::with_favorites(
                id,
                [sample_insight(), sample_chart(), sample_audience()],
            );
            (id, user)
        })
        .collect();
    Arc::new(InMemoryUserRepo::with_users(users))
}

/// Build the full application router over `store`, using the same builder
/// as `main.rs`.
pub fn build_test_app(store: Arc<InMemoryUserRepo>) -> Router {
    build_app_router(AppState::new(store, test_config()))
}

async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Body::from(json.to_string())).await
}

/// Send a request with an arbitrary, possibly invalid, body.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    body: &'static str,
) -> Response<Body> {
    send(app, method, uri, Body::from(body)).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
