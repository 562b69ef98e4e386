pub mod measurements;
pub mod orders;
pub mod providers;

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::engine::tracker::{self, OrderSummary};
use crate::models::order::{Order, OrderStatus};
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(providers::router())
        .merge(orders::router())
        .merge(measurements::router())
        .route("/dashboard", get(dashboard))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    providers: usize,
    orders: usize,
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        providers: state.providers.len(),
        orders: state.orders().await.len(),
    })
}

#[derive(Serialize)]
struct DashboardResponse {
    summary: OrderSummary,
    by_status: BTreeMap<OrderStatus, usize>,
    active: Vec<Order>,
    completed: Vec<Order>,
    has_measurements: bool,
}

async fn dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardResponse> {
    let has_measurements = state.measurements().await.has_measurements();
    let orders = state.orders().await;
    let (active, completed) = tracker::partition_active_completed(&orders);

    Json(DashboardResponse {
        summary: tracker::summarize(&orders),
        by_status: tracker::status_counts(&orders),
        active,
        completed,
        has_measurements,
    })
}

async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.metrics.encode() {
        Ok(body) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err).into_response(),
    }
}
