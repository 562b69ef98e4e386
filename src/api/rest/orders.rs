use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::{get, patch};
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::engine::tracker::{self, StatusFilter, TrackingStep};
use crate::error::AppError;
use crate::models::order::{FulfillmentMode, Order, OrderStatus};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/:id", get(get_order))
        .route("/orders/:id/tracking", get(track_order))
        .route("/orders/:id/status", patch(update_order_status))
}

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub provider_id: String,
    pub service_id: String,
    pub fulfillment: FulfillmentMode,
}

#[derive(Deserialize)]
pub struct ListOrdersParams {
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Serialize)]
pub struct TrackingResponse {
    pub order: Order,
    pub progress: u8,
    pub steps: Vec<TrackingStep>,
}

async fn create_order(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<Order>, AppError> {
    let Json(payload) = payload?;
    let order = state
        .place_order(&payload.provider_id, &payload.service_id, payload.fulfillment)
        .await?;

    Ok(Json(order))
}

async fn list_orders(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListOrdersParams>, QueryRejection>,
) -> Result<Json<Vec<Order>>, AppError> {
    let Query(params) = params?;
    let filter = match params.status.as_deref() {
        Some(raw) => raw.parse::<StatusFilter>()?,
        None => StatusFilter::All,
    };

    let orders = state.orders().await;
    Ok(Json(tracker::filter_by_status(&orders, filter)))
}

async fn get_order(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Order>, AppError> {
    let Path(id) = id?;
    let orders = state.orders().await;
    let order = tracker::find_order(&orders, &id)?;

    Ok(Json(order.clone()))
}

async fn track_order(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<TrackingResponse>, AppError> {
    let Path(id) = id?;
    let orders = state.orders().await;
    let order = tracker::find_order(&orders, &id)?;

    Ok(Json(TrackingResponse {
        order: order.clone(),
        progress: tracker::progress_for(order.status),
        steps: tracker::tracking_steps(order.status),
    }))
}

async fn update_order_status(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<Order>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let status: OrderStatus = payload.status.parse()?;
    let order = state.update_order_status(&id, status).await?;

    Ok(Json(order))
}
