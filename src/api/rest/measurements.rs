use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::{get, patch};
use axum::Json;
use axum::Router;
use serde::Serialize;

use crate::error::AppError;
use crate::models::measurement::{
    CategoryCompletion, CategoryMeasurements, GarmentCategory, MeasurementField,
    MeasurementProfile,
};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/measurements",
            get(get_measurements).put(replace_measurements),
        )
        .route("/measurements/:category", patch(update_category))
}

#[derive(Serialize)]
pub struct MeasurementsResponse {
    pub measurements: MeasurementProfile,
    pub completion: Vec<CategoryCompletion>,
    pub total_completed: usize,
    pub has_measurements: bool,
}

impl From<MeasurementProfile> for MeasurementsResponse {
    fn from(profile: MeasurementProfile) -> Self {
        Self {
            completion: GarmentCategory::ALL
                .iter()
                .map(|category| profile.completion(*category))
                .collect(),
            total_completed: profile.total_completed(),
            has_measurements: profile.has_measurements(),
            measurements: profile,
        }
    }
}

async fn get_measurements(State(state): State<Arc<AppState>>) -> Json<MeasurementsResponse> {
    let profile = state.measurements().await.clone();
    Json(MeasurementsResponse::from(profile))
}

async fn replace_measurements(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BTreeMap<GarmentCategory, CategoryMeasurements>>, JsonRejection>,
) -> Result<Json<MeasurementsResponse>, AppError> {
    let Json(payload) = payload?;
    let profile = MeasurementProfile::from_raw(payload)?;
    let saved = state.replace_measurements(profile).await;

    Ok(Json(MeasurementsResponse::from(saved)))
}

async fn update_category(
    State(state): State<Arc<AppState>>,
    category: Result<Path<GarmentCategory>, PathRejection>,
    payload: Result<Json<BTreeMap<MeasurementField, Option<f64>>>, JsonRejection>,
) -> Result<Json<MeasurementsResponse>, AppError> {
    let Path(category) = category?;
    let Json(payload) = payload?;
    let updated = state.update_measurements(category, payload).await?;

    Ok(Json(MeasurementsResponse::from(updated)))
}
