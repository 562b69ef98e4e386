use std::sync::Arc;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Serialize;
use tracing::debug;

use crate::engine::catalog::{self, CatalogQuery};
use crate::error::AppError;
use crate::models::provider::{Provider, ServiceOffering};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/providers", get(search_providers))
        .route("/providers/:id", get(get_provider))
        .route("/providers/:id/services", get(list_services))
}

#[derive(Serialize)]
pub struct ProviderView {
    #[serde(flatten)]
    pub provider: Provider,
    pub price_symbol: &'static str,
    pub express: bool,
}

impl From<&Provider> for ProviderView {
    fn from(provider: &Provider) -> Self {
        Self {
            provider: provider.clone(),
            price_symbol: provider.price_tier.symbol(),
            express: catalog::is_express(provider),
        }
    }
}

async fn search_providers(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CatalogQuery>, QueryRejection>,
) -> Result<Json<Vec<ProviderView>>, AppError> {
    let Query(query) = query?;
    let results = catalog::search(&state.providers, &query);

    state
        .metrics
        .catalog_searches_total
        .with_label_values(&[query.sort.as_str()])
        .inc();
    debug!(
        text = %query.text,
        sort = query.sort.as_str(),
        delivery_only = query.delivery_only,
        matches = results.len(),
        "catalog search"
    );

    Ok(Json(results.iter().map(ProviderView::from).collect()))
}

async fn get_provider(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<ProviderView>, AppError> {
    let Path(id) = id?;
    let provider = catalog::find_provider(&state.providers, &id)?;
    Ok(Json(ProviderView::from(provider)))
}

async fn list_services(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<ServiceOffering>>, AppError> {
    let Path(id) = id?;
    Ok(Json(state.services_for(&id)?.to_vec()))
}
