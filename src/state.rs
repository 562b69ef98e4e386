use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::{info, warn};

use crate::engine::catalog::find_provider;
use crate::engine::sources::{Clock, OrderIdSource, SystemClock, UuidOrderIds};
use crate::engine::tracker::{self, TransitionPolicy};
use crate::error::AppError;
use crate::fixtures;
use crate::models::measurement::{GarmentCategory, MeasurementField, MeasurementProfile};
use crate::models::order::{FulfillmentMode, Order, OrderStatus};
use crate::models::provider::{Provider, ServiceOffering};
use crate::observability::metrics::Metrics;

pub struct AppState {
    pub providers: Vec<Provider>,
    pub services: HashMap<String, Vec<ServiceOffering>>,
    orders: RwLock<Vec<Order>>,
    measurements: RwLock<MeasurementProfile>,
    pub transition_policy: TransitionPolicy,
    pub metrics: Metrics,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn OrderIdSource>,
}

impl AppState {
    pub fn new(transition_policy: TransitionPolicy) -> Self {
        Self::with_sources(
            fixtures::providers(),
            fixtures::services(),
            transition_policy,
            Arc::new(SystemClock),
            Arc::new(UuidOrderIds),
        )
    }

    pub fn with_sources(
        providers: Vec<Provider>,
        services: HashMap<String, Vec<ServiceOffering>>,
        transition_policy: TransitionPolicy,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn OrderIdSource>,
    ) -> Self {
        Self {
            providers,
            services,
            orders: RwLock::new(Vec::new()),
            measurements: RwLock::new(MeasurementProfile::default()),
            transition_policy,
            metrics: Metrics::new(),
            clock,
            ids,
        }
    }

    pub async fn orders(&self) -> RwLockReadGuard<'_, Vec<Order>> {
        self.orders.read().await
    }

    pub async fn measurements(&self) -> RwLockReadGuard<'_, MeasurementProfile> {
        self.measurements.read().await
    }

    pub fn services_for(&self, provider_id: &str) -> Result<&[ServiceOffering], AppError> {
        find_provider(&self.providers, provider_id)?;
        Ok(self
            .services
            .get(provider_id)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    pub async fn place_order(
        &self,
        provider_id: &str,
        service_id: &str,
        fulfillment: FulfillmentMode,
    ) -> Result<Order, AppError> {
        let provider = find_provider(&self.providers, provider_id)?;
        let service = self
            .services_for(provider_id)?
            .iter()
            .find(|service| service.id == service_id)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "service {service_id} not offered by provider {provider_id}"
                ))
            })?;

        let order = tracker::create_order(
            provider,
            service,
            fulfillment,
            self.clock.as_ref(),
            self.ids.as_ref(),
        );

        let mut orders = self.orders.write().await;
        orders.push(order.clone());

        self.metrics
            .orders_created_total
            .with_label_values(&[fulfillment.as_str()])
            .inc();
        self.refresh_active_gauge(&orders);

        info!(
            order_id = %order.id,
            provider_id = %order.provider_id,
            total_price = order.total_price,
            "order placed"
        );

        Ok(order)
    }

    pub async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<Order, AppError> {
        let mut orders = self.orders.write().await;

        let result = tracker::find_order(&orders, order_id)
            .and_then(|current| self.transition_policy.check(current.status, status))
            .and_then(|()| tracker::set_status(&orders, order_id, status));

        let updated = match result {
            Ok(updated) => updated,
            Err(err) => {
                self.metrics
                    .status_updates_total
                    .with_label_values(&["rejected"])
                    .inc();
                warn!(order_id, error = %err, "order status update rejected");
                return Err(err);
            }
        };

        *orders = updated;
        self.metrics
            .status_updates_total
            .with_label_values(&["applied"])
            .inc();
        self.refresh_active_gauge(&orders);

        info!(order_id, status = %status, "order status updated");

        tracker::find_order(&orders, order_id).cloned()
    }

    pub async fn replace_measurements(&self, profile: MeasurementProfile) -> MeasurementProfile {
        let mut current = self.measurements.write().await;
        *current = profile;
        info!(
            completed_fields = current.total_completed(),
            "measurement profile saved"
        );
        current.clone()
    }

    /// Applies all field updates for one category, or none of them if any is invalid.
    pub async fn update_measurements(
        &self,
        category: GarmentCategory,
        updates: BTreeMap<MeasurementField, Option<f64>>,
    ) -> Result<MeasurementProfile, AppError> {
        let mut current = self.measurements.write().await;
        let mut draft = current.clone();
        for (field, value) in updates {
            draft.set(category, field, value)?;
        }
        *current = draft;

        info!(
            category = category.as_str(),
            completed_fields = current.completion(category).completed,
            "measurements updated"
        );
        Ok(current.clone())
    }

    fn refresh_active_gauge(&self, orders: &[Order]) {
        let summary = tracker::summarize(orders);
        self.metrics.active_orders.set(summary.active as i64);
    }
}
