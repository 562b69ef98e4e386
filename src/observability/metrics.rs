use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub catalog_searches_total: IntCounterVec,
    pub orders_created_total: IntCounterVec,
    pub status_updates_total: IntCounterVec,
    pub active_orders: IntGauge,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let catalog_searches_total = IntCounterVec::new(
            Opts::new("catalog_searches_total", "Catalog searches by sort key"),
            &["sort"],
        )
        .expect("valid catalog_searches_total metric");

        let orders_created_total = IntCounterVec::new(
            Opts::new("orders_created_total", "Orders placed by fulfillment mode"),
            &["fulfillment"],
        )
        .expect("valid orders_created_total metric");

        let status_updates_total = IntCounterVec::new(
            Opts::new("status_updates_total", "Order status updates by outcome"),
            &["outcome"],
        )
        .expect("valid status_updates_total metric");

        let active_orders = IntGauge::new("active_orders", "Orders not yet delivered")
            .expect("valid active_orders metric");

        registry
            .register(Box::new(catalog_searches_total.clone()))
            .expect("register catalog_searches_total");
        registry
            .register(Box::new(orders_created_total.clone()))
            .expect("register orders_created_total");
        registry
            .register(Box::new(status_updates_total.clone()))
            .expect("register status_updates_total");
        registry
            .register(Box::new(active_orders.clone()))
            .expect("register active_orders");

        Self {
            registry,
            catalog_searches_total,
            orders_created_total,
            status_updates_total,
            active_orders,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
