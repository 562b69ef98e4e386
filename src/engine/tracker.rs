use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::Duration;
use serde::Serialize;

use crate::engine::sources::{Clock, OrderIdSource};
use crate::error::AppError;
use crate::models::order::{FulfillmentMode, Order, OrderStatus};
use crate::models::provider::{Provider, ServiceOffering};

pub const DELIVERY_SURCHARGE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(OrderStatus),
}

impl FromStr for StatusFilter {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "all" => Ok(StatusFilter::All),
            other => other.parse().map(StatusFilter::Only),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransitionPolicy {
    #[default]
    Unguarded,
    ForwardOnly,
}

impl TransitionPolicy {
    pub fn check(&self, current: OrderStatus, next: OrderStatus) -> Result<(), AppError> {
        match self {
            TransitionPolicy::Unguarded => Ok(()),
            TransitionPolicy::ForwardOnly if next < current => Err(AppError::Conflict(format!(
                "cannot move order from {current} back to {next}"
            ))),
            TransitionPolicy::ForwardOnly => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrackingStep {
    pub status: OrderStatus,
    pub label: &'static str,
    pub description: &'static str,
    pub completed: bool,
    pub current: bool,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct OrderSummary {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

pub fn filter_by_status(orders: &[Order], filter: StatusFilter) -> Vec<Order> {
    match filter {
        StatusFilter::All => orders.to_vec(),
        StatusFilter::Only(status) => orders
            .iter()
            .filter(|order| order.status == status)
            .cloned()
            .collect(),
    }
}

pub fn partition_active_completed(orders: &[Order]) -> (Vec<Order>, Vec<Order>) {
    orders
        .iter()
        .cloned()
        .partition(|order| order.status != OrderStatus::Delivered)
}

pub fn progress_for(status: OrderStatus) -> u8 {
    match status {
        OrderStatus::Pending => 25,
        OrderStatus::Confirmed => 50,
        OrderStatus::InProgress => 75,
        OrderStatus::Ready => 90,
        OrderStatus::Delivered => 100,
    }
}

pub fn tracking_steps(status: OrderStatus) -> Vec<TrackingStep> {
    let current = status.index();

    OrderStatus::ALL
        .iter()
        .enumerate()
        .map(|(idx, step)| TrackingStep {
            status: *step,
            label: step.label(),
            description: step.description(),
            completed: idx <= current,
            current: idx == current,
        })
        .collect()
}

pub fn create_order(
    provider: &Provider,
    service: &ServiceOffering,
    fulfillment: FulfillmentMode,
    clock: &dyn Clock,
    ids: &dyn OrderIdSource,
) -> Order {
    let surcharge = match fulfillment {
        FulfillmentMode::Delivery => DELIVERY_SURCHARGE,
        FulfillmentMode::Pickup => 0,
    };
    let created_at = clock.now();

    Order {
        id: ids.next_id(),
        provider_id: provider.id.clone(),
        provider_name: provider.name.clone(),
        service: service.name.clone(),
        total_price: service.price + surcharge,
        status: OrderStatus::Pending,
        created_at,
        estimated_completion: created_at + Duration::days(i64::from(service.turnaround_days)),
        fulfillment,
    }
}

/// Returns a copy of `orders` with one order's status replaced.
/// An unknown id is reported as `NotFound`; the caller's collection is never touched.
pub fn set_status(
    orders: &[Order],
    order_id: &str,
    status: OrderStatus,
) -> Result<Vec<Order>, AppError> {
    if !orders.iter().any(|order| order.id == order_id) {
        return Err(AppError::NotFound(format!("order {order_id} not found")));
    }

    Ok(orders
        .iter()
        .map(|order| {
            if order.id == order_id {
                Order {
                    status,
                    ..order.clone()
                }
            } else {
                order.clone()
            }
        })
        .collect())
}

pub fn find_order<'a>(orders: &'a [Order], order_id: &str) -> Result<&'a Order, AppError> {
    orders
        .iter()
        .find(|order| order.id == order_id)
        .ok_or_else(|| AppError::NotFound(format!("order {order_id} not found")))
}

pub fn status_counts(orders: &[Order]) -> BTreeMap<OrderStatus, usize> {
    let mut counts: BTreeMap<OrderStatus, usize> =
        OrderStatus::ALL.iter().map(|status| (*status, 0)).collect();

    for order in orders {
        *counts.entry(order.status).or_default() += 1;
    }

    counts
}

pub fn summarize(orders: &[Order]) -> OrderSummary {
    let completed = orders
        .iter()
        .filter(|order| order.status == OrderStatus::Delivered)
        .count();

    OrderSummary {
        total: orders.len(),
        active: orders.len() - completed,
        completed,
    }
}
