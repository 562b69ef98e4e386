use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub trait OrderIdSource: Send + Sync {
    fn next_id(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UuidOrderIds;

impl OrderIdSource for UuidOrderIds {
    fn next_id(&self) -> String {
        format!("order-{}", Uuid::new_v4().simple())
    }
}

#[derive(Debug)]
pub struct SequentialOrderIds {
    counter: AtomicU64,
}

impl SequentialOrderIds {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialOrderIds {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderIdSource for SequentialOrderIds {
    fn next_id(&self) -> String {
        format!("order-{}", self.counter.fetch_add(1, Ordering::Relaxed))
    }
}
