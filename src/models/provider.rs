use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Low,
    Mid,
    High,
}

impl PriceTier {
    pub fn symbol(&self) -> &'static str {
        match self {
            PriceTier::Low => "$",
            PriceTier::Mid => "$$",
            PriceTier::High => "$$$",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub reviews: u32,
    pub turnaround_days: u32,
    pub distance_miles: f64,
    pub specialties: Vec<String>,
    pub price_tier: PriceTier,
    pub delivery: bool,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceOffering {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub turnaround_days: u32,
}
