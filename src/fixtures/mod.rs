use std::collections::HashMap;

use crate::models::provider::{PriceTier, Provider, ServiceOffering};

#[allow(clippy::too_many_arguments)]
fn provider(
    id: &str,
    name: &str,
    rating: f64,
    reviews: u32,
    turnaround_days: u32,
    distance_miles: f64,
    specialties: &[&str],
    price_tier: PriceTier,
    delivery: bool,
) -> Provider {
    Provider {
        id: id.to_string(),
        name: name.to_string(),
        rating,
        reviews,
        turnaround_days,
        distance_miles,
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        price_tier,
        delivery,
        available: true,
    }
}

fn offering(id: &str, name: &str, price: u32, turnaround_days: u32) -> ServiceOffering {
    ServiceOffering {
        id: id.to_string(),
        name: name.to_string(),
        price,
        turnaround_days,
    }
}

pub fn providers() -> Vec<Provider> {
    vec![
        provider(
            "1",
            "Elena's Alterations",
            4.9,
            127,
            2,
            0.8,
            &["Alterations", "Formal Wear", "Wedding"],
            PriceTier::Mid,
            true,
        ),
        provider(
            "2",
            "Quick Stitch Tailoring",
            4.7,
            89,
            1,
            1.2,
            &["Express Service", "Casual Wear", "Repairs"],
            PriceTier::Low,
            true,
        ),
        provider(
            "3",
            "Master Tailor Studio",
            5.0,
            203,
            5,
            2.1,
            &["Bespoke Suits", "Custom Design", "Luxury"],
            PriceTier::High,
            true,
        ),
        provider(
            "4",
            "Stitch & Style",
            4.8,
            156,
            3,
            1.5,
            &["Dresses", "Casual Wear", "Alterations"],
            PriceTier::Mid,
            false,
        ),
        provider(
            "5",
            "The Hem House",
            4.6,
            74,
            2,
            3.2,
            &["Hemming", "Repairs", "Simple Alterations"],
            PriceTier::Low,
            true,
        ),
        provider(
            "6",
            "Precision Tailors",
            4.9,
            198,
            4,
            1.8,
            &["Business Attire", "Formal Wear", "Shirts"],
            PriceTier::Mid,
            true,
        ),
    ]
}

pub fn services() -> HashMap<String, Vec<ServiceOffering>> {
    HashMap::from([
        (
            "1".to_string(),
            vec![
                offering("s1", "Hem Pants", 15, 1),
                offering("s2", "Hem Dress", 25, 2),
                offering("s3", "Take In/Let Out", 30, 2),
                offering("s4", "Shorten Sleeves", 20, 1),
                offering("s5", "Zipper Replacement", 35, 2),
            ],
        ),
        (
            "2".to_string(),
            vec![
                offering("s1", "Express Hem (Same Day)", 25, 0),
                offering("s2", "Regular Hem", 12, 1),
                offering("s3", "Button Replacement", 8, 0),
                offering("s4", "Simple Repairs", 15, 1),
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{providers, services};

    #[test]
    fn provider_ids_are_unique() {
        let catalog = providers();
        let ids: HashSet<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn every_service_menu_belongs_to_a_listed_provider() {
        let catalog = providers();
        for provider_id in services().keys() {
            assert!(catalog.iter().any(|p| &p.id == provider_id));
        }
    }

    #[test]
    fn ratings_stay_in_range() {
        assert!(providers()
            .iter()
            .all(|p| (0.0..=5.0).contains(&p.rating)));
    }
}
