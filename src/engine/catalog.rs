use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::provider::Provider;

const EXPRESS_TURNAROUND_DAYS: u32 = 2;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Turnaround,
    Distance,
    Rating,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Turnaround => "turnaround",
            SortKey::Distance => "distance",
            SortKey::Rating => "rating",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogQuery {
    #[serde(default, alias = "q")]
    pub text: String,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub delivery_only: bool,
}

/// Filters and orders the catalog for the browse view. The input is left untouched;
/// ties on the sort key keep catalog order.
pub fn search(providers: &[Provider], query: &CatalogQuery) -> Vec<Provider> {
    let needle = query.text.to_lowercase();

    let mut result: Vec<Provider> = providers
        .iter()
        .filter(|provider| needle.is_empty() || matches_text(provider, &needle))
        .filter(|provider| !query.delivery_only || provider.delivery)
        .cloned()
        .collect();

    match query.sort {
        SortKey::Turnaround => result.sort_by_key(|provider| provider.turnaround_days),
        SortKey::Distance => {
            result.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles))
        }
        SortKey::Rating => result.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    result
}

fn matches_text(provider: &Provider, needle: &str) -> bool {
    provider.name.to_lowercase().contains(needle)
        || provider
            .specialties
            .iter()
            .any(|specialty| specialty.to_lowercase().contains(needle))
}

pub fn find_provider<'a>(providers: &'a [Provider], id: &str) -> Result<&'a Provider, AppError> {
    providers
        .iter()
        .find(|provider| provider.id == id)
        .ok_or_else(|| AppError::NotFound(format!("provider {id} not found")))
}

pub fn is_express(provider: &Provider) -> bool {
    provider.turnaround_days <= EXPRESS_TURNAROUND_DAYS
}

#[cfg(test)]
mod tests {
    use super::{find_provider, is_express, search, CatalogQuery, SortKey};
    use crate::fixtures;
    use crate::models::provider::Provider;

    fn query(text: &str, sort: SortKey, delivery_only: bool) -> CatalogQuery {
        CatalogQuery {
            text: text.to_string(),
            sort,
            delivery_only,
        }
    }

    fn ids(providers: &[Provider]) -> Vec<&str> {
        providers.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn turnaround_sort_orders_fastest_first_and_keeps_catalog_order_on_ties() {
        let catalog = fixtures::providers();
        let result = search(&catalog, &query("", SortKey::Turnaround, false));

        let days: Vec<u32> = result.iter().map(|p| p.turnaround_days).collect();
        assert_eq!(days, vec![1, 2, 2, 3, 4, 5]);
        assert_eq!(ids(&result), vec!["2", "1", "5", "4", "6", "3"]);
    }

    #[test]
    fn rating_sort_is_non_increasing() {
        let catalog = fixtures::providers();
        let result = search(&catalog, &query("", SortKey::Rating, false));

        assert_eq!(result.len(), catalog.len());
        assert!(result.windows(2).all(|w| w[0].rating >= w[1].rating));
        assert_eq!(result[0].id, "3");
    }

    #[test]
    fn distance_sort_is_non_decreasing() {
        let catalog = fixtures::providers();
        let result = search(&catalog, &query("", SortKey::Distance, false));

        assert!(result
            .windows(2)
            .all(|w| w[0].distance_miles <= w[1].distance_miles));
    }

    #[test]
    fn text_matches_name_or_specialty_case_insensitively() {
        let catalog = fixtures::providers();

        let by_name = search(&catalog, &query("HEM HOUSE", SortKey::Turnaround, false));
        assert_eq!(ids(&by_name), vec!["5"]);

        let by_specialty = search(&catalog, &query("formal", SortKey::Turnaround, false));
        assert_eq!(ids(&by_specialty), vec!["1", "6"]);
    }

    #[test]
    fn delivery_filter_drops_pickup_only_tailors() {
        let catalog = fixtures::providers();
        let result = search(&catalog, &query("alterations", SortKey::Turnaround, true));

        assert!(result.iter().all(|p| p.delivery));
        assert!(!ids(&result).contains(&"4"));
    }

    #[test]
    fn no_match_yields_empty_result() {
        let catalog = fixtures::providers();
        let result = search(&catalog, &query("leather jackets", SortKey::Rating, false));
        assert!(result.is_empty());
    }

    #[test]
    fn search_never_mutates_or_invents() {
        let catalog = fixtures::providers();
        let before = catalog.clone();

        let result = search(&catalog, &query("s", SortKey::Distance, true));

        assert_eq!(catalog, before);
        assert!(result.iter().all(|p| catalog.contains(p)));
    }

    #[test]
    fn find_provider_reports_missing_ids() {
        let catalog = fixtures::providers();
        assert_eq!(find_provider(&catalog, "3").unwrap().name, "Master Tailor Studio");
        assert!(find_provider(&catalog, "99").is_err());
    }

    #[test]
    fn express_badge_covers_two_days_or_less() {
        let catalog = fixtures::providers();
        let express: Vec<&str> = catalog
            .iter()
            .filter(|p| is_express(p))
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(express, vec!["1", "2", "5"]);
    }
}
