//! The filter/sort pipeline and facet derivation
//!
//! Pure functions over an in-memory product snapshot. The engine holds no
//! state and never mutates its inputs, so the UI can re-run it on every
//! keystroke or filter change.

use crate::models::{FilterState, Product, SortBy};

/// Apply the search query and filter criteria to the collection and return
/// the matching products in display order.
///
/// Stages run in a fixed order, each narrowing the last: text search,
/// category, brand, price range, sizes, then a stable sort. `Featured`
/// keeps the incoming order.
pub fn apply(products: &[Product], query: &str, filters: &FilterState) -> Vec<Product> {
    let mut filtered: Vec<Product> = products.to_vec();

    if !query.is_empty() {
        let needle = query.to_lowercase();
        filtered.retain(|product| {
            product.name.to_lowercase().contains(&needle)
                || product.brand.to_lowercase().contains(&needle)
                || product.category.to_lowercase().contains(&needle)
        });
    }

    if !filters.category.is_empty() {
        filtered.retain(|product| product.category == filters.category);
    }

    if !filters.brand.is_empty() {
        filtered.retain(|product| product.brand == filters.brand);
    }

    let (min, max) = filters.price_range;
    filtered.retain(|product| product.price >= min && product.price <= max);

    if !filters.sizes.is_empty() {
        filtered.retain(|product| {
            product
                .sizes
                .iter()
                .any(|size| filters.sizes.contains(size))
        });
    }

    // Vec::sort_by is stable, so equal keys keep their relative order
    match filters.sort_by {
        SortBy::PriceLow => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::PriceHigh => filtered.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortBy::Rating => filtered.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortBy::Name => {
            filtered.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortBy::Featured => {}
    }

    filtered
}

/// Filter options for the sidebar, always derived from the full unfiltered
/// collection so choices never shrink as filters are applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFacets {
    /// Distinct categories in first-appearance order
    pub categories: Vec<String>,
    /// Distinct brands in first-appearance order
    pub brands: Vec<String>,
    /// Distinct sizes across all products, sorted
    pub sizes: Vec<String>,
}

pub fn facets(products: &[Product]) -> CatalogFacets {
    let mut facets = CatalogFacets::default();

    for product in products {
        if !facets.categories.contains(&product.category) {
            facets.categories.push(product.category.clone());
        }
        if !facets.brands.contains(&product.brand) {
            facets.brands.push(product.brand.clone());
        }
        for size in &product.sizes {
            if !facets.sizes.contains(size) {
                facets.sizes.push(size.clone());
            }
        }
    }

    facets.sizes.sort();
    facets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, brand: &str, category: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            brand: brand.to_string(),
            category: category.to_string(),
            price,
            original_price: None,
            discount: None,
            sizes: vec!["8".to_string(), "9".to_string()],
            colors: Vec::new(),
            images: vec!["https://img.jpg".to_string()],
            videos: Vec::new(),
            images_3d: Vec::new(),
            description: String::new(),
            features: Vec::new(),
            rating: 4.0,
            review_count: 10,
            in_stock: true,
            is_special_offer: false,
            offer_text: None,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product("1", "Leather Jutti", "Royal Craft", "Traditional", 1000.0),
            product("2", "Running Shoes", "ActiveFit", "Sports", 500.0),
            product("3", "Oxford Shoes", "Elite Class", "Formal", 2000.0),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn price_low_orders_ascending() {
        let filters = FilterState {
            sort_by: SortBy::PriceLow,
            ..FilterState::default()
        };
        let result = apply(&sample(), "", &filters);

        let prices: Vec<f64> = result.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![500.0, 1000.0, 2000.0]);
    }

    #[test]
    fn price_high_orders_descending() {
        let filters = FilterState {
            sort_by: SortBy::PriceHigh,
            ..FilterState::default()
        };
        let result = apply(&sample(), "", &filters);
        assert_eq!(ids(&result), vec!["3", "1", "2"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut products = sample();
        products[0].name = "aardvark boots".to_string();
        products[2].name = "Bass loafers".to_string();

        let filters = FilterState {
            sort_by: SortBy::Name,
            ..FilterState::default()
        };
        let result = apply(&products, "", &filters);
        assert_eq!(ids(&result), vec!["1", "3", "2"]);
    }

    #[test]
    fn featured_keeps_incoming_order() {
        let result = apply(&sample(), "", &FilterState::default());
        assert_eq!(ids(&result), vec!["1", "2", "3"]);
    }

    #[test]
    fn query_matches_name_brand_or_category_case_insensitively() {
        let products = sample();

        let result = apply(&products, "sport", &FilterState::default());
        assert_eq!(ids(&result), vec!["2"]);

        // Upper-cased query yields the identical result
        let shouting = apply(&products, "SPORT", &FilterState::default());
        assert_eq!(ids(&shouting), ids(&result));

        let by_brand = apply(&products, "royal", &FilterState::default());
        assert_eq!(ids(&by_brand), vec!["1"]);
    }

    #[test]
    fn category_and_brand_are_exact_matches() {
        let products = sample();

        let filters = FilterState {
            category: "Sports".to_string(),
            ..FilterState::default()
        };
        assert_eq!(ids(&apply(&products, "", &filters)), vec!["2"]);

        // Case matters for the structured filters, unlike the query
        let filters = FilterState {
            category: "sports".to_string(),
            ..FilterState::default()
        };
        assert!(apply(&products, "", &filters).is_empty());

        let filters = FilterState {
            brand: "Elite Class".to_string(),
            ..FilterState::default()
        };
        assert_eq!(ids(&apply(&products, "", &filters)), vec!["3"]);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let filters = FilterState {
            price_range: (500.0, 1000.0),
            ..FilterState::default()
        };
        let result = apply(&sample(), "", &filters);

        assert_eq!(ids(&result), vec!["1", "2"]);
        for product in &result {
            assert!(product.price >= 500.0 && product.price <= 1000.0);
        }
    }

    #[test]
    fn size_filter_keeps_any_intersection() {
        let mut products = sample();
        products[0].sizes = vec!["7".to_string(), "8".to_string()];
        products[1].sizes = vec!["9".to_string(), "10".to_string()];
        products[2].sizes = vec!["11".to_string()];

        let filters = FilterState {
            sizes: vec!["9".to_string()],
            ..FilterState::default()
        };
        assert_eq!(ids(&apply(&products, "", &filters)), vec!["2"]);
    }

    #[test]
    fn result_is_subset_of_input() {
        let products = sample();
        let filters = FilterState {
            category: "Traditional".to_string(),
            price_range: (0.0, 1500.0),
            sort_by: SortBy::Rating,
            ..FilterState::default()
        };
        let result = apply(&products, "jutti", &filters);

        for found in &result {
            assert!(products.iter().any(|p| p.id == found.id));
        }
    }

    #[test]
    fn reapplying_same_criteria_is_a_no_op() {
        let filters = FilterState {
            sort_by: SortBy::PriceLow,
            price_range: (0.0, 1500.0),
            ..FilterState::default()
        };
        let once = apply(&sample(), "shoes", &filters);
        let twice = apply(&once, "shoes", &filters);

        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn stable_sort_preserves_order_of_equal_keys() {
        let mut products = sample();
        for product in &mut products {
            product.price = 999.0;
        }

        let filters = FilterState {
            sort_by: SortBy::PriceLow,
            ..FilterState::default()
        };
        assert_eq!(ids(&apply(&products, "", &filters)), vec!["1", "2", "3"]);
    }

    #[test]
    fn facets_come_from_the_full_collection() {
        let mut products = sample();
        products[0].sizes = vec!["9".to_string(), "6".to_string()];
        products[1].sizes = vec!["7".to_string(), "9".to_string()];
        products[2].sizes = vec!["10".to_string()];

        let facets = facets(&products);

        assert_eq!(facets.categories, vec!["Traditional", "Sports", "Formal"]);
        assert_eq!(facets.brands, vec!["Royal Craft", "ActiveFit", "Elite Class"]);
        assert_eq!(facets.sizes, vec!["10", "6", "7", "9"]);
    }
}
