//! Data models for catalog products and user-selected filter criteria

use serde::{Deserialize, Serialize};

/// A single catalog product, built once per ingestion cycle and never
/// mutated afterwards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub original_price: Option<f64>,
    /// Percent off, derived from `original_price` during ingestion
    pub discount: Option<u32>,
    /// Size labels; may look numeric but are treated as text
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    /// Never empty after ingestion; the first entry is the poster image
    pub images: Vec<String>,
    pub videos: Vec<String>,
    pub images_3d: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
    /// Out-of-stock products are excluded from the card grid entirely
    pub in_stock: bool,
    pub is_special_offer: bool,
    pub offer_text: Option<String>,
}

/// Sort orders offered by the filter sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Rating,
    Name,
}

impl SortBy {
    /// Unrecognized values fall back to `Featured`
    pub fn from_str(s: &str) -> Self {
        match s {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "rating" => Self::Rating,
            "name" => Self::Name,
            _ => Self::Featured,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Name => "name",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Rating => "Customer Rating",
            Self::Name => "Name: A to Z",
        }
    }
}

/// User-selected narrowing and ordering criteria, owned by the UI layer and
/// passed by reference into the engine
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Exact-match category; empty string means no constraint
    pub category: String,
    /// Exact-match brand; empty string means no constraint
    pub brand: String,
    /// Inclusive `[min, max]` price bounds; the mutator keeps min <= max
    pub price_range: (f64, f64),
    /// Size labels matched with OR semantics; empty means no constraint
    pub sizes: Vec<String>,
    pub sort_by: SortBy,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: String::new(),
            brand: String::new(),
            price_range: (0.0, 10_000.0),
            sizes: Vec::new(),
            sort_by: SortBy::Featured,
        }
    }
}
