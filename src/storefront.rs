//! Ties ingestion, the filter engine, and checkout together around one
//! atomically-replaced catalog snapshot

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::info;

use crate::catalog::{self, CatalogFacets};
use crate::checkout::WhatsAppCheckout;
use crate::models::{FilterState, Product};
use crate::sheets::{SheetsClient, SheetsConfig};

/// One ingestion cycle's worth of catalog data. Replaced wholesale on
/// refresh, never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub generation: u64,
    pub fetched_at: Option<DateTime<Utc>>,
    pub products: Vec<Product>,
}

#[derive(Clone)]
pub struct Storefront {
    sheets: SheetsClient,
    checkout: WhatsAppCheckout,
    snapshot: Arc<RwLock<Snapshot>>,
    generation: Arc<AtomicU64>,
}

impl Storefront {
    pub fn new() -> Self {
        Self::with_client(SheetsClient::new(SheetsConfig::from_env()))
    }

    pub fn with_client(sheets: SheetsClient) -> Self {
        Self {
            sheets,
            checkout: WhatsAppCheckout::new(),
            snapshot: Arc::new(RwLock::new(Snapshot::default())),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Re-run ingestion and install the result as the current snapshot.
    ///
    /// Each refresh claims a generation token before fetching; a slow
    /// response that resolves after a newer refresh has already landed is
    /// dropped instead of overwriting it.
    pub async fn refresh(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let products = self.sheets.load().await;

        let mut snapshot = self.snapshot.write().await;
        if snapshot.generation > generation {
            info!(
                "Dropping stale catalog refresh (generation {generation}, current {})",
                snapshot.generation
            );
            return;
        }

        *snapshot = Snapshot {
            generation,
            fetched_at: Some(Utc::now()),
            products,
        };
        info!(
            "Catalog snapshot installed: {} products (generation {generation})",
            snapshot.products.len()
        );
    }

    /// The full collection as last ingested
    pub async fn products(&self) -> Vec<Product> {
        self.snapshot.read().await.products.clone()
    }

    /// Products for the card grid: engine output minus anything out of
    /// stock. Out-of-stock items never render, they are not merely marked.
    pub async fn visible(&self, query: &str, filters: &FilterState) -> Vec<Product> {
        let snapshot = self.snapshot.read().await;
        let mut shown = catalog::apply(&snapshot.products, query, filters);
        shown.retain(|product| product.in_stock);
        shown
    }

    /// Filter options for the sidebar, derived from the full unfiltered
    /// collection
    pub async fn facets(&self) -> CatalogFacets {
        catalog::facets(&self.snapshot.read().await.products)
    }

    pub fn checkout(&self) -> &WhatsAppCheckout {
        &self.checkout
    }
}
