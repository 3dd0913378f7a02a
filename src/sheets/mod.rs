//! Catalog ingestion from a public Google Sheet's gviz JSON export
//!
//! The sheet is the source of truth for the catalog. Loading never fails:
//! any transport or parse problem falls back to the built-in seed catalog
//! so the storefront always has a renderable product set.

mod cells;

pub use cells::{FALLBACK_IMAGE_URL, GvizCell, normalize_media_cell, split_list};

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::models::Product;
use crate::seed::seed_products;

const DEFAULT_SHEET_ID: &str = "1p2Gn1lWS59621e-ptgh5XoOJigdeFPia1o_rc-MsxV8";
const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Column positions in the product sheet. The order is a contract with the
/// sheet owner; rows are mapped by position, never by header name.
mod col {
    pub const ID: usize = 0;
    pub const NAME: usize = 1;
    pub const BRAND: usize = 2;
    pub const CATEGORY: usize = 3;
    pub const PRICE: usize = 4;
    pub const ORIGINAL_PRICE: usize = 5;
    pub const SIZES: usize = 6;
    pub const COLORS: usize = 7;
    pub const IMAGES: usize = 8;
    pub const VIDEOS: usize = 9;
    pub const IMAGES_3D: usize = 10;
    pub const DESCRIPTION: usize = 11;
    pub const FEATURES: usize = 12;
    pub const RATING: usize = 13;
    pub const REVIEW_COUNT: usize = 14;
    pub const IN_STOCK: usize = 15;
    pub const IS_SPECIAL_OFFER: usize = 16;
    pub const OFFER_TEXT: usize = 17;
}

/// Rows narrower than this are skipped; every column past it has a default
const MIN_COLUMNS: usize = 10;

/// Which sheet to read, resolved from the environment with compiled-in
/// defaults
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub sheet_id: String,
    pub sheet_name: String,
}

impl SheetsConfig {
    pub fn from_env() -> Self {
        let sheet_id =
            std::env::var("SHEET_ID").unwrap_or_else(|_| DEFAULT_SHEET_ID.to_string());
        let sheet_name =
            std::env::var("SHEET_NAME").unwrap_or_else(|_| DEFAULT_SHEET_NAME.to_string());

        Self {
            sheet_id,
            sheet_name,
        }
    }

    fn export_url(&self) -> String {
        format!(
            "https://docs.google.com/spreadsheets/d/{}/gviz/tq?tqx=out:json&sheet={}",
            self.sheet_id, self.sheet_name
        )
    }
}

/// Transport seam over the export endpoint so tests can substitute canned
/// or failing responses
#[async_trait]
pub trait SheetTransport: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Production transport backed by a shared reqwest client
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl SheetTransport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Failed to fetch sheet export: {}",
                response.status()
            ));
        }

        Ok(response.text().await?)
    }
}

#[derive(Debug, Deserialize)]
struct GvizDocument {
    table: GvizTable,
}

#[derive(Debug, Deserialize)]
struct GvizTable {
    #[serde(default)]
    rows: Vec<GvizRow>,
}

#[derive(Debug, Deserialize)]
struct GvizRow {
    #[serde(default)]
    c: Vec<Option<GvizCell>>,
}

/// Fetches and normalizes the product sheet
#[derive(Clone)]
pub struct SheetsClient {
    transport: Arc<dyn SheetTransport>,
    config: SheetsConfig,
}

impl SheetsClient {
    pub fn new(config: SheetsConfig) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    pub fn with_transport(config: SheetsConfig, transport: Arc<dyn SheetTransport>) -> Self {
        Self { transport, config }
    }

    /// Load the catalog. On any failure the full seed collection is
    /// returned instead; partial results are never surfaced.
    pub async fn load(&self) -> Vec<Product> {
        match self.fetch_catalog().await {
            Ok(products) => {
                info!("Loaded {} products from sheet", products.len());
                products
            }
            Err(e) => {
                warn!("Sheet ingestion failed, using seed catalog: {e:#}");
                seed_products()
            }
        }
    }

    async fn fetch_catalog(&self) -> Result<Vec<Product>> {
        info!("Fetching catalog from sheet {}", self.config.sheet_id);

        let body = self.transport.fetch(&self.config.export_url()).await?;
        let json = extract_json(&body).context("no JSON document in sheet response")?;
        let document: GvizDocument =
            serde_json::from_str(json).context("malformed gviz document")?;

        Ok(parse_rows(&document.table.rows))
    }
}

/// The gviz endpoint wraps its JSON in a JS callback whose exact length has
/// drifted between deployments. Locate the embedded document by its braces
/// instead of stripping a fixed prefix.
fn extract_json(body: &str) -> Option<&str> {
    let start = body.find('{')?;
    let end = body.rfind('}')?;
    (start <= end).then(|| &body[start..=end])
}

fn parse_rows(rows: &[GvizRow]) -> Vec<Product> {
    let mut products = Vec::new();

    // Row 0 is the header
    for (index, row) in rows.iter().enumerate().skip(1) {
        if row.c.len() < MIN_COLUMNS {
            warn!(
                "Skipping row {index}: {} columns, need at least {MIN_COLUMNS}",
                row.c.len()
            );
            continue;
        }
        products.push(parse_row(&row.c, index));
    }

    products
}

fn parse_row(cells: &[Option<GvizCell>], index: usize) -> Product {
    let id = string_at(cells, col::ID).unwrap_or_else(|| format!("product-{index}"));
    let price = number_at(cells, col::PRICE).unwrap_or(0.0);
    let original_price = number_at(cells, col::ORIGINAL_PRICE);

    let images = media_at(cells, col::IMAGES);
    let images = if images.is_empty() {
        vec![FALLBACK_IMAGE_URL.to_string()]
    } else {
        images
    };

    Product {
        discount: discount_percent(&id, price, original_price),
        name: string_at(cells, col::NAME).unwrap_or_default(),
        brand: string_at(cells, col::BRAND).unwrap_or_default(),
        category: string_at(cells, col::CATEGORY).unwrap_or_default(),
        price,
        original_price,
        sizes: list_at(cells, col::SIZES),
        colors: list_at(cells, col::COLORS),
        images,
        videos: media_at(cells, col::VIDEOS),
        images_3d: media_at(cells, col::IMAGES_3D),
        description: string_at(cells, col::DESCRIPTION).unwrap_or_default(),
        features: list_at(cells, col::FEATURES),
        rating: number_at(cells, col::RATING).unwrap_or(4.0),
        review_count: number_at(cells, col::REVIEW_COUNT).unwrap_or(0.0) as u32,
        in_stock: bool_at(cells, col::IN_STOCK),
        is_special_offer: bool_at(cells, col::IS_SPECIAL_OFFER),
        offer_text: string_at(cells, col::OFFER_TEXT),
        id,
    }
}

fn cell_at(cells: &[Option<GvizCell>], index: usize) -> Option<&GvizCell> {
    cells.get(index)?.as_ref()
}

fn string_at(cells: &[Option<GvizCell>], index: usize) -> Option<String> {
    match &cell_at(cells, index)?.v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numbers may arrive as JSON numbers or as numeric text
fn number_at(cells: &[Option<GvizCell>], index: usize) -> Option<f64> {
    match &cell_at(cells, index)?.v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Booleans arrive as JSON `true` or as the sheet text "TRUE"
fn bool_at(cells: &[Option<GvizCell>], index: usize) -> bool {
    match cell_at(cells, index).map(|cell| &cell.v) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "TRUE",
        _ => false,
    }
}

fn list_at(cells: &[Option<GvizCell>], index: usize) -> Vec<String> {
    match cell_at(cells, index).map(|cell| &cell.v) {
        Some(Value::String(s)) => split_list(s),
        _ => Vec::new(),
    }
}

fn media_at(cells: &[Option<GvizCell>], index: usize) -> Vec<String> {
    normalize_media_cell(cell_at(cells, index))
}

/// Derived percent-off. Withheld with a data-quality warning when the
/// "original" price sits below the current one.
fn discount_percent(id: &str, price: f64, original_price: Option<f64>) -> Option<u32> {
    let original = original_price?;

    if original <= 0.0 || price <= 0.0 {
        return None;
    }

    if original < price {
        warn!("Product {id}: original price {original} below current price {price}, no discount");
        return None;
    }

    Some(((original - price) / original * 100.0).round() as u32)
}
