//! Catalog data layer for the Dipali Shoe House storefront
//!
//! Ingests product records from a public Google Sheet, normalizes them into
//! typed [`models::Product`] values, and exposes a pure filter/sort/search
//! engine plus WhatsApp order hand-off for the UI to drive.

pub mod catalog;
pub mod checkout;
pub mod models;
pub mod seed;
pub mod sheets;
pub mod storefront;
