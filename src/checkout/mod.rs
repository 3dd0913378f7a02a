//! # WhatsApp Checkout Hand-off
//!
//! Purchase intent leaves this system as a prefilled WhatsApp deep link.
//! No payment or order processing happens here: the link is opened by the
//! UI in a new browsing context, the store owner takes over in chat, and
//! nothing is read back.
//!
//! ## Link format
//!
//! `https://wa.me/{number}?text={url-encoded message}` where the message
//! embeds the product name, the selected size, and the price. The number
//! comes from the `WHATSAPP_NUMBER` environment variable, falling back to
//! the store's default.
//!
//! ## Validation
//!
//! A size must be selected before the hand-off, and it must be one the
//! product actually carries. Violations are returned as errors for the UI
//! to surface as a blocking prompt; no link is produced.

use anyhow::{Result, bail};
use tracing::{info, warn};

use crate::models::Product;

const DEFAULT_WHATSAPP_NUMBER: &str = "916296329245";

/// Builds order hand-off links for the configured store number.
///
/// Cheap to clone and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct WhatsAppCheckout {
    phone_number: String,
}

impl WhatsAppCheckout {
    /// Reads `WHATSAPP_NUMBER` from the environment, falling back to the
    /// store default with a warning
    pub fn new() -> Self {
        let phone_number = std::env::var("WHATSAPP_NUMBER").unwrap_or_else(|_| {
            warn!("WHATSAPP_NUMBER not set - using the store default");
            DEFAULT_WHATSAPP_NUMBER.to_string()
        });

        Self { phone_number }
    }

    #[cfg(test)]
    fn with_number(phone_number: &str) -> Self {
        Self {
            phone_number: phone_number.to_string(),
        }
    }

    /// Build the deep link for ordering `product` in `selected_size`.
    ///
    /// # Errors
    ///
    /// Fails when no size is selected or the product does not carry the
    /// selected size. The caller surfaces the message to the user and
    /// performs no hand-off.
    pub fn order_link(&self, product: &Product, selected_size: Option<&str>) -> Result<String> {
        let Some(size) = selected_size.filter(|size| !size.is_empty()) else {
            bail!("Please select a size");
        };

        if !product.sizes.iter().any(|s| s == size) {
            bail!("Size {size} is not available for {}", product.name);
        }

        let message = format!(
            "Hi! I'm interested in purchasing:\n\n*{}*\nSize: {}\nPrice: \u{20b9}{}\n\n\
             Please let me know about availability and delivery details.",
            product.name,
            size,
            format_price(product.price),
        );

        info!("Built order link for {} (size {size})", product.name);

        Ok(format!(
            "https://wa.me/{}?text={}",
            self.phone_number,
            urlencoding::encode(&message)
        ))
    }
}

/// Whole-rupee prices print without a decimal tail
fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{}", price as i64)
    } else {
        format!("{price}")
    }
}
