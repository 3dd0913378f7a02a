//! Built-in fallback catalog used whenever sheet ingestion fails

use crate::models::Product;
use crate::sheets::FALLBACK_IMAGE_URL;

const SECONDARY_IMAGE_URL: &str =
    "https://images.pexels.com/photos/1598505/pexels-photo-1598505.jpeg";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// The fixed seed collection. Returned in full when ingestion cannot produce
/// a catalog, so the storefront always has something renderable.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Traditional Leather Jutti".to_string(),
            brand: "Royal Craft".to_string(),
            category: "Traditional".to_string(),
            price: 1299.0,
            original_price: Some(1899.0),
            discount: Some(32),
            sizes: strings(&["6", "7", "8", "9", "10"]),
            colors: strings(&["Brown", "Black", "Tan"]),
            images: strings(&[FALLBACK_IMAGE_URL, SECONDARY_IMAGE_URL]),
            videos: strings(&[
                "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_1mb.mp4",
            ]),
            images_3d: strings(&[FALLBACK_IMAGE_URL]),
            description: "Handcrafted traditional leather jutti with intricate embroidery. \
                          Perfect for weddings and special occasions."
                .to_string(),
            features: strings(&[
                "Genuine Leather",
                "Handcrafted",
                "Comfortable Sole",
                "Traditional Design",
            ]),
            rating: 4.5,
            review_count: 127,
            in_stock: true,
            is_special_offer: true,
            offer_text: Some("DIWALI SPECIAL".to_string()),
        },
        Product {
            id: "2".to_string(),
            name: "Sports Running Shoes".to_string(),
            brand: "ActiveFit".to_string(),
            category: "Sports".to_string(),
            price: 2499.0,
            original_price: Some(3499.0),
            discount: Some(29),
            sizes: strings(&["7", "8", "9", "10", "11"]),
            colors: strings(&["White", "Blue", "Red"]),
            images: strings(&[FALLBACK_IMAGE_URL, SECONDARY_IMAGE_URL]),
            videos: Vec::new(),
            images_3d: Vec::new(),
            description: "Lightweight sports shoes perfect for running and workouts. \
                          Advanced cushioning technology."
                .to_string(),
            features: strings(&[
                "Breathable Mesh",
                "Cushioned Sole",
                "Anti-Slip",
                "Lightweight",
            ]),
            rating: 4.2,
            review_count: 89,
            in_stock: true,
            is_special_offer: false,
            offer_text: None,
        },
        Product {
            id: "3".to_string(),
            name: "Formal Oxford Shoes".to_string(),
            brand: "Elite Class".to_string(),
            category: "Formal".to_string(),
            price: 3999.0,
            original_price: Some(5999.0),
            discount: Some(33),
            sizes: strings(&["7", "8", "9", "10", "11"]),
            colors: strings(&["Black", "Brown"]),
            images: strings(&[FALLBACK_IMAGE_URL]),
            videos: Vec::new(),
            images_3d: Vec::new(),
            description: "Premium formal oxford shoes for office and special occasions. \
                          Classic design meets modern comfort."
                .to_string(),
            features: strings(&[
                "Premium Leather",
                "Classic Design",
                "Comfortable Fit",
                "Durable",
            ]),
            rating: 4.7,
            review_count: 203,
            in_stock: true,
            is_special_offer: true,
            offer_text: Some("OFFICE SPECIAL".to_string()),
        },
        Product {
            id: "4".to_string(),
            name: "Casual Canvas Sneakers".to_string(),
            brand: "UrbanStyle".to_string(),
            category: "Casual".to_string(),
            price: 1599.0,
            original_price: Some(2299.0),
            discount: Some(30),
            sizes: strings(&["6", "7", "8", "9", "10", "11"]),
            colors: strings(&["White", "Navy", "Grey"]),
            images: strings(&[FALLBACK_IMAGE_URL]),
            videos: Vec::new(),
            images_3d: Vec::new(),
            description: "Trendy canvas sneakers perfect for everyday wear. \
                          Comfortable and stylish."
                .to_string(),
            features: strings(&[
                "Canvas Material",
                "Rubber Sole",
                "Trendy Design",
                "Comfortable",
            ]),
            rating: 4.1,
            review_count: 156,
            in_stock: true,
            is_special_offer: false,
            offer_text: None,
        },
        Product {
            id: "5".to_string(),
            name: "Traditional Kolhapuri Chappals".to_string(),
            brand: "Heritage Craft".to_string(),
            category: "Traditional".to_string(),
            price: 899.0,
            original_price: Some(1299.0),
            discount: Some(31),
            sizes: strings(&["6", "7", "8", "9", "10"]),
            colors: strings(&["Natural", "Brown", "Black"]),
            images: strings(&[FALLBACK_IMAGE_URL]),
            videos: Vec::new(),
            images_3d: Vec::new(),
            description: "Authentic Kolhapuri chappals made by local artisans. \
                          Traditional craftsmanship at its finest."
                .to_string(),
            features: strings(&[
                "Handmade",
                "Natural Leather",
                "Traditional Design",
                "Artisan Crafted",
            ]),
            rating: 4.4,
            review_count: 98,
            in_stock: true,
            is_special_offer: true,
            offer_text: Some("HERITAGE SALE".to_string()),
        },
        Product {
            id: "6".to_string(),
            name: "Hiking Boots".to_string(),
            brand: "Adventure Pro".to_string(),
            category: "Sports".to_string(),
            price: 4299.0,
            original_price: Some(5999.0),
            discount: Some(28),
            sizes: strings(&["7", "8", "9", "10", "11", "12"]),
            colors: strings(&["Brown", "Black", "Olive"]),
            images: strings(&[FALLBACK_IMAGE_URL]),
            videos: Vec::new(),
            images_3d: Vec::new(),
            description: "Durable hiking boots for outdoor adventures. \
                          Built to withstand tough terrains."
                .to_string(),
            features: strings(&[
                "Waterproof",
                "High Ankle Support",
                "Grip Sole",
                "Durable",
            ]),
            rating: 4.6,
            review_count: 74,
            in_stock: true,
            is_special_offer: false,
            offer_text: None,
        },
    ]
}
