//! Default catalog fixture for first run.
//!
//! Twelve products across the shop's three categories. Fixture data, not
//! business logic; replace freely.

use uvpos_core::ProductId;

use crate::catalog::Catalog;
use crate::product::Product;

fn product(id: u64, name: &str, price: u64, category: &str, unit: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price,
        category: category.to_string(),
        unit: unit.to_string(),
        image: Some(format!("https://picsum.photos/400/400?random={id}")),
    }
}

/// The catalog seeded when no durable state exists yet.
pub fn default_catalog() -> Catalog {
    Catalog::from_products(vec![
        product(1, "Cold Pressed Coconut Oil", 320, "Oil", "500ml"),
        product(2, "Wood Pressed Groundnut Oil", 280, "Oil", "500ml"),
        product(3, "Sesame Oil (Gingelly)", 350, "Oil", "500ml"),
        product(4, "Castor Oil — Pure", 220, "Oil", "250ml"),
        product(5, "Neem Oil Concentrate", 180, "Oil", "250ml"),
        product(6, "Premium Engine Lubricant", 850, "Lubricant", "1L"),
        product(7, "Multi-Grade Motor Oil", 720, "Lubricant", "1L"),
        product(8, "Hydraulic Fluid — Grade 68", 950, "Lubricant", "1L"),
        product(9, "Gear Oil — EP 90", 680, "Lubricant", "1L"),
        product(10, "Organic Fertilizer Blend", 450, "Agricultural", "5kg"),
        product(11, "Bio Pesticide Spray", 340, "Agricultural", "500ml"),
        product(12, "Soil Enhancer Granules", 290, "Agricultural", "2kg"),
    ])
}
