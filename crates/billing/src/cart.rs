use serde::{Deserialize, Serialize};

use uvpos_core::{DomainResult, ProductId, ValueObject};
use uvpos_catalog::Product;

use crate::totals::Totals;

/// Cart line: product fields captured by value at add-to-cart time.
///
/// The copy is a correctness requirement, not an optimization: issued
/// invoices must not change when the catalog is edited later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    /// Price in whole currency units (rupees).
    pub price: u64,
    pub category: String,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub qty: u32,
}

impl ValueObject for CartLine {}

impl CartLine {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            unit: product.unit.clone(),
            image: product.image.clone(),
            qty: 1,
        }
    }

    pub fn line_total(&self) -> u64 {
        self.price.saturating_mul(self.qty as u64)
    }
}

/// In-memory cart for one billing session.
///
/// Invariant: at most one line per distinct product id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines (the cart badge count).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| l.qty as u64).sum()
    }

    /// Add one unit of the product: bump the existing line's qty, or append
    /// a new line with qty 1, snapshotting the product fields by value.
    pub fn add_line(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => line.qty += 1,
            None => self.lines.push(CartLine::from_product(product)),
        }
    }

    /// Set a line's quantity exactly (not incremental). Zero removes the
    /// line; an unknown id is a silent no-op.
    pub fn set_qty(&mut self, id: ProductId, qty: u32) {
        if qty == 0 {
            self.remove_line(id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == id) {
            line.qty = qty;
        }
    }

    /// Remove the line if present; silent no-op otherwise.
    pub fn remove_line(&mut self, id: ProductId) {
        self.lines.retain(|l| l.product_id != id);
    }

    /// Derive subtotal / tax / total from the current lines.
    pub fn totals(&self) -> DomainResult<Totals> {
        Totals::compute(&self.lines)
    }
}
