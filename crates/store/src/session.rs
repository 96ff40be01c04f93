//! One billing session: a catalog snapshot, a cart, and checkout.
//!
//! The session resolves product ids against the snapshot it was given when
//! it began. A product edited or deleted mid-session keeps its captured
//! fields, which is exactly the snapshot-by-value contract invoices rely on.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use uvpos_billing::{Cart, Customer, Totals};
use uvpos_catalog::Product;
use uvpos_core::{DomainError, DomainResult, ProductId};
use uvpos_invoicing::Invoice;

use crate::catalog_store::{CatalogStore, ServiceError};
use crate::state_store::StateStore;

/// A point-of-sale billing session. Discard it to abandon the cart.
pub struct BillingSession {
    catalog: Arc<CatalogStore>,
    store: Arc<dyn StateStore>,
    products: Vec<Product>,
    cart: Cart,
}

impl BillingSession {
    /// Begin a session against the catalog's current product snapshot.
    pub fn begin(catalog: Arc<CatalogStore>) -> Self {
        let store = catalog.state_store();
        let products = catalog.products();
        Self {
            catalog,
            store,
            products,
            cart: Cart::new(),
        }
    }

    /// The product snapshot this session was given.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of the product to the cart. An id that does not resolve
    /// in the snapshot is a silent no-op.
    pub fn add_line(&mut self, id: ProductId) {
        match self.products.iter().find(|p| p.id == id) {
            Some(product) => self.cart.add_line(product),
            None => tracing::debug!(product = %id, "add for unknown product ignored"),
        }
    }

    pub fn set_qty(&mut self, id: ProductId, qty: u32) {
        self.cart.set_qty(id, qty);
    }

    pub fn remove_line(&mut self, id: ProductId) {
        self.cart.remove_line(id);
    }

    pub fn totals(&self) -> DomainResult<Totals> {
        self.cart.totals()
    }

    /// Checkout with today's date.
    pub fn checkout(&mut self, customer: Customer) -> Result<Invoice, ServiceError> {
        self.checkout_at(customer, Local::now().date_naive())
    }

    /// Checkout: validate, reserve the invoice number, issue the immutable
    /// invoice, persist it as the current invoice, and clear the cart.
    ///
    /// Ordering matters: the empty-cart check runs before the reservation,
    /// so a failed checkout never advances the counter, and a committed one
    /// advances it exactly once.
    pub fn checkout_at(
        &mut self,
        customer: Customer,
        date: NaiveDate,
    ) -> Result<Invoice, ServiceError> {
        if self.cart.is_empty() {
            return Err(DomainError::validation("cannot checkout an empty cart").into());
        }

        let number = self.catalog.next_invoice_number()?;
        let invoice = Invoice::issue(number, date, customer, self.cart.lines().to_vec())?;
        self.store.save_current_invoice(&invoice)?;
        self.cart = Cart::new();

        tracing::info!(
            invoice = %invoice.display_number(),
            total = invoice.total(),
            "checkout committed"
        );
        Ok(invoice)
    }
}

/// The persisted current invoice, or `NotFound` when none exists yet.
///
/// Callers receiving `NotFound` should send the user back to billing rather
/// than render a blank document.
pub fn current_invoice(store: &dyn StateStore) -> Result<Invoice, ServiceError> {
    store
        .load_current_invoice()?
        .ok_or_else(|| DomainError::not_found().into())
}
