//! Catalog store service: the process-wide owner of products and the
//! invoice counter.
//!
//! Opened once at process start from durable storage (seeding defaults on
//! first run) and passed by handle to consumers. Every mutation persists
//! write-through: the working copy is saved before the in-memory state is
//! published, so memory never runs ahead of storage.

use std::sync::{Arc, RwLock};

use thiserror::Error;

use uvpos_catalog::{Catalog, Product, ProductDraft, ProductPatch, seed};
use uvpos_core::{DomainError, InvoiceNumber, ProductId};

use crate::state_store::{StateStore, StoreError};

/// First invoice number issued when no counter has been persisted yet.
pub const INVOICE_COUNTER_SEED: InvoiceNumber = InvoiceNumber::new(1001);

/// Errors surfaced by the store-backed services.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

struct State {
    catalog: Catalog,
    counter: InvoiceNumber,
}

/// Handle to the durable catalog and invoice counter.
pub struct CatalogStore {
    store: Arc<dyn StateStore>,
    state: RwLock<State>,
}

impl CatalogStore {
    /// Load state from the store, seeding the default catalog and the
    /// counter on first run (and persisting both immediately).
    pub fn open(store: Arc<dyn StateStore>) -> Result<Self, StoreError> {
        let catalog = match store.load_catalog()? {
            Some(catalog) => catalog,
            None => {
                let seeded = seed::default_catalog();
                store.save_catalog(&seeded)?;
                tracing::info!(products = seeded.len(), "seeded default catalog on first run");
                seeded
            }
        };

        let counter = match store.load_invoice_counter()? {
            Some(counter) => counter,
            None => {
                store.save_invoice_counter(INVOICE_COUNTER_SEED)?;
                INVOICE_COUNTER_SEED
            }
        };

        Ok(Self {
            store,
            state: RwLock::new(State { catalog, counter }),
        })
    }

    pub(crate) fn state_store(&self) -> Arc<dyn StateStore> {
        Arc::clone(&self.store)
    }

    /// Snapshot of the catalog in insertion order. Never fails.
    pub fn products(&self) -> Vec<Product> {
        self.state.read().unwrap().catalog.list().to_vec()
    }

    /// Snapshot of the whole catalog (for category listing and filtering).
    pub fn catalog(&self) -> Catalog {
        self.state.read().unwrap().catalog.clone()
    }

    pub fn get_product(&self, id: ProductId) -> Option<Product> {
        self.state.read().unwrap().catalog.get(id).cloned()
    }

    /// The number the next checkout will receive (peek, no reservation).
    pub fn invoice_counter(&self) -> InvoiceNumber {
        self.state.read().unwrap().counter
    }

    /// Validate, assign the next sequential id, append, persist.
    pub fn add_product(&self, draft: ProductDraft) -> Result<Product, ServiceError> {
        let mut state = self.state.write().unwrap();

        let mut next = state.catalog.clone();
        let product = next.add(draft)?;
        self.store.save_catalog(&next)?;
        state.catalog = next;

        tracing::debug!(product = %product.id, "product added to catalog");
        Ok(product)
    }

    /// Merge fields into the matching product and persist. An unknown id is
    /// a silent no-op and writes nothing.
    pub fn update_product(&self, id: ProductId, patch: ProductPatch) -> Result<(), ServiceError> {
        let mut state = self.state.write().unwrap();

        let mut next = state.catalog.clone();
        if !next.update(id, patch) {
            tracing::debug!(product = %id, "update for unknown product ignored");
            return Ok(());
        }
        self.store.save_catalog(&next)?;
        state.catalog = next;

        Ok(())
    }

    /// Remove the matching product and persist. An unknown id is a silent
    /// no-op and writes nothing.
    pub fn delete_product(&self, id: ProductId) -> Result<(), ServiceError> {
        let mut state = self.state.write().unwrap();

        let mut next = state.catalog.clone();
        if !next.delete(id) {
            tracing::debug!(product = %id, "delete for unknown product ignored");
            return Ok(());
        }
        self.store.save_catalog(&next)?;
        state.catalog = next;

        Ok(())
    }

    /// Reserve the next invoice number: returns the current value, then
    /// increments and persists the counter before returning.
    ///
    /// The write lock makes the read-increment-write sequence single-owner;
    /// two in-process calls can never observe the same value. The counter
    /// only ever moves forward.
    pub fn next_invoice_number(&self) -> Result<InvoiceNumber, StoreError> {
        let mut state = self.state.write().unwrap();

        let current = state.counter;
        let next = current.next();
        self.store.save_invoice_counter(next)?;
        state.counter = next;

        Ok(current)
    }
}
