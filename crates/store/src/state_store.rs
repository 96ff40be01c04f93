//! Key-value state abstraction over the three durable records.
//!
//! Every record is a JSON payload under a fixed key. Backends implement the
//! raw `get`/`put` pair; the typed load/save methods are provided on top so
//! every backend codecs identically.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use uvpos_catalog::Catalog;
use uvpos_core::InvoiceNumber;
use uvpos_invoicing::Invoice;

/// Storage keys for the durable records.
pub mod keys {
    pub const CATALOG: &str = "uv_products";
    pub const INVOICE_COUNTER: &str = "uv_invoice_number";
    pub const CURRENT_INVOICE: &str = "uv_current_invoice";
}

/// State persistence error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Backend failure (IO, unavailable directory, ...).
    #[error("storage failure: {0}")]
    Storage(String),

    /// A payload could not be encoded, or a persisted payload is corrupt.
    #[error("codec failure for `{key}`: {message}")]
    Codec { key: &'static str, message: String },
}

/// Durable key-value store for the application state.
///
/// Writes are write-through: when `put` returns, the payload is durable, so
/// a crash immediately after a mutation still observes it on next load.
pub trait StateStore: Send + Sync {
    /// Raw payload under `key`, or `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Persist `payload` under `key`, replacing any previous value.
    fn put(&self, key: &str, payload: &str) -> Result<(), StoreError>;

    fn load_catalog(&self) -> Result<Option<Catalog>, StoreError> {
        decode(keys::CATALOG, self.get(keys::CATALOG)?)
    }

    fn save_catalog(&self, catalog: &Catalog) -> Result<(), StoreError> {
        self.put(keys::CATALOG, &encode(keys::CATALOG, catalog)?)
    }

    fn load_invoice_counter(&self) -> Result<Option<InvoiceNumber>, StoreError> {
        decode(keys::INVOICE_COUNTER, self.get(keys::INVOICE_COUNTER)?)
    }

    fn save_invoice_counter(&self, counter: InvoiceNumber) -> Result<(), StoreError> {
        self.put(keys::INVOICE_COUNTER, &encode(keys::INVOICE_COUNTER, &counter)?)
    }

    fn load_current_invoice(&self) -> Result<Option<Invoice>, StoreError> {
        decode(keys::CURRENT_INVOICE, self.get(keys::CURRENT_INVOICE)?)
    }

    fn save_current_invoice(&self, invoice: &Invoice) -> Result<(), StoreError> {
        self.put(keys::CURRENT_INVOICE, &encode(keys::CURRENT_INVOICE, invoice)?)
    }
}

fn encode<T: Serialize>(key: &'static str, value: &T) -> Result<String, StoreError> {
    serde_json::to_string(value).map_err(|err| StoreError::Codec {
        key,
        message: err.to_string(),
    })
}

fn decode<T: DeserializeOwned>(
    key: &'static str,
    payload: Option<String>,
) -> Result<Option<T>, StoreError> {
    match payload {
        None => Ok(None),
        Some(payload) => serde_json::from_str(&payload)
            .map(Some)
            .map_err(|err| StoreError::Codec {
                key,
                message: err.to_string(),
            }),
    }
}
