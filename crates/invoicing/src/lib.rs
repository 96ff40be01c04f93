//! `uvpos-invoicing` — the immutable invoice record and its export contract.
//!
//! An invoice is issued exactly once per checkout and never changes
//! afterwards. This crate owns the record itself, the fixed seller identity
//! printed on documents, and the guarded hand-off to the external
//! document-export collaborator. Visual layout is a presentation concern
//! and lives elsewhere.

pub mod export;
pub mod identity;
pub mod invoice;

pub use export::{
    DocumentExporter, ExportError, ExportOptions, ExportService, ExportedDocument, PageSize,
    suggested_filename,
};
pub use identity::{BUSINESS, BusinessIdentity};
pub use invoice::Invoice;
