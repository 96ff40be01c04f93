//! `uvpos-catalog` — product catalog domain.
//!
//! Owns the `Product` entity and the in-memory collection semantics
//! (sequential id assignment, merge-by-id updates, category listing).
//! Persistence lives in `uvpos-store`; this crate is pure state.

pub mod catalog;
pub mod product;
pub mod seed;

pub use catalog::Catalog;
pub use product::{Product, ProductDraft, ProductPatch, DEFAULT_CATEGORY};
