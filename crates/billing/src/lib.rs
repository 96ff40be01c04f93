//! `uvpos-billing` — cart and totals for one billing session.
//!
//! A cart holds snapshot-by-value lines against the catalog snapshot its
//! session was given, and derives subtotal / GST / total on demand. Checkout
//! orchestration (counter reservation, persistence) lives in `uvpos-store`.

pub mod cart;
pub mod customer;
pub mod totals;

pub use cart::{Cart, CartLine};
pub use customer::{Customer, WALK_IN_CUSTOMER};
pub use totals::{Totals, GST_RATE_PERCENT};
