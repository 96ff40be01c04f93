use serde::{Deserialize, Serialize};

use uvpos_core::{DomainError, DomainResult, ValueObject};

use crate::cart::CartLine;

/// GST rate applied to the cart subtotal.
pub const GST_RATE_PERCENT: u64 = 5;

/// Derived cart totals. Recomputed on demand, never cached.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of `price × qty` over all lines, in whole currency units.
    pub subtotal: u64,
    /// GST, rounded half-up to the nearest whole currency unit.
    pub tax: u64,
    pub total: u64,
}

impl ValueObject for Totals {}

impl Totals {
    /// Compute totals over the given lines with checked arithmetic.
    pub fn compute(lines: &[CartLine]) -> DomainResult<Self> {
        let mut subtotal: u64 = 0;
        for line in lines {
            let line_total = (line.price as u128)
                .checked_mul(line.qty as u128)
                .ok_or_else(|| DomainError::invariant("cart line amount overflow"))?;
            let line_total = u64::try_from(line_total)
                .map_err(|_| DomainError::invariant("cart line amount overflow"))?;
            subtotal = subtotal
                .checked_add(line_total)
                .ok_or_else(|| DomainError::invariant("cart subtotal overflow"))?;
        }

        let tax = gst(subtotal)?;
        let total = subtotal
            .checked_add(tax)
            .ok_or_else(|| DomainError::invariant("cart total overflow"))?;

        Ok(Self { subtotal, tax, total })
    }
}

/// Round-half-up GST in integer arithmetic: `(subtotal × rate + 50) / 100`.
///
/// Half-up and half-even only differ on exact `.5` boundaries; half-up
/// matches how the billing screen has always rounded.
fn gst(subtotal: u64) -> DomainResult<u64> {
    let scaled = (subtotal as u128) * (GST_RATE_PERCENT as u128) + 50;
    u64::try_from(scaled / 100).map_err(|_| DomainError::invariant("tax overflow"))
}
