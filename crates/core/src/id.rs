//! Strongly-typed identifiers used across the domain.
//!
//! Both identifiers are plain integers assigned by the catalog store itself:
//! product ids are sequential (`max + 1`), invoice numbers come from a
//! persisted counter. Neither is ever reused.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog product. Positive, assigned sequentially.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

/// Number of an issued invoice. Monotonically increasing, never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceNumber(u64);

macro_rules! impl_u64_newtype {
    ($t:ty) => {
        impl $t {
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            pub const fn value(self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_u64_newtype!(ProductId);
impl_u64_newtype!(InvoiceNumber);

impl InvoiceNumber {
    /// The number that follows this one in the sequence.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_number_next_is_consecutive() {
        let n = InvoiceNumber::new(1001);
        assert_eq!(n.next(), InvoiceNumber::new(1002));
        assert_eq!(n.next().next().value(), 1003);
    }

    #[test]
    fn ids_display_as_plain_integers() {
        assert_eq!(ProductId::new(7).to_string(), "7");
        assert_eq!(InvoiceNumber::new(1001).to_string(), "1001");
    }
}
