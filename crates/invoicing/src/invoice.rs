use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use uvpos_billing::{CartLine, Customer, Totals};
use uvpos_core::{DomainError, DomainResult, InvoiceNumber};

/// An issued invoice: a frozen snapshot of one checkout.
///
/// Fields are private; the record cannot be mutated after issue. It is
/// persisted as the single "current invoice": the next checkout overwrites
/// it, and no history is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    invoice_number: InvoiceNumber,
    date: NaiveDate,
    customer: Customer,
    items: Vec<CartLine>,
    subtotal: u64,
    tax: u64,
    total: u64,
}

impl Invoice {
    /// Issue an invoice from cart-line snapshots.
    ///
    /// Totals are recomputed here rather than trusted from the caller, so
    /// the persisted record is always internally consistent.
    pub fn issue(
        invoice_number: InvoiceNumber,
        date: NaiveDate,
        customer: Customer,
        items: Vec<CartLine>,
    ) -> DomainResult<Self> {
        if items.is_empty() {
            return Err(DomainError::validation("cannot issue an invoice without items"));
        }

        if items.iter().any(|l| l.qty == 0) {
            return Err(DomainError::validation("invoice item quantity must be positive"));
        }

        let totals = Totals::compute(&items)?;

        Ok(Self {
            invoice_number,
            date,
            customer,
            items,
            subtotal: totals.subtotal,
            tax: totals.tax,
            total: totals.total,
        })
    }

    pub fn invoice_number(&self) -> InvoiceNumber {
        self.invoice_number
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    pub fn subtotal(&self) -> u64 {
        self.subtotal
    }

    pub fn tax(&self) -> u64 {
        self.tax
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn totals(&self) -> Totals {
        Totals {
            subtotal: self.subtotal,
            tax: self.tax,
            total: self.total,
        }
    }

    /// Number as printed on the document, e.g. `UV-1001`.
    pub fn display_number(&self) -> String {
        format!("UV-{}", self.invoice_number)
    }

    /// Long-form date for the document header, e.g. `5 August 2026`.
    pub fn formatted_date(&self) -> String {
        self.date.format("%-d %B %Y").to_string()
    }
}
