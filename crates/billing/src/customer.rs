use serde::{Deserialize, Serialize};

use uvpos_core::ValueObject;

/// Name recorded when the customer field is left blank at checkout.
pub const WALK_IN_CUSTOMER: &str = "Walk-in Customer";

/// Customer details captured at checkout and frozen into the invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ValueObject for Customer {}

impl Customer {
    /// Normalize raw form input: a blank name becomes the walk-in
    /// placeholder, a blank phone becomes `None`.
    pub fn new(name: impl Into<String>, phone: Option<String>) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            WALK_IN_CUSTOMER.to_string()
        } else {
            name
        };

        let phone = phone.filter(|p| !p.trim().is_empty());

        Self { name, phone }
    }

    pub fn walk_in() -> Self {
        Self {
            name: WALK_IN_CUSTOMER.to_string(),
            phone: None,
        }
    }
}

impl Default for Customer {
    fn default() -> Self {
        Self::walk_in()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_defaults_to_walk_in() {
        let customer = Customer::new("  ", None);
        assert_eq!(customer.name, WALK_IN_CUSTOMER);
    }

    #[test]
    fn blank_phone_normalizes_to_none() {
        let customer = Customer::new("Muthu", Some("   ".to_string()));
        assert_eq!(customer.phone, None);

        let customer = Customer::new("Muthu", Some("+91 98765 43210".to_string()));
        assert_eq!(customer.phone.as_deref(), Some("+91 98765 43210"));
    }
}
