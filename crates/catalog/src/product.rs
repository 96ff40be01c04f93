use serde::{Deserialize, Serialize};

use uvpos_core::{DomainError, DomainResult, Entity, ProductId};

/// Category label preselected by the admin form when none is given.
pub const DEFAULT_CATEGORY: &str = "Oil";

/// Entity: a sellable catalog product.
///
/// Cart lines snapshot these fields by value at add-to-cart time, so later
/// edits or deletes never retroactively change an issued invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in whole currency units (rupees).
    pub price: u64,
    pub category: String,
    /// Free-text quantity descriptor ("500ml", "5kg", ...).
    pub unit: String,
    /// Optional image reference: URI or embedded data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input for creating a product; the catalog assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    /// Price in whole currency units (rupees).
    pub price: u64,
    /// Blank falls back to [`DEFAULT_CATEGORY`].
    pub category: String,
    pub unit: String,
    pub image: Option<String>,
}

impl ProductDraft {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }

        if self.unit.trim().is_empty() {
            return Err(DomainError::validation("product unit cannot be empty"));
        }

        Ok(())
    }

    pub(crate) fn into_product(self, id: ProductId) -> Product {
        let category = if self.category.trim().is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            self.category
        };

        Product {
            id,
            name: self.name,
            price: self.price,
            category,
            unit: self.unit,
            image: self.image,
        }
    }
}

/// Partial fields merged onto an existing product by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<u64>,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub image: Option<String>,
}

impl ProductPatch {
    pub(crate) fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(unit) = self.unit {
            product.unit = unit;
        }
        if let Some(image) = self.image {
            product.image = Some(image);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, unit: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price: 320,
            category: "Oil".to_string(),
            unit: unit.to_string(),
            image: None,
        }
    }

    #[test]
    fn draft_rejects_blank_name() {
        let err = draft("   ", "500ml").validate().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank name"),
        }
    }

    #[test]
    fn draft_rejects_blank_unit() {
        let err = draft("Cold Pressed Coconut Oil", " ").validate().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank unit"),
        }
    }

    #[test]
    fn blank_category_falls_back_to_default() {
        let mut d = draft("Cold Pressed Coconut Oil", "500ml");
        d.category = String::new();
        let product = d.into_product(ProductId::new(1));
        assert_eq!(product.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut product = draft("Cold Pressed Coconut Oil", "500ml").into_product(ProductId::new(1));

        let patch = ProductPatch {
            price: Some(340),
            ..ProductPatch::default()
        };
        patch.apply(&mut product);

        assert_eq!(product.price, 340);
        assert_eq!(product.name, "Cold Pressed Coconut Oil");
        assert_eq!(product.unit, "500ml");
    }
}
