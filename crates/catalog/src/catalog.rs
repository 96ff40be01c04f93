use serde::{Deserialize, Serialize};

use uvpos_core::{DomainResult, ProductId};

use crate::product::{Product, ProductDraft, ProductPatch};

/// Ordered product collection with sequential id assignment.
///
/// Serializes transparently as the JSON array of products, which is exactly
/// the shape the state store persists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Products in insertion order. Never fails.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Validate the draft, assign `max(existing ids, 0) + 1`, and append.
    pub fn add(&mut self, draft: ProductDraft) -> DomainResult<Product> {
        draft.validate()?;

        let product = draft.into_product(self.next_id());
        self.products.push(product.clone());
        Ok(product)
    }

    /// Merge patch fields into the matching product.
    ///
    /// Returns whether a product matched; an unknown id is a silent no-op.
    pub fn update(&mut self, id: ProductId, patch: ProductPatch) -> bool {
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                patch.apply(product);
                true
            }
            None => false,
        }
    }

    /// Remove the matching product. Returns whether anything was removed.
    pub fn delete(&mut self, id: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() != before
    }

    /// Distinct category labels in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    /// Case-insensitive name substring match, optionally narrowed to a category.
    pub fn filter(&self, query: &str, category: Option<&str>) -> Vec<&Product> {
        let query = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .filter(|p| p.name.to_lowercase().contains(&query))
            .collect()
    }

    fn next_id(&self) -> ProductId {
        let max = self.products.iter().map(|p| p.id.value()).max().unwrap_or(0);
        ProductId::new(max + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uvpos_core::DomainError;

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price: 100,
            category: "Oil".to_string(),
            unit: "500ml".to_string(),
            image: None,
        }
    }

    #[test]
    fn add_assigns_one_on_empty_catalog() {
        let mut catalog = Catalog::new();
        let product = catalog.add(draft("Sesame Oil (Gingelly)")).unwrap();
        assert_eq!(product.id, ProductId::new(1));
    }

    #[test]
    fn add_assigns_max_plus_one() {
        let mut catalog = crate::seed::default_catalog();
        let product = catalog.add(draft("Mustard Oil")).unwrap();
        assert_eq!(product.id, ProductId::new(13));
        assert_eq!(catalog.list().last(), Some(&product));
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let mut catalog = Catalog::new();
        catalog.add(draft("A")).unwrap();
        let b = catalog.add(draft("B")).unwrap().id;
        assert_eq!(b, ProductId::new(2));

        assert!(catalog.delete(b));
        let c = catalog.add(draft("C")).unwrap().id;
        assert_eq!(c, ProductId::new(3));
    }

    #[test]
    fn add_rejects_invalid_draft() {
        let mut catalog = Catalog::new();
        let err = catalog.add(draft("  ")).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error"),
        }
        assert!(catalog.is_empty());
    }

    #[test]
    fn update_on_unknown_id_leaves_catalog_unchanged() {
        let mut catalog = crate::seed::default_catalog();
        let before = catalog.clone();

        let patch = ProductPatch {
            price: Some(999),
            ..ProductPatch::default()
        };
        assert!(!catalog.update(ProductId::new(99), patch));
        assert_eq!(catalog, before);
    }

    #[test]
    fn update_merges_into_matching_product() {
        let mut catalog = crate::seed::default_catalog();
        let patch = ProductPatch {
            name: Some("Cold Pressed Coconut Oil — Premium".to_string()),
            price: Some(340),
            ..ProductPatch::default()
        };

        assert!(catalog.update(ProductId::new(1), patch));
        let product = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(product.name, "Cold Pressed Coconut Oil — Premium");
        assert_eq!(product.price, 340);
        assert_eq!(product.unit, "500ml");
    }

    #[test]
    fn delete_on_unknown_id_is_a_no_op() {
        let mut catalog = crate::seed::default_catalog();
        let before = catalog.clone();
        assert!(!catalog.delete(ProductId::new(99)));
        assert_eq!(catalog, before);
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let catalog = crate::seed::default_catalog();
        assert_eq!(catalog.categories(), vec!["Oil", "Lubricant", "Agricultural"]);
    }

    #[test]
    fn filter_matches_name_case_insensitively() {
        let catalog = crate::seed::default_catalog();
        let hits = catalog.filter("oil", None);
        assert!(hits.iter().all(|p| p.name.to_lowercase().contains("oil")));
        assert!(hits.len() >= 5);

        let lubricants = catalog.filter("", Some("Lubricant"));
        assert_eq!(lubricants.len(), 4);
        assert!(lubricants.iter().all(|p| p.category == "Lubricant"));
    }

    #[test]
    fn catalog_round_trips_as_json_array() {
        let catalog = crate::seed::default_catalog();
        let payload = serde_json::to_string(&catalog).unwrap();
        assert!(payload.starts_with('['));

        let reloaded: Catalog = serde_json::from_str(&payload).unwrap();
        assert_eq!(reloaded, catalog);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the assigned id is always `max(previous ids, 0) + 1`.
            #[test]
            fn assigned_id_is_always_max_plus_one(names in proptest::collection::vec("[A-Za-z][A-Za-z ]{0,20}", 1..20)) {
                let mut catalog = Catalog::new();
                for name in names {
                    let max = catalog.list().iter().map(|p| p.id.value()).max().unwrap_or(0);
                    let id = catalog.add(draft(&name)).unwrap().id;
                    prop_assert_eq!(id.value(), max + 1);
                }
            }

            /// Property: interleaved deletes never cause an id to be reused.
            #[test]
            fn ids_stay_unique_under_add_delete(ops in proptest::collection::vec(any::<bool>(), 1..40)) {
                let mut catalog = Catalog::new();
                let mut issued: Vec<u64> = Vec::new();

                for (i, add) in ops.into_iter().enumerate() {
                    if add || catalog.is_empty() {
                        let id = catalog.add(draft(&format!("P{i}"))).unwrap().id.value();
                        prop_assert!(!issued.contains(&id), "id {} reused", id);
                        issued.push(id);
                    } else {
                        let victim = catalog.list()[0].id;
                        catalog.delete(victim);
                    }
                }
            }
        }
    }
}
