//! ValueCatalog - the ordered, immutable set of candidate core values.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{fixtures, CoreValue};
use crate::domain::foundation::{DomainError, ErrorCode, ValueId};

static STANDARD_CATALOG: Lazy<ValueCatalog> = Lazy::new(|| {
    ValueCatalog::new(fixtures::core_values()).expect("built-in value catalog must be valid")
});

/// Ordered catalog of core values.
///
/// Catalog order is significant: the scoring engine breaks score ties by it,
/// so the catalog is a sequence with an id index on the side, never a bare map.
#[derive(Debug, Clone)]
pub struct ValueCatalog {
    values: Vec<CoreValue>,
    index: HashMap<ValueId, usize>,
}

impl ValueCatalog {
    /// Builds a catalog, rejecting duplicate ids.
    ///
    /// # Errors
    /// - `DuplicateValue` if two values share an id
    pub fn new(values: Vec<CoreValue>) -> Result<Self, DomainError> {
        let mut index = HashMap::with_capacity(values.len());

        for (position, value) in values.iter().enumerate() {
            if index.insert(value.id.clone(), position).is_some() {
                return Err(DomainError::new(
                    ErrorCode::DuplicateValue,
                    format!("Value '{}' appears more than once in the catalog", value.id),
                )
                .with_detail("value_id", value.id.as_str()));
            }
        }

        Ok(Self { values, index })
    }

    /// The twelve built-in values, shared process-wide.
    pub fn standard() -> &'static ValueCatalog {
        &STANDARD_CATALOG
    }

    /// All values in catalog order.
    pub fn all_values(&self) -> &[CoreValue] {
        &self.values
    }

    /// Looks up a value by id.
    ///
    /// # Errors
    /// - `ValueNotFound` if the id is not in the catalog
    pub fn value(&self, id: &ValueId) -> Result<&CoreValue, DomainError> {
        self.position(id)
            .map(|position| &self.values[position])
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ValueNotFound,
                    format!("Value '{}' not found", id),
                )
                .with_detail("value_id", id.as_str())
            })
    }

    /// Catalog position of a value, used as the tie-break key.
    pub fn position(&self, id: &ValueId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &ValueId) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(id: &str) -> CoreValue {
        CoreValue::new(id, id.to_uppercase(), "star", "").unwrap()
    }

    #[test]
    fn standard_catalog_has_twelve_values_in_declared_order() {
        let catalog = ValueCatalog::standard();
        let ids: Vec<&str> = catalog.all_values().iter().map(|v| v.id.as_str()).collect();

        assert_eq!(
            ids,
            vec![
                "fairness",
                "freedom",
                "security",
                "community",
                "responsibility",
                "respect",
                "truth",
                "opportunity",
                "tradition",
                "compassion",
                "stewardship",
                "voice",
            ]
        );
    }

    #[test]
    fn value_lookup_returns_display_metadata() {
        let catalog = ValueCatalog::standard();
        let security = catalog.value(&ValueId::from("security")).unwrap();

        assert_eq!(security.name, "Safety & Security");
        assert_eq!(security.icon, "shield.fill");
    }

    #[test]
    fn value_lookup_fails_with_not_found() {
        let catalog = ValueCatalog::standard();
        let err = catalog.value(&ValueId::from("grit")).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValueNotFound);
        assert_eq!(err.details.get("value_id"), Some(&"grit".to_string()));
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let err = ValueCatalog::new(vec![value("a"), value("b"), value("a")]).unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateValue);
    }

    #[test]
    fn position_follows_declaration_order() {
        let catalog = ValueCatalog::new(vec![value("b"), value("a")]).unwrap();

        assert_eq!(catalog.position(&ValueId::from("b")), Some(0));
        assert_eq!(catalog.position(&ValueId::from("a")), Some(1));
        assert_eq!(catalog.position(&ValueId::from("c")), None);
        assert!(!catalog.contains(&ValueId::from("c")));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = ValueCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }
}
