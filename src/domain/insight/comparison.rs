//! Pair mode: values two people have in common.

use crate::domain::catalog::{CoreValue, ValueCatalog};
use crate::domain::foundation::ValueId;

/// Values present in both top-value lists, in catalog order.
///
/// Ids unknown to the catalog are ignored.
pub fn find_shared_values(
    catalog: &ValueCatalog,
    first: &[ValueId],
    second: &[ValueId],
) -> Vec<CoreValue> {
    catalog
        .all_values()
        .iter()
        .filter(|value| first.contains(&value.id) && second.contains(&value.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(ids: &[&str]) -> Vec<ValueId> {
        ids.iter().map(|id| ValueId::from(*id)).collect()
    }

    #[test]
    fn shared_values_follow_catalog_order() {
        let catalog = ValueCatalog::standard();
        let shared = find_shared_values(
            catalog,
            &ids(&["voice", "truth", "fairness"]),
            &ids(&["fairness", "community", "voice"]),
        );

        let names: Vec<&str> = shared.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(names, vec!["fairness", "voice"]);
    }

    #[test]
    fn no_overlap_or_unknown_ids_yield_nothing() {
        let catalog = ValueCatalog::standard();

        assert!(find_shared_values(catalog, &ids(&["truth"]), &ids(&["voice"])).is_empty());
        assert!(find_shared_values(catalog, &ids(&["ghost"]), &ids(&["ghost"])).is_empty());
    }
}
