//! Relationship resolution against a document's `included` side-table.
//!
//! References are always matched on the `(type, id)` pair: ids are only
//! unique within a type. A reference that matches nothing resolves to
//! "absent", never to an error.

use drupal_client::{Resource, ResourceIdentifier};
use std::collections::HashMap;

/// Index over a document's included resources, keyed by type then id.
///
/// Built once per document and shared by every normalizer call. When the
/// same `(type, id)` appears twice the first entry wins, which is what a
/// linear scan over the list would return.
#[derive(Debug, Default)]
pub struct Included<'a> {
    by_type: HashMap<&'a str, HashMap<&'a str, &'a Resource>>,
    len: usize,
}

impl<'a> Included<'a> {
    pub fn new(resources: &'a [Resource]) -> Self {
        let mut by_type: HashMap<&'a str, HashMap<&'a str, &'a Resource>> = HashMap::new();
        for resource in resources {
            by_type
                .entry(resource.kind.as_str())
                .or_default()
                .entry(resource.id.as_str())
                .or_insert(resource);
        }
        Self {
            by_type,
            len: resources.len(),
        }
    }

    /// An empty side-table, for documents without `included`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up the resource a reference points at.
    pub fn get(&self, target: &ResourceIdentifier) -> Option<&'a Resource> {
        self.by_type
            .get(target.kind.as_str())
            .and_then(|by_id| by_id.get(target.id.as_str()))
            .copied()
    }

    /// Number of resources the index was built from.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Resolve a single-valued relationship.
///
/// Returns `None` when the relationship is unset or its target is not in
/// `included`. On a multi-valued relationship the first reference is used.
pub fn resolve<'a>(
    resource: &Resource,
    relationship: &str,
    included: &Included<'a>,
) -> Option<&'a Resource> {
    resource
        .references(relationship)
        .first()
        .and_then(|target| included.get(target))
}

/// Resolve a multi-valued relationship, keeping reference order and
/// skipping references with no match.
pub fn resolve_many<'a>(
    resource: &Resource,
    relationship: &str,
    included: &Included<'a>,
) -> Vec<&'a Resource> {
    resource
        .references(relationship)
        .into_iter()
        .filter_map(|target| included.get(target))
        .collect()
}

/// Linear-scan lookup of a reference in an included list.
pub fn find_included<'a>(included: &'a [Resource], target: &ResourceIdentifier) -> Option<&'a Resource> {
    included
        .iter()
        .find(|r| r.kind == target.kind && r.id == target.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{file, term};

    fn article_with_tags(tags: &[(&str, &str)]) -> Resource {
        Resource::new("node--article", "a1").with_relationships(
            "field_tags",
            tags.iter()
                .map(|(kind, id)| ResourceIdentifier::new(*kind, *id))
                .collect(),
        )
    }

    #[test]
    fn test_unset_relationship_is_absent() {
        let included = vec![term("taxonomy_term--tags", "t1", "Economy")];
        let index = Included::new(&included);
        let article = Resource::new("node--article", "a1");

        assert!(resolve(&article, "field_image", &index).is_none());
        assert!(resolve_many(&article, "field_tags", &index).is_empty());
    }

    #[test]
    fn test_resolution_requires_matching_type() {
        // Same id, different type: must not match.
        let included = vec![file("shared-id", "/sites/default/files/x.jpg")];
        let index = Included::new(&included);
        let product = Resource::new("node--product", "p1").with_relationship(
            "field_category",
            ResourceIdentifier::new("taxonomy_term--product_categories", "shared-id"),
        );

        assert!(resolve(&product, "field_category", &index).is_none());
    }

    #[test]
    fn test_resolve_many_preserves_order_and_skips_missing() {
        let included = vec![
            term("taxonomy_term--tags", "t2", "Trade"),
            term("taxonomy_term--tags", "t1", "Economy"),
        ];
        let index = Included::new(&included);
        let article = article_with_tags(&[
            ("taxonomy_term--tags", "t1"),
            ("taxonomy_term--tags", "missing"),
            ("taxonomy_term--tags", "t2"),
        ]);

        let names: Vec<_> = resolve_many(&article, "field_tags", &index)
            .into_iter()
            .filter_map(|t| t.attr_str("name"))
            .collect();
        assert_eq!(names, vec!["Economy", "Trade"]);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let included = vec![
            term("taxonomy_term--tags", "t1", "First"),
            term("taxonomy_term--tags", "t1", "Second"),
        ];
        let index = Included::new(&included);
        let target = ResourceIdentifier::new("taxonomy_term--tags", "t1");

        assert_eq!(index.get(&target).and_then(|t| t.attr_str("name")), Some("First"));
        assert_eq!(
            find_included(&included, &target).and_then(|t| t.attr_str("name")),
            Some("First")
        );
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_index_matches_linear_scan() {
        let included = vec![
            term("taxonomy_term--tags", "t1", "Economy"),
            file("t1", "/sites/default/files/a.jpg"),
            term("taxonomy_term--product_categories", "c1", "Clothing"),
        ];
        let index = Included::new(&included);

        let probes = [
            ResourceIdentifier::new("taxonomy_term--tags", "t1"),
            ResourceIdentifier::new("file--file", "t1"),
            ResourceIdentifier::new("taxonomy_term--product_categories", "c1"),
            ResourceIdentifier::new("taxonomy_term--tags", "c1"),
            ResourceIdentifier::new("user--user", "u1"),
        ];
        for probe in &probes {
            assert_eq!(
                index.get(probe).map(|r| r as *const Resource),
                find_included(&included, probe).map(|r| r as *const Resource),
                "mismatch for {:?}",
                probe
            );
        }
    }

    #[test]
    fn test_empty_index() {
        let index = Included::empty();
        assert!(index.is_empty());
        assert!(index
            .get(&ResourceIdentifier::new("file--file", "f1"))
            .is_none());
    }
}
