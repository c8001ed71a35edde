// src/matching/index.rs
// Lookup indexes over the canonical reference dataset

use std::collections::HashMap;

use log::debug;

use super::variants::generate_variants;

/// Identity and variant lookup tables for the reference dataset.
///
/// Immutable after build: a dataset change means building a fresh value and
/// swapping it in wholesale, never patching the old one. Duplicate canonical
/// names are tolerated; on variant-key collisions the last write wins.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    identity_index: HashMap<String, String>,
    variant_index: HashMap<String, String>,
    ordered_names: Vec<String>,
}

impl ReferenceIndex {
    /// Build both indexes from the dataset in one pass. Blank entries are
    /// skipped; declaration order is retained for the scan strategies.
    pub fn build<I, S>(canonical_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut identity_index = HashMap::new();
        let mut variant_index = HashMap::new();
        let mut ordered_names = Vec::new();

        for name in canonical_names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            ordered_names.push(name.to_string());
            identity_index.insert(name.to_lowercase(), name.to_string());
            for variant in generate_variants(name) {
                variant_index.insert(variant.to_lowercase(), name.to_string());
            }
        }

        debug!(
            "Built reference index: {} canonical names, {} variant keys",
            ordered_names.len(),
            variant_index.len()
        );

        ReferenceIndex {
            identity_index,
            variant_index,
            ordered_names,
        }
    }

    pub fn lookup_identity(&self, key: &str) -> Option<&str> {
        self.identity_index.get(key).map(String::as_str)
    }

    pub fn lookup_variant(&self, key: &str) -> Option<&str> {
        self.variant_index.get(key).map(String::as_str)
    }

    /// Canonical names in dataset-declaration order. Scan strategies iterate
    /// this list so partial matches stay deterministic across rebuilds.
    pub fn names(&self) -> &[String] {
        &self.ordered_names
    }

    pub fn len(&self) -> usize {
        self.ordered_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<&'static str> {
        vec![
            "1ª Vara do Trabalho de Campinas",
            "2ª Vara do Trabalho de Campinas",
            "Vara do Trabalho de Itapira",
            "EXE1 - Campinas",
            "EXE2 - Campinas",
            "Centro Judiciário de Métodos Consensuais de Solução de Disputas de Sorocaba",
        ]
    }

    #[test]
    fn test_identity_keys_are_lowercased_names() {
        let index = ReferenceIndex::build(fixture());
        assert_eq!(
            index.lookup_identity("vara do trabalho de itapira"),
            Some("Vara do Trabalho de Itapira")
        );
        assert_eq!(index.lookup_identity("Vara do Trabalho de Itapira"), None);
    }

    #[test]
    fn test_every_variant_points_back_to_its_canonical_name() {
        let index = ReferenceIndex::build(fixture());
        for name in fixture() {
            for variant in crate::matching::variants::generate_variants(name) {
                assert_eq!(
                    index.lookup_variant(&variant.to_lowercase()),
                    Some(name),
                    "variant {:?} of {:?} resolved elsewhere",
                    variant,
                    name
                );
            }
        }
    }

    #[test]
    fn test_rebuild_replaces_the_index_wholesale() {
        let index = ReferenceIndex::build(fixture());
        assert_eq!(
            index.lookup_variant("itapira"),
            Some("Vara do Trabalho de Itapira")
        );

        let without_itapira: Vec<&str> = fixture()
            .into_iter()
            .filter(|n| !n.contains("Itapira"))
            .collect();
        let rebuilt = ReferenceIndex::build(without_itapira);
        assert_eq!(rebuilt.lookup_variant("itapira"), None);
        assert_eq!(rebuilt.len(), index.len() - 1);
    }

    #[test]
    fn test_blank_entries_are_skipped() {
        let index = ReferenceIndex::build(vec!["", "  ", "Vara do Trabalho de Itapira"]);
        assert_eq!(index.len(), 1);
        assert!(!index.is_empty());
        assert!(ReferenceIndex::build(Vec::<&str>::new()).is_empty());
    }
}
