//! The built-in modifier catalog
//!
//! 91 ordered entries: the bare seed, single letters and digits on both
//! sides of the seed, and a set of common question and comparison words.
//! Catalog order determines progress reporting and row numbering only.

use crate::types::Modifier;

/// Number of entries in the default catalog
pub const DEFAULT_CATALOG_LEN: usize = 91;

const COMMON_PREFIXES: [&str; 13] = [
    "is", "for", "near", "without", "can", "to", "with", "why", "where", "who", "which", "what",
    "how",
];

const COMMON_SUFFIXES: [&str; 5] = ["vs", "and", "like", "versus", "or"];

/// Build the default modifier catalog.
///
/// Entry order: the empty modifier first (the bare seed gets queried too),
/// then prefixes `a` to `z`, suffixes `a` to `z`, prefixes `0` to `9`,
/// suffixes `0` to `9`, common-word prefixes and common-word suffixes.
pub fn default_catalog() -> Vec<Modifier> {
    let mut catalog = Vec::with_capacity(DEFAULT_CATALOG_LEN);

    catalog.push(Modifier::default());

    for letter in 'a'..='z' {
        catalog.push(Modifier::with_prefix(letter.to_string()));
    }
    for letter in 'a'..='z' {
        catalog.push(Modifier::with_suffix(letter.to_string()));
    }
    for digit in 0..=9u32 {
        catalog.push(Modifier::with_prefix(digit.to_string()));
    }
    for digit in 0..=9u32 {
        catalog.push(Modifier::with_suffix(digit.to_string()));
    }
    for word in COMMON_PREFIXES {
        catalog.push(Modifier::with_prefix(word));
    }
    for word in COMMON_SUFFIXES {
        catalog.push(Modifier::with_suffix(word));
    }

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_len() {
        assert_eq!(default_catalog().len(), DEFAULT_CATALOG_LEN);
    }

    #[test]
    fn test_catalog_order() {
        let catalog = default_catalog();

        // Bare seed first
        assert!(catalog[0].is_noop());

        // Alphabetic prefixes, then alphabetic suffixes
        assert_eq!(catalog[1], Modifier::with_prefix("a"));
        assert_eq!(catalog[26], Modifier::with_prefix("z"));
        assert_eq!(catalog[27], Modifier::with_suffix("a"));
        assert_eq!(catalog[52], Modifier::with_suffix("z"));

        // Numeric prefixes, then numeric suffixes
        assert_eq!(catalog[53], Modifier::with_prefix("0"));
        assert_eq!(catalog[62], Modifier::with_prefix("9"));
        assert_eq!(catalog[63], Modifier::with_suffix("0"));
        assert_eq!(catalog[72], Modifier::with_suffix("9"));

        // Common words close the catalog
        assert_eq!(catalog[73], Modifier::with_prefix("is"));
        assert_eq!(catalog[85], Modifier::with_prefix("how"));
        assert_eq!(catalog[86], Modifier::with_suffix("vs"));
        assert_eq!(catalog[90], Modifier::with_suffix("or"));
    }

    #[test]
    fn test_catalog_variants_are_distinct() {
        let variants: HashSet<String> = default_catalog()
            .iter()
            .map(|modifier| modifier.apply("keyword"))
            .collect();

        assert_eq!(variants.len(), DEFAULT_CATALOG_LEN);
    }

    #[test]
    fn test_only_first_entry_is_noop() {
        let catalog = default_catalog();
        let noop_count = catalog.iter().filter(|modifier| modifier.is_noop()).count();
        assert_eq!(noop_count, 1);
    }
}
