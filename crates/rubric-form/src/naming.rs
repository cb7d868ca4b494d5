//! Identifier Allocation
//!
//! Items in one sibling set get the smallest non-negative integer not
//! already used by a sibling, stored as a string.

use std::collections::BTreeSet;

/// Smallest non-negative integer (as a string) not present in `taken`.
///
/// With N taken names at most N distinct values are used, so some index
/// in `0..=N` is always free and the scan terminates.
pub fn create_unique_name<S: AsRef<str>>(taken: &[S]) -> String {
    let bound = taken.len() + 1;
    (0..bound)
        .map(|index| index.to_string())
        .find(|candidate| !taken.iter().any(|name| name.as_ref() == candidate))
        .unwrap_or_else(|| bound.to_string())
}

/// Per-parent registry of identifiers in use by one sibling set.
///
/// Lives in the parent's model (a Container) instead of being derived
/// from whatever happens to be rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiblingNames {
    taken: BTreeSet<String>,
}

impl SiblingNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the smallest free identifier and record it
    pub fn claim(&mut self) -> String {
        let taken: Vec<&str> = self.taken.iter().map(String::as_str).collect();
        let name = create_unique_name(&taken);
        self.taken.insert(name.clone());
        name
    }

    /// Record an identifier assigned elsewhere (page load, server).
    /// Returns false if a sibling already holds it.
    pub fn reserve(&mut self, name: &str) -> bool {
        self.taken.insert(name.to_string())
    }

    /// Free an identifier when its item is removed
    pub fn release(&mut self, name: &str) -> bool {
        self.taken.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.taken.contains(name)
    }

    pub fn len(&self) -> usize {
        self.taken.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_siblings_get_zero() {
        let none: [&str; 0] = [];
        assert_eq!(create_unique_name(&none), "0");
    }

    #[test]
    fn test_single_gap_is_returned() {
        for n in 1..8usize {
            for gap in 0..n {
                let taken: Vec<String> = (0..n)
                    .filter(|i| *i != gap)
                    .map(|i| i.to_string())
                    .collect();
                assert_eq!(create_unique_name(&taken), gap.to_string());
            }
        }
    }

    #[test]
    fn test_full_set_returns_len() {
        for n in 0..8usize {
            let taken: Vec<String> = (0..n).map(|i| i.to_string()).collect();
            assert_eq!(create_unique_name(&taken), n.to_string());
        }
    }

    #[test]
    fn test_non_numeric_names_do_not_block() {
        // Server-assigned names need not be integers
        let taken = ["abc", "0", "xyz"];
        assert_eq!(create_unique_name(&taken), "1");
    }

    #[test]
    fn test_claim_release_reuses_gap() {
        let mut names = SiblingNames::new();
        assert_eq!(names.claim(), "0");
        assert_eq!(names.claim(), "1");
        assert!(names.release("0"));
        assert_eq!(names.claim(), "0");
        assert_eq!(names.claim(), "2");
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_reserve_rejects_duplicate() {
        let mut names = SiblingNames::new();
        assert!(names.reserve("1"));
        assert!(!names.reserve("1"));
        assert_eq!(names.claim(), "0");
        assert_eq!(names.claim(), "2");
    }
}
