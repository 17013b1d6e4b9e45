//! The launch gate.
//!
//! Consulted once per open attempt, never for windows that are already
//! open. Ownership itself lives in the session; this module only defines
//! the predicate and the redirect target for denials.

use std::collections::BTreeSet;

use crate::catalog::{AppId, CatalogEntry};

/// Where a denied launch lands instead: the Store, so the user can buy the
/// missing entry. The Store itself is a required catalog entry, so the
/// redirect can never be denied in turn.
pub const FALLBACK_APP: AppId = AppId::Store;

/// Whether a catalog entry may be launched given the purchased-product set.
/// Products are keyed by the entry title.
pub fn unlocked(entry: &CatalogEntry, owned: &BTreeSet<String>) -> bool {
    entry.required || owned.contains(entry.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn required_entries_ignore_ownership() {
        let owned = BTreeSet::new();
        assert!(unlocked(catalog::entry(AppId::Console), &owned));
        assert!(unlocked(catalog::entry(AppId::Store), &owned));
    }

    #[test]
    fn optional_entries_need_a_purchase() {
        let mut owned = BTreeSet::new();
        let cracker = catalog::entry(AppId::Cracker);
        assert!(!unlocked(cracker, &owned));
        owned.insert("Cracker".to_string());
        assert!(unlocked(cracker, &owned));
    }

    #[test]
    fn fallback_is_never_gated() {
        assert!(catalog::entry(FALLBACK_APP).required);
    }
}
