//! Preference Store
//!
//! Owns the durable enabled-card set. The selection policy is pure; the
//! async half talks to `chrome.storage.sync` and degrades silently to a
//! session-local copy when no storage provider is present. Card selection
//! is a convenience, so persistence failure is never surfaced to the user.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::catalog;
use crate::chrome;

thread_local! {
    /// Session-only fallback when the storage provider is unavailable
    static EPHEMERAL: RefCell<Option<Vec<String>>> = const { RefCell::new(None) };
}

/// Turn a persisted selection into the effective enabled set.
///
/// Nothing saved and an explicitly saved empty list are treated the same:
/// both yield the full catalog. First-run convenience inherited from the
/// shipped behavior, not a distinct empty-selection state.
pub fn resolve_enabled(saved: Option<Vec<String>>) -> HashSet<String> {
    match saved {
        Some(names) if !names.is_empty() => names.into_iter().collect(),
        _ => catalog::all_names().into_iter().collect(),
    }
}

/// Full catalog set or empty set; caller persists the result via [`save`]
pub fn set_all(enabled: bool) -> HashSet<String> {
    if enabled {
        catalog::all_names().into_iter().collect()
    } else {
        HashSet::new()
    }
}

/// Selected names in catalog declaration order.
///
/// Used for both persistence and request payloads so round-trips are
/// deterministic. Names no longer in the catalog are dropped.
pub fn ordered_names(selected: &HashSet<String>) -> Vec<String> {
    catalog::CATALOG
        .iter()
        .filter(|c| selected.contains(c.name))
        .map(|c| c.name.to_string())
        .collect()
}

/// Load the enabled-card set, defaulting to all cards on first run
pub async fn load() -> HashSet<String> {
    let saved = match chrome::read_enabled_cards().await {
        Ok(saved) => saved,
        Err(err) => {
            web_sys::console::warn_1(
                &format!("[prefs] storage unavailable, using session copy: {}", err).into(),
            );
            EPHEMERAL.with(|copy| copy.borrow().clone())
        }
    };
    resolve_enabled(saved)
}

/// Persist the selection as a whole-value overwrite of one key
pub async fn save(selected: &HashSet<String>) {
    let names = ordered_names(selected);
    if let Err(err) = chrome::write_enabled_cards(&names).await {
        web_sys::console::warn_1(
            &format!("[prefs] storage unavailable, keeping session copy: {}", err).into(),
        );
        EPHEMERAL.with(|copy| *copy.borrow_mut() = Some(names));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_saved_defaults_to_all() {
        let enabled = resolve_enabled(None);
        assert_eq!(enabled.len(), catalog::CATALOG.len());
    }

    #[test]
    fn test_saved_empty_also_defaults_to_all() {
        // saved-empty and never-saved are deliberately identical
        let enabled = resolve_enabled(Some(Vec::new()));
        assert_eq!(enabled.len(), catalog::CATALOG.len());
    }

    #[test]
    fn test_saved_subset_round_trips() {
        let enabled = resolve_enabled(Some(vec!["UOB EVOL".into(), "Citi Rewards".into()]));
        assert_eq!(enabled.len(), 2);
        assert!(enabled.contains("UOB EVOL"));
        assert!(!enabled.contains("OCBC 365"));
    }

    #[test]
    fn test_set_all() {
        assert_eq!(set_all(true).len(), catalog::CATALOG.len());
        assert!(set_all(false).is_empty());
    }

    #[test]
    fn test_ordered_names_follow_catalog_order() {
        let selected: HashSet<String> =
            ["OCBC 365", "DBS Altitude Visa", "Citi Rewards"].iter().map(|s| s.to_string()).collect();

        let names = ordered_names(&selected);
        assert_eq!(names, vec!["DBS Altitude Visa", "Citi Rewards", "OCBC 365"]);
    }

    #[test]
    fn test_ordered_names_drop_unknown_cards() {
        let selected: HashSet<String> =
            ["UOB EVOL", "Retired Card"].iter().map(|s| s.to_string()).collect();

        assert_eq!(ordered_names(&selected), vec!["UOB EVOL"]);
    }
}
