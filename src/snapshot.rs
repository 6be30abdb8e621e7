use serde::{Deserialize, Serialize};

use crate::domain::tab::{Tab, TabId};
use crate::error::{Result, TabError};
use crate::store::TabStore;

/// Serializable picture of a store: the ordered tab descriptors plus the
/// focused id. The store itself never touches disk; hosts decide where a
/// snapshot goes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub tabs: Vec<Tab>,
    #[serde(default)]
    pub active: Option<TabId>,
}

impl StoreSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl TabStore {
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            tabs: self.tabs().to_vec(),
            active: self.active().cloned(),
        }
    }

    /// Rebuild a store from a snapshot, re-checking the store invariants:
    /// ids must be unique and the focused id, if any, must name a tab.
    /// Subscribers are not carried over and nothing is emitted.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Result<TabStore> {
        for (i, tab) in snapshot.tabs.iter().enumerate() {
            if snapshot.tabs[..i].iter().any(|t| t.id == tab.id) {
                return Err(TabError::Snapshot(format!("duplicate tab id '{}'", tab.id)));
            }
        }
        if let Some(active) = &snapshot.active
            && !snapshot.tabs.iter().any(|t| &t.id == active)
        {
            return Err(TabError::Snapshot(format!(
                "active id '{}' names no tab",
                active
            )));
        }

        let mut store = TabStore::new();
        for tab in snapshot.tabs {
            store.add(tab);
        }
        if let Some(active) = &snapshot.active {
            store.set_active(active);
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_round_trip() {
        let mut store = TabStore::new();
        store.add(Tab::with_path("a", "A", "path/A"));
        store.add(Tab::new("b", "B"));
        store.set_active(&TabId::from("b"));

        let json = store.snapshot().to_json().unwrap();
        let restored = TabStore::from_snapshot(StoreSnapshot::from_json(&json).unwrap()).unwrap();

        assert_eq!(restored.tabs(), store.tabs());
        assert_eq!(restored.active(), Some(&TabId::from("b")));
    }

    #[test]
    fn test_restore_rejects_duplicate_ids() {
        let snapshot = StoreSnapshot {
            tabs: vec![Tab::new("a", "A"), Tab::new("a", "A again")],
            active: None,
        };
        let err = TabStore::from_snapshot(snapshot).unwrap_err();
        assert!(matches!(err, TabError::Snapshot(_)));
        assert!(err.to_string().contains("duplicate tab id"));
    }

    #[test]
    fn test_restore_rejects_dangling_active() {
        let snapshot = StoreSnapshot {
            tabs: vec![Tab::new("a", "A")],
            active: Some(TabId::from("gone")),
        };
        let err = TabStore::from_snapshot(snapshot).unwrap_err();
        assert!(err.to_string().contains("names no tab"));
    }

    #[test]
    fn test_from_json_propagates_parse_error() {
        let err = StoreSnapshot::from_json("{not json").unwrap_err();
        assert!(matches!(err, TabError::Json(_)));
    }
}
