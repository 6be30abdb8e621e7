use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::path_ops::title_from_path;

/// Identifier of an open tab. Unique within a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub String);

impl TabId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabId {
    fn from(s: &str) -> Self {
        TabId(s.to_string())
    }
}

impl From<String> for TabId {
    fn from(s: String) -> Self {
        TabId(s)
    }
}

/// One open tab: identity, display title, and an optional backing path.
/// Identity is deliberately decoupled from the path; renaming a tab never
/// changes its id.
///
/// `meta` carries host-defined descriptive fields the store does not
/// interpret. It survives snapshot round-trips untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub meta: Map<String, Value>,
}

impl Tab {
    pub fn new(id: impl Into<TabId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            path: None,
            meta: Map::new(),
        }
    }

    pub fn with_path(id: impl Into<TabId>, title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            path: Some(path.into()),
            meta: Map::new(),
        }
    }

    /// Build a tab straight from a file path: the path doubles as the id and
    /// the final path component becomes the title.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            id: TabId(path.clone()),
            title: title_from_path(&path),
            path: Some(path),
            meta: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_path_derives_id_and_title() {
        let tab = Tab::from_path("/home/user/notes.md");
        assert_eq!(tab.id.as_str(), "/home/user/notes.md");
        assert_eq!(tab.title, "notes.md");
        assert_eq!(tab.path.as_deref(), Some("/home/user/notes.md"));
    }

    #[test]
    fn test_meta_survives_serde_round_trip() {
        let mut tab = Tab::with_path("t1", "Report", "/docs/report.md");
        tab.meta.insert("pinned".to_string(), json!(true));
        tab.meta.insert("icon".to_string(), json!("chart"));

        let text = serde_json::to_string(&tab).unwrap();
        let back: Tab = serde_json::from_str(&text).unwrap();
        assert_eq!(back, tab);
        assert_eq!(back.meta["pinned"], json!(true));
    }

    #[test]
    fn test_minimal_json_deserializes() {
        // path and meta are optional on the wire
        let tab: Tab = serde_json::from_str(r#"{"id": "t1", "title": "Scratch"}"#).unwrap();
        assert_eq!(tab.id, TabId::from("t1"));
        assert!(tab.path.is_none());
        assert!(tab.meta.is_empty());
    }
}
