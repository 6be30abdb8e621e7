use log::debug;

use crate::domain::events::TabEvent;
use crate::domain::tab::{Tab, TabId};
use crate::path_ops::retitle_path;

type Subscriber = Box<dyn FnMut(&TabEvent)>;

/// Ordered collection of open tabs plus the active-tab pointer.
///
/// Invariants, maintained by every mutation:
/// - no two tabs share an id;
/// - `active` is `None` or names a tab currently in the strip.
///
/// Every operation is total: an id or title that matches nothing is a silent
/// no-op, never an error. Subscribers are notified after each mutation
/// commits.
pub struct TabStore {
    tabs: Vec<Tab>,
    active: Option<TabId>,
    subscribers: Vec<Subscriber>,
}

impl std::fmt::Debug for TabStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabStore")
            .field("tabs", &self.tabs)
            .field("active", &self.active)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for TabStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TabStore {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
            subscribers: Vec::new(),
        }
    }

    /// Register a change listener. Listeners run synchronously, in
    /// registration order, after each mutation.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&TabEvent) + 'static,
    {
        self.subscribers.push(Box::new(listener));
    }

    fn emit(&mut self, event: TabEvent) {
        for listener in &mut self.subscribers {
            listener(&event);
        }
    }

    /// Append a tab to the strip. Duplicate ids are a silent no-op (opening
    /// an already-open tab twice keeps the first one); returns whether the
    /// tab was inserted. Never touches the active pointer.
    pub fn add(&mut self, tab: Tab) -> bool {
        if self.tabs.iter().any(|t| t.id == tab.id) {
            debug!("tab {} already open, ignoring add", tab.id);
            return false;
        }
        let id = tab.id.clone();
        self.tabs.push(tab);
        self.emit(TabEvent::Added(id));
        true
    }

    /// Remove a tab by id. If it was active, focus moves to the next tab in
    /// the strip, falling back to the previous one; removing the sole tab
    /// clears the focus. Removing a non-active or unknown id never moves
    /// focus.
    pub fn remove(&mut self, id: &TabId) {
        let Some(idx) = self.tabs.iter().position(|t| &t.id == id) else {
            return;
        };

        let new_active = if self.active.as_ref() == Some(id) {
            // Prefer the next neighbor, then the previous; None when the
            // removed tab was alone.
            self.tabs
                .get(idx + 1)
                .or_else(|| self.tabs[..idx].last())
                .map(|t| t.id.clone())
        } else {
            self.active.clone()
        };

        self.tabs.retain(|t| &t.id != id);
        let focus_moved = self.active != new_active;
        self.active = new_active;

        debug!("removed tab {}", id);
        self.emit(TabEvent::Removed(id.clone()));
        if focus_moved {
            let active = self.active.clone();
            self.emit(TabEvent::ActiveChanged(active));
        }
    }

    /// Rename the first tab (in strip order) whose title matches. Its path,
    /// if any, has every occurrence of the old title rewritten, and the tab
    /// is focused even if another tab was active. Silent no-op when no title
    /// matches; later duplicates are left alone.
    pub fn rename(&mut self, old_title: &str, new_title: &str) {
        let Some(tab) = self.tabs.iter_mut().find(|t| t.title == old_title) else {
            return;
        };
        tab.title = new_title.to_string();
        if let Some(path) = &tab.path {
            tab.path = Some(retitle_path(path, old_title, new_title));
        }
        let id = tab.id.clone();

        let focus_moved = self.active.as_ref() != Some(&id);
        self.active = Some(id.clone());

        debug!("renamed tab {} ({:?} -> {:?})", id, old_title, new_title);
        self.emit(TabEvent::Renamed {
            id: id.clone(),
            old_title: old_title.to_string(),
            new_title: new_title.to_string(),
        });
        if focus_moved {
            self.emit(TabEvent::ActiveChanged(Some(id)));
        }
    }

    /// Overwrite the backing path of the first tab whose title matches.
    /// Does not move focus. Silent no-op when no title matches.
    pub fn set_path(&mut self, title: &str, path: impl Into<String>) {
        let Some(tab) = self.tabs.iter_mut().find(|t| t.title == title) else {
            return;
        };
        let path = path.into();
        debug!("tab {} path -> {}", tab.id, path);
        tab.path = Some(path);
        let id = tab.id.clone();
        self.emit(TabEvent::PathChanged(id));
    }

    /// Focus a tab. Ignored if the id is unknown.
    pub fn set_active(&mut self, id: &TabId) {
        if self.active.as_ref() == Some(id) {
            return;
        }
        if self.tabs.iter().any(|t| &t.id == id) {
            self.active = Some(id.clone());
            self.emit(TabEvent::ActiveChanged(Some(id.clone())));
        }
    }

    /// Move a tab from one strip position to another. `to` is an insertion
    /// index (0..=len). Out-of-range sources and identity moves are no-ops.
    pub fn move_tab(&mut self, from: usize, to: usize) {
        if from == to || from >= self.tabs.len() {
            return;
        }
        let to = to.min(self.tabs.len());
        let tab = self.tabs.remove(from);
        // After removal, insertion indices past `from` shift down by 1
        let insert_at = if to > from { to - 1 } else { to };
        if insert_at == from {
            self.tabs.insert(from, tab);
            return;
        }
        self.tabs.insert(insert_at, tab);
        self.emit(TabEvent::Reordered {
            from,
            to: insert_at,
        });
    }

    pub fn active(&self) -> Option<&TabId> {
        self.active.as_ref()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        let active = self.active.as_ref()?;
        self.tabs.iter().find(|t| &t.id == active)
    }

    pub fn get(&self, id: &TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| &t.id == id)
    }

    pub fn get_mut(&mut self, id: &TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| &t.id == id)
    }

    /// Find a tab by its backing path
    pub fn find_by_path(&self, path: &str) -> Option<&TabId> {
        self.tabs
            .iter()
            .find(|t| t.path.as_deref() == Some(path))
            .map(|t| &t.id)
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Id of the tab after the active one (for tab cycling), wrapping around.
    pub fn next_id(&self) -> Option<&TabId> {
        let active = self.active.as_ref()?;
        let idx = self.tabs.iter().position(|t| &t.id == active)?;
        let next_idx = (idx + 1) % self.tabs.len();
        Some(&self.tabs[next_idx].id)
    }

    /// Id of the tab before the active one (for tab cycling), wrapping around.
    pub fn prev_id(&self) -> Option<&TabId> {
        let active = self.active.as_ref()?;
        let idx = self.tabs.iter().position(|t| &t.id == active)?;
        let prev_idx = if idx == 0 {
            self.tabs.len() - 1
        } else {
            idx - 1
        };
        Some(&self.tabs[prev_idx].id)
    }
}
