use super::tab::TabId;

/// All notifications the store can emit. Each mutation fires zero or more of
/// these after the store state has been updated; subscribers typically
/// trigger a re-render.
#[derive(Debug, Clone, PartialEq)]
pub enum TabEvent {
    /// A tab was appended to the strip.
    Added(TabId),
    /// A tab left the strip.
    Removed(TabId),
    /// A tab's title changed (and its path was rewritten to match).
    Renamed {
        id: TabId,
        old_title: String,
        new_title: String,
    },
    /// A tab's backing path was overwritten.
    PathChanged(TabId),
    /// The focused tab changed. `None` means no tab is focused.
    ActiveChanged(Option<TabId>),
    /// A tab moved from one strip position to another.
    Reordered { from: usize, to: usize },
}
