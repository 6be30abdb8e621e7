//! The tab store - ordered tab strip plus the active-tab pointer.

pub mod tabs;

pub use tabs::TabStore;
