//! tabdeck - an in-process tab state container.
//!
//! Tracks which tabs a front-end has open, which one is active, and exposes
//! the mutations a tab strip needs: add, remove, rename, re-path, reorder,
//! focus, cycle. No rendering, no routing, no persistence; the store is a
//! plain owned value the host passes into its event handlers.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Tab, TabId, TabEvent)
//! - `store/` - The TabStore itself
//! - `snapshot.rs` - Serde snapshot/restore of store state (no file I/O)
//! - `path_ops.rs` - Pure path/title helpers
//! - `error.rs` - Error type for the fallible restore surface

pub mod domain;
pub mod error;
pub mod path_ops;
pub mod snapshot;
pub mod store;

// Re-exports for convenient external access
pub use domain::{Tab, TabEvent, TabId};
pub use error::{Result, TabError};
pub use snapshot::StoreSnapshot;
pub use store::TabStore;
