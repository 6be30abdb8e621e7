//! Domain layer - core data structures and types.
//!
//! - Tab and TabId
//! - TabEvent, emitted by the store after each mutation

pub mod events;
pub mod tab;

pub use events::TabEvent;
pub use tab::{Tab, TabId};
