//! Optional hook modules live here.
//!
//! Keep extensions decoupled from core paths: observers receive read-only
//! snapshots, never engine internals.

pub mod observers;

pub use observers::{PageContext, PageEvent, PageObserver};
