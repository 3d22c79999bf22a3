//! Undo support: snapshots and the history stack.

pub mod store;

pub use store::{History, Snapshot};
