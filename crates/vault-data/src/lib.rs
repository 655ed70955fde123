//! Domain data for the Vault-Tec terminal.
//!
//! The snapshot is produced by an external game-state bridge and consumed
//! read-only by terminal commands and panel views.

pub mod provider;
pub mod snapshot;
pub mod timeline;

pub use provider::{FileSnapshot, SnapshotProvider, StaticSnapshot};
pub use snapshot::{Location, QuestStatus, Snapshot};
pub use timeline::{EntryKind, Timeline, TimelineEntry, TimelineMode};
