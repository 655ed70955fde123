//! Snapshot providers.
//!
//! Commands read the snapshot synchronously through a provider. Providers
//! hand out `Arc<Snapshot>` so a panel keeps the exact data it was opened
//! with even if the provider refreshes afterwards.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use vault_types::error::Result;

use crate::snapshot::Snapshot;

/// Source of the current domain snapshot.
pub trait SnapshotProvider {
    /// The latest snapshot.
    fn snapshot(&self) -> Arc<Snapshot>;
}

/// Provider over a fixed snapshot.
#[derive(Debug, Clone)]
pub struct StaticSnapshot {
    snapshot: Arc<Snapshot>,
}

impl StaticSnapshot {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    /// Provider over the embedded sample character.
    pub fn sample() -> Result<Self> {
        Ok(Self::new(Snapshot::sample()?))
    }
}

impl SnapshotProvider for StaticSnapshot {
    fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }
}

/// Provider backed by a JSON export on disk.
#[derive(Debug)]
pub struct FileSnapshot {
    path: PathBuf,
    current: Arc<Snapshot>,
    failing: bool,
}

impl FileSnapshot {
    /// Load the file. Fails if the first read or parse fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let current = Arc::new(read_snapshot(&path)?);
        log::info!(
            "Loaded snapshot for {} from {}",
            current.character.name,
            path.display()
        );
        Ok(Self {
            path,
            current,
            failing: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True while the most recent reload failed.
    pub fn is_failing(&self) -> bool {
        self.failing
    }

    /// Re-read the file. On failure the last good snapshot is kept and
    /// `false` is returned.
    ///
    /// Only the first failure in a row is logged as a warning; repeats go to
    /// debug until a reload succeeds again.
    pub fn reload(&mut self) -> bool {
        match read_snapshot(&self.path) {
            Ok(snapshot) => {
                self.current = Arc::new(snapshot);
                if std::mem::take(&mut self.failing) {
                    log::info!("Snapshot at {} readable again", self.path.display());
                } else {
                    log::debug!("Reloaded snapshot from {}", self.path.display());
                }
                true
            },
            Err(e) if self.failing => {
                log::debug!("Snapshot reload from {} still failing: {e}", self.path.display());
                false
            },
            Err(e) => {
                self.failing = true;
                log::warn!(
                    "Snapshot reload from {} failed -- keeping last known state: {e}",
                    self.path.display()
                );
                false
            },
        }
    }
}

impl SnapshotProvider for FileSnapshot {
    fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current)
    }
}

fn read_snapshot(path: &Path) -> Result<Snapshot> {
    let text = std::fs::read_to_string(path)?;
    Snapshot::from_json(&text)
}
