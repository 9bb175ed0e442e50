//! Synchronization between the primary store and its snapshot mirror.
//!
//! Two directions, never run concurrently with each other:
//!
//! - **Mirror**: full-replace of the snapshot from the primary store,
//!   followed by a save of the snapshot bytes to the backup slots. Runs
//!   after every interactive mutation, usually as a background task.
//! - **Rebuild**: validated read of the whole snapshot, then a
//!   full-replace of the primary store with ids preserved. Runs on
//!   startup when a snapshot with data exists, and after an import.
//!
//! When the snapshot engine is unavailable both directions degrade to
//! logged no-ops and the application keeps working against the primary
//! store alone.
//!
//! Background mirrors are spawned through [`SyncEngine::spawn_mirror`],
//! which returns a [`SyncTask`] handle. The caller is never blocked, but
//! the outcome stays observable: failures are logged by the task itself
//! and also carried in the handle for anyone who awaits it.

use crate::db::primary::PrimaryStore;
use crate::db::snapshot::SnapshotStore;
use crate::libs::backup::BackupPersistence;
use crate::{libs::messages::Message, msg_debug, msg_warning};
use anyhow::Result;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Which direction the startup synchronization ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDirection {
    /// Primary store was mirrored into a fresh snapshot.
    Mirror,
    /// Primary store was rebuilt from the snapshot.
    Rebuild,
}

/// Handle to a background mirror operation.
///
/// Dropping the handle detaches the task; it still runs to completion.
pub struct SyncTask {
    handle: JoinHandle<Result<()>>,
}

impl SyncTask {
    /// Waits for the background mirror and returns its outcome.
    pub async fn wait(self) -> Result<()> {
        match self.handle.await {
            Ok(result) => result,
            Err(err) => Err(anyhow::anyhow!("background sync task failed: {}", err)),
        }
    }

    /// True once the background task has finished running.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Keeps snapshot and primary store consistent.
///
/// Cloning is cheap; all clones share the same stores and the same
/// serialization guard, so two sync operations never interleave even when
/// started from different tasks.
#[derive(Clone)]
pub struct SyncEngine {
    primary: PrimaryStore,
    snapshot: Option<SnapshotStore>,
    backup: Option<BackupPersistence>,
    guard: Arc<tokio::sync::Mutex<()>>,
}

impl SyncEngine {
    /// Builds an engine over the given stores. Passing `None` for the
    /// snapshot or backup puts the engine in degraded mode for that part.
    pub fn new(primary: PrimaryStore, snapshot: Option<SnapshotStore>, backup: Option<BackupPersistence>) -> SyncEngine {
        SyncEngine {
            primary,
            snapshot,
            backup,
            guard: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    pub fn snapshot_available(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Picks the startup direction: rebuild when the snapshot already
    /// holds at least one year, mirror otherwise. Returns `None` in
    /// degraded mode.
    pub async fn startup(&self) -> Result<Option<SyncDirection>> {
        let Some(snapshot) = &self.snapshot else {
            msg_debug!("Snapshot engine unavailable, startup sync skipped");
            return Ok(None);
        };

        if snapshot.has_data() {
            self.rebuild().await?;
            Ok(Some(SyncDirection::Rebuild))
        } else {
            self.mirror().await?;
            Ok(Some(SyncDirection::Mirror))
        }
    }

    /// Primary → snapshot: full-replace of the snapshot tables from a
    /// point-in-time copy of the primary store, then a save of the fresh
    /// byte image to the backup slots.
    pub async fn mirror(&self) -> Result<()> {
        let Some(snapshot) = &self.snapshot else {
            msg_debug!("Snapshot engine unavailable, mirror skipped");
            return Ok(());
        };
        let _guard = self.guard.lock().await;

        let (years, months, days) = self.primary.export_all();
        snapshot.replace_all(&years, &months, &days)?;

        if let Some(backup) = &self.backup {
            let bytes = snapshot.to_bytes()?;
            backup.save(&bytes)?;
        }

        msg_debug!("Mirror completed");
        Ok(())
    }

    /// Snapshot → primary: validated read of every snapshot row, then a
    /// full-replace of the primary store with ids preserved.
    ///
    /// The read happens before the primary store is touched, so a snapshot
    /// that fails validation leaves the interactive data as it was.
    pub async fn rebuild(&self) -> Result<()> {
        let Some(snapshot) = &self.snapshot else {
            msg_debug!("Snapshot engine unavailable, rebuild skipped");
            return Ok(());
        };
        let _guard = self.guard.lock().await;

        let (years, months, days) = snapshot.read_all()?;
        self.primary.replace_all(years, months, days);

        msg_debug!("Rebuild completed");
        Ok(())
    }

    /// Starts a mirror in the background and returns its handle.
    ///
    /// The caller is not blocked. A failing mirror logs a warning from
    /// inside the task and the error is also available through
    /// [`SyncTask::wait`].
    pub fn spawn_mirror(&self) -> SyncTask {
        let engine = self.clone();
        let handle = tokio::spawn(async move {
            if let Err(err) = engine.mirror().await {
                msg_warning!(Message::MirrorFailed(err.to_string()));
                return Err(err);
            }
            Ok(())
        });
        SyncTask { handle }
    }

    /// Current snapshot byte image, or `None` in degraded mode.
    pub fn snapshot_bytes(&self) -> Result<Option<Vec<u8>>> {
        match &self.snapshot {
            Some(snapshot) => Ok(Some(snapshot.to_bytes()?)),
            None => Ok(None),
        }
    }

    /// Backup slots handle, absent when backup storage is unavailable.
    pub fn backup(&self) -> Option<&BackupPersistence> {
        self.backup.as_ref()
    }
}
