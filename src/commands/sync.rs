use crate::{
    libs::{messages::Message, tracker::Tracker},
    msg_success, msg_warning,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let tracker = Tracker::init().await?;

    if !tracker.snapshot_available() {
        msg_warning!(Message::SnapshotUnavailable("not initialized".to_string()));
        return Ok(());
    }

    tracker.sync_now().await?;
    msg_success!(Message::SyncCompleted);
    Ok(())
}
