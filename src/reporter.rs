use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;

use crate::stats::StatsCounter;
use crate::store::MemStore;

/// Spawn the background reporter task.
///
/// Every `interval` it samples the request count and the number of keys
/// and emits one log record. The task runs until a value is sent on the
/// shutdown channel (or the sender is dropped); it stops at the next tick
/// boundary or cancellation check, never mid-sample, and does not restart.
pub fn spawn(
    stats: Arc<StatsCounter>,
    store: MemStore<String, String>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval(interval);
        // tokio fires the first tick immediately; consume it so the first
        // sample lands one full interval after start.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    tracing::info!(
                        requests = stats.request_count(),
                        keys = store.len(),
                        "reporter sample"
                    );
                }
                _ = shutdown.changed() => {
                    tracing::info!("reporter stopped");
                    return;
                }
            }
        }
    })
}
