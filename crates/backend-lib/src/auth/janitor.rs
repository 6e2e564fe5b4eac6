//! Periodic sweep evicting expired sessions.
use chrono::Utc;
use std::time::Duration;
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, info};

use super::SessionStore;

/// Default sweep interval (10 minutes)
pub const JANITOR_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Background task that purges expired sessions from a [`SessionStore`]
pub struct Janitor {
    store: SessionStore,
    interval: Duration,
}

/// Handle to a running janitor
///
/// Dropping the handle leaves the task running for the life of the runtime.
pub struct JanitorHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl Janitor {
    pub fn new(store: SessionStore, interval: Duration) -> Self {
        Self { store, interval }
    }

    /// Spawn the sweep loop; the first tick fires one interval from now
    pub fn spawn(store: SessionStore, interval: Duration) -> JanitorHandle {
        let (shutdown, stop) = watch::channel(false);
        let janitor = Self::new(store, interval);
        let task = tokio::spawn(janitor.run(stop));
        JanitorHandle { shutdown, task }
    }

    /// Run one sweep against the current wall clock
    pub async fn sweep(&self) -> usize {
        info!("Updating stored sessions");
        let removed = self.store.purge_expired(Utc::now()).await;
        if removed > 0 {
            info!(removed, "Expired sessions deleted");
        }
        removed
    }

    async fn run(self, mut stop: watch::Receiver<bool>) {
        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // Once every sender is gone no stop signal can arrive
        let mut stoppable = true;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.sweep().await;
                }
                changed = stop.changed(), if stoppable => {
                    match changed {
                        Ok(()) if *stop.borrow() => break,
                        Ok(()) => {},
                        Err(_) => stoppable = false,
                    }
                }
            }
        }

        debug!("Session janitor stopped");
    }
}

impl JanitorHandle {
    /// Signal the janitor to stop and wait for it to finish
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
