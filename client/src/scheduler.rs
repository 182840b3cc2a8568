//! Interval scheduler for reconciliation rounds.
//!
//! Fires the round once immediately at startup and then on a fixed
//! period, independent of user interaction. The stop handle prevents any
//! further round from starting but does not interrupt one in flight.

use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Handle to the spawned scheduler task.
pub struct Scheduler {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl Scheduler {
    /// Spawn the scheduler. `round` is invoked once per tick, first tick
    /// immediately.
    pub fn start<F, Fut>(period: Duration, round: F) -> Self
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (shutdown, mut stopped) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = interval.tick() => {}
                    _ = stopped.changed() => break,
                }
                // Awaited outside the select: a shutdown signal never
                // interrupts a round that already started.
                round().await;
            }

            tracing::debug!("Scheduler stopped");
        });

        Self { shutdown, handle }
    }

    /// Stop the scheduler: no further rounds start, and an in-flight
    /// round completes before this returns.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.handle.await;
    }
}
