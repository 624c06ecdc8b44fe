//! Timer-driven battle playback.
//!
//! [spawn_battle] moves a started [BattleResolver] into a tokio task that plays
//! one round per tick and publishes a [BattleSnapshot] after each one. The task
//! is the only owner of the resolver while it runs, so rounds never overlap.
//! [BattleHandle::stop] and [BattleHandle::reset] wait for the task to exit:
//! once they return no further round can run.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::{oneshot, watch};
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_stream::wrappers::WatchStream;

use crate::combat::{BattleResolver, BattleSnapshot};

#[derive(Debug, Error)]
pub enum ClockError {
    #[error("battle clock task failed")]
    Join(#[from] JoinError),
}

#[derive(Debug)]
pub struct BattleHandle {
    updates: watch::Receiver<BattleSnapshot>,
    cancel: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<BattleResolver>>,
}

/// Start playing `resolver` with one round every `cadence`. The first round
/// runs one full cadence after this call.
pub fn spawn_battle(resolver: BattleResolver, cadence: Duration) -> BattleHandle {
    let (updates_tx, updates_rx) = watch::channel(resolver.snapshot());
    let (cancel_tx, cancel_rx) = oneshot::channel();
    let task = tokio::spawn(run_clock(resolver, cadence, updates_tx, cancel_rx));
    BattleHandle {
        updates: updates_rx,
        cancel: Some(cancel_tx),
        task: Some(task),
    }
}

async fn run_clock(
    mut resolver: BattleResolver,
    cadence: Duration,
    updates: watch::Sender<BattleSnapshot>,
    mut cancel: oneshot::Receiver<()>,
) -> BattleResolver {
    let mut ticker = time::interval_at(Instant::now() + cadence, cadence);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    while !resolver.is_idle() && !resolver.is_resolved() {
        tokio::select! {
            biased;
            _ = &mut cancel => {
                tracing::info!(round = resolver.round(), "battle clock cancelled");
                break;
            }
            _ = ticker.tick() => {
                if let Some(report) = resolver.advance() {
                    tracing::debug!(round = report.round, outcome = ?report.outcome, "clock tick");
                }
                updates.send_replace(resolver.snapshot());
            }
        }
    }
    resolver
}

impl BattleHandle {
    /// Latest published snapshot.
    pub fn snapshot(&self) -> BattleSnapshot {
        self.updates.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<BattleSnapshot> {
        self.updates.clone()
    }

    /// Snapshots as a stream: the current one first, then one per tick. Ends
    /// when the clock stops.
    pub fn updates(&self) -> WatchStream<BattleSnapshot> {
        WatchStream::new(self.updates.clone())
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Wait for the battle to resolve on its own.
    pub async fn finished(mut self) -> Result<BattleResolver, ClockError> {
        let task = self.task.take();
        match task {
            Some(task) => Ok(task.await?),
            None => Ok(BattleResolver::default()),
        }
    }

    /// Cancel the pending tick and take the resolver back as it stands.
    pub async fn stop(mut self) -> Result<BattleResolver, ClockError> {
        if let Some(cancel) = self.cancel.take() {
            // The task may already have exited after a terminal round.
            let _ = cancel.send(());
        }
        self.finished().await
    }

    /// Cancel the clock and return the resolver in its idle state.
    pub async fn reset(self) -> Result<BattleResolver, ClockError> {
        let mut resolver = self.stop().await?;
        resolver.reset();
        Ok(resolver)
    }
}

impl Drop for BattleHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
