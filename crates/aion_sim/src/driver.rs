//! Tokio owner for a [`Simulation`]'s timer.
//!
//! The simulation sits behind a `std::sync::Mutex`. `stop()` cancels the run's
//! token while holding that lock and the tick task re-checks the token after
//! taking it, so once `stop()` returns no further tick can touch the state or
//! reach the callback.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use aion_core::sim::Simulation;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

struct ActiveRun {
    token: CancellationToken,
    task: JoinHandle<()>,
}

pub struct TickDriver<S> {
    sim: Arc<Mutex<S>>,
    run: Option<ActiveRun>,
}

fn lock<S>(sim: &Mutex<S>) -> MutexGuard<'_, S> {
    // A panicking callback must not wedge stop().
    sim.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<S> TickDriver<S>
where
    S: Simulation + Send + 'static,
    S::Output: Send + 'static,
{
    pub fn new(sim: S) -> Self {
        Self {
            sim: Arc::new(Mutex::new(sim)),
            run: None,
        }
    }

    /// Start a fresh run, replacing any run in progress.
    ///
    /// `on_tick` is called with the simulation locked, once per produced
    /// output. The task ends when the simulation leaves `Running` by itself or
    /// when the run is stopped.
    pub fn start<F>(&mut self, mut on_tick: F)
    where
        F: FnMut(S::Output) + Send + 'static,
    {
        self.stop();

        let period = {
            let mut sim = lock(&self.sim);
            sim.start();
            sim.period()
        };

        let token = CancellationToken::new();
        let run_token = token.clone();
        let sim = Arc::clone(&self.sim);

        let task = tokio::spawn(async move {
            // First tick one period after start, like setInterval.
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = run_token.cancelled() => break,
                    _ = ticker.tick() => {}
                }

                let mut guard = lock(&sim);
                if run_token.is_cancelled() {
                    break;
                }
                if let Some(output) = guard.tick() {
                    on_tick(output);
                }
                if !guard.is_running() {
                    debug!("simulation went idle; tick task exiting");
                    break;
                }
            }
        });

        self.run = Some(ActiveRun { token, task });
    }

    /// Stop the current run. Idempotent.
    pub fn stop(&mut self) {
        let mut sim = lock(&self.sim);
        if let Some(run) = self.run.take() {
            run.token.cancel();
        }
        sim.stop();
    }

    /// True while a tick task is alive.
    pub fn is_active(&self) -> bool {
        self.run.as_ref().is_some_and(|r| !r.task.is_finished())
    }

    /// Wait for the current run's task to exit on its own (or after `stop`).
    pub async fn finished(&mut self) {
        let Some(run) = self.run.as_mut() else {
            return;
        };
        if let Err(e) = (&mut run.task).await {
            warn!(error = %e, "tick task did not complete cleanly");
        }
    }

    /// Read the simulation under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&lock(&self.sim))
    }
}

impl<S> Drop for TickDriver<S> {
    fn drop(&mut self) {
        if let Some(run) = self.run.take() {
            run.token.cancel();
        }
    }
}
