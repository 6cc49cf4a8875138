//! The seam between a simulation's state machine and whatever owns its timer.
//!
//! Both simulations are plain state: they never schedule anything themselves.
//! A driver (a browser `setInterval` handle, or a tokio task) calls
//! [`Simulation::tick`] every [`Simulation::period`] while
//! [`Simulation::is_running`] holds, and calls [`Simulation::stop`] to end the
//! run. Once `stop` has returned, `tick` is a no-op until the next `start`.

use core::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    #[default]
    Idle,
    Running,
}

impl RunState {
    pub fn is_running(self) -> bool {
        matches!(self, RunState::Running)
    }

    pub fn label(self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
        }
    }
}

pub trait Simulation {
    /// What one tick produced (a sample, a phase advance, ...).
    type Output;

    /// Fixed cadence between ticks.
    fn period(&self) -> Duration;

    fn run_state(&self) -> RunState;

    fn is_running(&self) -> bool {
        self.run_state().is_running()
    }

    /// Reset the run's mutable state and enter `Running`.
    fn start(&mut self);

    /// Enter `Idle`. Must be synchronous: no state changes after this returns.
    fn stop(&mut self);

    /// Advance one tick. Returns `None` (and changes nothing) while idle.
    fn tick(&mut self) -> Option<Self::Output>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_state_defaults_to_idle() {
        assert_eq!(RunState::default(), RunState::Idle);
        assert!(!RunState::Idle.is_running());
        assert!(RunState::Running.is_running());
        assert_eq!(RunState::Running.label(), "running");
    }
}
