//! # aion_core
//!
//! Host-testable model layer for the AION-NEXUS presentation site.
//!
//! Everything the browser app renders lives here as plain Rust: the two
//! timer-driven simulations, the PAS chart geometry, the static content
//! catalogs, and the small pieces of local UI state each section owns. The
//! `aion_web` crate only binds these to the DOM; `aion_sim` drives the same
//! simulations on tokio timers.
//!
//! ## Quick Start
//!
//! ```
//! use aion_core::prelude::*;
//!
//! let mut engine = MetricEngine::seeded(7);
//! engine.start();
//! for _ in 0..60 {
//!     engine.tick();
//! }
//! assert_eq!(engine.samples().count(), 60);
//!
//! let mut stepper = PipelineStepper::new();
//! stepper.start();
//! while stepper.tick().is_some() {}
//! assert_eq!(stepper.completed(), &[1, 2, 3, 4, 5, 6, 7]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): serde derives on data types and JSON config loading
//!
//! ## Modules
//!
//! - [`consciousness`]: synthetic PAS metric engine and consciousness levels
//! - [`pipeline`]: 7-phase pipeline stepper and phase catalog
//! - [`chart`]: PAS line-chart geometry
//! - [`sim`]: the start/stop/tick seam shared by both simulations
//! - [`content`]: static section content and per-section UI state

#[path = "core/chart.rs"]
pub mod chart;

#[path = "core/consciousness.rs"]
pub mod consciousness;

#[path = "core/pipeline.rs"]
pub mod pipeline;

#[path = "core/sim.rs"]
pub mod sim;

pub mod config;
pub mod content;
pub mod error;
pub mod nav;
pub mod notify;
pub mod share;

pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use aion_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chart::{PasChart, Viewport};
    pub use crate::config::SimulationConfig;
    pub use crate::consciousness::{ConsciousnessLevel, MetricEngine, MetricSample, Readings};
    pub use crate::error::{Error, Result};
    pub use crate::nav::Anchor;
    pub use crate::notify::{Toast, ToastLevel, ToastQueue, ToastSpec};
    pub use crate::pipeline::{PhaseAdvance, PipelinePhase, PipelineStepper};
    pub use crate::sim::{RunState, Simulation};
}
