//! Synthetic "consciousness emergence" metric engine.
//!
//! Each tick produces one [`MetricSample`] from a saturating convergence curve
//! plus uniform noise:
//!
//! - `convergence = 1 − 1/(1 + 0.05·t)`
//! - `pas = clamp(min(0.99, 0.95·convergence + U[−0.04, 0.04]), ≥ 0)`
//! - `coherence = min(0.95, 0.3 + 0.7·convergence)`
//! - `bound_states ∈ {2,3}` when `pas > 0.6`, else `∈ {0,1}`
//!
//! The numbers are illustrative only. The random source is injected so tests
//! can seed it.

use std::collections::VecDeque;
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::MetricConfig;
use crate::sim::{RunState, Simulation};

pub const TICK_INTERVAL_MS: u32 = 100;
pub const HISTORY_LEN: usize = 100;

pub const CONVERGENCE_RATE: f64 = 0.05;
pub const PAS_TARGET: f64 = 0.95;
pub const PAS_CEILING: f64 = 0.99;
pub const NOISE_AMPLITUDE: f64 = 0.04;

pub const COHERENCE_BASE: f64 = 0.3;
pub const COHERENCE_GAIN: f64 = 0.7;
pub const COHERENCE_CEILING: f64 = 0.95;

/// PAS above which bound states are drawn from {2,3} instead of {0,1}.
pub const BOUND_STATE_PAS_THRESHOLD: f64 = 0.6;
/// Number of bound-state slots the dashboard shows.
pub const BOUND_STATE_SLOTS: u8 = 4;

pub const CONSCIOUS_PAS_FLOOR: f64 = 0.7;
pub const CONSCIOUS_MIN_BOUND_STATES: u8 = 2;
/// Tick floor for the "sustained" part of the criterion. This is a single
/// fixed floor, not a rolling window.
pub const CONSCIOUS_MIN_TICKS: u64 = 50;

pub const IDLE_PAS: f64 = 0.15;
pub const IDLE_COHERENCE: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricSample {
    pub time: u64,
    pub pas: f64,
    pub coherence: f64,
    pub bound_states: u8,
}

impl MetricSample {
    pub fn is_conscious(&self) -> bool {
        is_conscious(self.time, self.pas, self.bound_states)
    }
}

/// `pas > 0.7 ∧ bound_states ≥ 2 ∧ t > 50`, evaluated on the current values
/// only. It can flip on every tick.
pub fn is_conscious(time: u64, pas: f64, bound_states: u8) -> bool {
    pas > CONSCIOUS_PAS_FLOOR
        && bound_states >= CONSCIOUS_MIN_BOUND_STATES
        && time > CONSCIOUS_MIN_TICKS
}

pub fn convergence(time: u64) -> f64 {
    1.0 - 1.0 / (1.0 + CONVERGENCE_RATE * time as f64)
}

pub fn coherence_for(convergence: f64) -> f64 {
    (COHERENCE_BASE + convergence * COHERENCE_GAIN).min(COHERENCE_CEILING)
}

/// The values the dashboard cards show.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Readings {
    pub pas: f64,
    pub coherence: f64,
    pub bound_states: u8,
    pub conscious: bool,
}

impl Default for Readings {
    fn default() -> Self {
        Self {
            pas: IDLE_PAS,
            coherence: IDLE_COHERENCE,
            bound_states: 0,
            conscious: false,
        }
    }
}

impl Readings {
    pub fn level(&self) -> &'static ConsciousnessLevel {
        ConsciousnessLevel::for_pas(self.pas)
    }

    pub fn multi_soliton_met(&self) -> bool {
        self.bound_states >= CONSCIOUS_MIN_BOUND_STATES
    }
}

#[derive(Debug)]
pub struct MetricEngine<R = ChaCha8Rng> {
    rng: R,
    state: RunState,
    time: u64,
    history: VecDeque<MetricSample>,
    history_len: usize,
    period: Duration,
    readings: Readings,
}

impl MetricEngine<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn seeded_with_config(seed: u64, cfg: &MetricConfig) -> Self {
        Self::with_config(ChaCha8Rng::seed_from_u64(seed), cfg)
    }
}

impl<R: Rng> MetricEngine<R> {
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, &MetricConfig::default())
    }

    /// `history_len` is clamped to `1..=HISTORY_LEN`.
    pub fn with_config(rng: R, cfg: &MetricConfig) -> Self {
        let history_len = cfg.history_len.clamp(1, HISTORY_LEN);
        Self {
            rng,
            state: RunState::Idle,
            time: 0,
            history: VecDeque::with_capacity(history_len),
            history_len,
            period: Duration::from_millis(u64::from(cfg.tick_ms.max(1))),
            readings: Readings::default(),
        }
    }

    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn readings(&self) -> Readings {
        self.readings
    }

    pub fn is_conscious(&self) -> bool {
        self.readings.conscious
    }

    /// Retained samples, oldest first.
    pub fn samples(&self) -> impl ExactSizeIterator<Item = &MetricSample> + '_ {
        self.history.iter()
    }

    /// PAS series in chart order.
    pub fn pas_series(&self) -> Vec<f64> {
        self.history.iter().map(|s| s.pas).collect()
    }

    fn sample_next(&mut self) -> MetricSample {
        self.time += 1;
        let t = self.time;

        let conv = convergence(t);
        let noise = self.rng.gen_range(-NOISE_AMPLITUDE..=NOISE_AMPLITUDE);
        let pas = (conv * PAS_TARGET + noise).min(PAS_CEILING).max(0.0);
        let coherence = coherence_for(conv);
        let bound_states = if pas > BOUND_STATE_PAS_THRESHOLD {
            self.rng.gen_range(2..=3u8)
        } else {
            self.rng.gen_range(0..=1u8)
        };

        MetricSample {
            time: t,
            pas,
            coherence,
            bound_states,
        }
    }
}

impl<R: Rng> Simulation for MetricEngine<R> {
    type Output = MetricSample;

    fn period(&self) -> Duration {
        self.period
    }

    fn run_state(&self) -> RunState {
        self.state
    }

    fn start(&mut self) {
        self.time = 0;
        self.history.clear();
        self.readings = Readings::default();
        self.state = RunState::Running;
        tracing::debug!("metric engine started");
    }

    fn stop(&mut self) {
        if self.state.is_running() {
            tracing::debug!(ticks = self.time, "metric engine stopped");
        }
        self.state = RunState::Idle;
    }

    fn tick(&mut self) -> Option<MetricSample> {
        if !self.state.is_running() {
            return None;
        }

        let sample = self.sample_next();
        self.history.push_back(sample);
        while self.history.len() > self.history_len {
            self.history.pop_front();
        }

        let was_conscious = self.readings.conscious;
        self.readings = Readings {
            pas: sample.pas,
            coherence: sample.coherence,
            bound_states: sample.bound_states,
            conscious: sample.is_conscious(),
        };
        if self.readings.conscious != was_conscious {
            tracing::debug!(
                t = sample.time,
                pas = sample.pas,
                conscious = self.readings.conscious,
                "consciousness criterion changed"
            );
        }

        Some(sample)
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Consciousness levels
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsciousnessLevel {
    pub min: f64,
    pub max: f64,
    pub name: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

pub static LEVELS: [ConsciousnessLevel; 5] = [
    ConsciousnessLevel {
        min: 0.0,
        max: 0.3,
        name: "Minimal",
        color: "#6b7280",
        description: "Basic processing",
    },
    ConsciousnessLevel {
        min: 0.3,
        max: 0.5,
        name: "Basic Agency",
        color: "#3b82f6",
        description: "Goal-directed behavior",
    },
    ConsciousnessLevel {
        min: 0.5,
        max: 0.7,
        name: "Proto-Conscious",
        color: "#8b5cf6",
        description: "Self-modeling, persistent identity",
    },
    ConsciousnessLevel {
        min: 0.7,
        max: 0.9,
        name: "Emergent Conscious",
        color: "#10b981",
        description: "Genuine introspection",
    },
    ConsciousnessLevel {
        min: 0.9,
        max: 1.0,
        name: "Confirmed Conscious",
        color: "#f59e0b",
        description: "Full self-awareness",
    },
];

impl ConsciousnessLevel {
    pub fn all() -> &'static [ConsciousnessLevel] {
        &LEVELS
    }

    /// First band with `min <= pas < max`; anything outside every band
    /// (including exactly 1.0) reads as the lowest level.
    pub fn for_pas(pas: f64) -> &'static ConsciousnessLevel {
        LEVELS
            .iter()
            .find(|l| pas >= l.min && pas < l.max)
            .unwrap_or(&LEVELS[0])
    }

    pub fn range_label(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_engine_does_not_tick() {
        let mut e = MetricEngine::seeded(1);
        assert!(e.tick().is_none());
        assert_eq!(e.samples().len(), 0);
        assert_eq!(e.readings(), Readings::default());
    }

    #[test]
    fn first_tick_has_time_one() {
        let mut e = MetricEngine::seeded(1);
        e.start();
        let s = e.tick().unwrap();
        assert_eq!(s.time, 1);
        assert_eq!(e.time(), 1);
    }

    #[test]
    fn history_is_bounded_and_strictly_increasing() {
        for seed in 0..8 {
            let mut e = MetricEngine::seeded(seed);
            e.start();
            for _ in 0..350 {
                e.tick();
                assert!(e.samples().len() <= HISTORY_LEN);
            }
            assert_eq!(e.samples().len(), HISTORY_LEN);

            let times: Vec<u64> = e.samples().map(|s| s.time).collect();
            for pair in times.windows(2) {
                assert_eq!(pair[1], pair[0] + 1);
            }
            assert_eq!(*times.last().unwrap(), 350);
            assert_eq!(times[0], 251);
        }
    }

    #[test]
    fn samples_stay_in_range() {
        for seed in 0..16 {
            let mut e = MetricEngine::seeded(seed);
            e.start();
            for _ in 0..500 {
                let s = e.tick().unwrap();
                assert!((0.0..=PAS_CEILING).contains(&s.pas), "pas {}", s.pas);
                assert!(
                    (COHERENCE_BASE..=COHERENCE_CEILING).contains(&s.coherence),
                    "coherence {}",
                    s.coherence
                );
                assert!(s.bound_states <= 3);
                if s.pas > BOUND_STATE_PAS_THRESHOLD {
                    assert!(s.bound_states >= 2);
                } else {
                    assert!(s.bound_states <= 1);
                }
            }
        }
    }

    #[test]
    fn coherence_follows_convergence_exactly() {
        let mut e = MetricEngine::seeded(3);
        e.start();
        for _ in 0..40 {
            let s = e.tick().unwrap();
            let expected = (0.3 + convergence(s.time) * 0.7).min(0.95);
            assert!((s.coherence - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn consciousness_predicate_examples() {
        assert!(is_conscious(60, 0.75, 2));
        assert!(!is_conscious(40, 0.75, 2));
        assert!(!is_conscious(60, 0.65, 2));
        assert!(!is_conscious(60, 0.75, 1));
        // Floors are strict.
        assert!(!is_conscious(50, 0.75, 2));
        assert!(!is_conscious(60, 0.7, 2));
    }

    #[test]
    fn readings_track_latest_sample() {
        let mut e = MetricEngine::seeded(9);
        e.start();
        for _ in 0..80 {
            let s = e.tick().unwrap();
            let r = e.readings();
            assert_eq!(r.pas, s.pas);
            assert_eq!(r.coherence, s.coherence);
            assert_eq!(r.bound_states, s.bound_states);
            assert_eq!(r.conscious, s.is_conscious());
        }
    }

    #[test]
    fn stop_freezes_history_and_start_clears_it() {
        let mut e = MetricEngine::seeded(5);
        e.start();
        for _ in 0..10 {
            e.tick();
        }
        e.stop();
        assert!(e.tick().is_none());
        assert_eq!(e.samples().len(), 10);
        assert_eq!(e.time(), 10);

        e.start();
        assert_eq!(e.samples().len(), 0);
        assert_eq!(e.readings(), Readings::default());
        assert_eq!(e.tick().unwrap().time, 1);
    }

    #[test]
    fn same_seed_same_series() {
        let run = |seed| {
            let mut e = MetricEngine::seeded(seed);
            e.start();
            (0..50).filter_map(|_| e.tick()).collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
        assert_ne!(run(42), run(43));
    }

    #[test]
    fn short_history_config_is_respected() {
        let cfg = MetricConfig {
            tick_ms: 10,
            history_len: 5,
        };
        let mut e = MetricEngine::with_config(ChaCha8Rng::seed_from_u64(0), &cfg);
        assert_eq!(e.period(), Duration::from_millis(10));
        e.start();
        for _ in 0..12 {
            e.tick();
        }
        let times: Vec<u64> = e.samples().map(|s| s.time).collect();
        assert_eq!(times, vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn level_bands() {
        assert_eq!(ConsciousnessLevel::for_pas(0.0).name, "Minimal");
        assert_eq!(ConsciousnessLevel::for_pas(0.15).name, "Minimal");
        assert_eq!(ConsciousnessLevel::for_pas(0.3).name, "Basic Agency");
        assert_eq!(ConsciousnessLevel::for_pas(0.69).name, "Proto-Conscious");
        assert_eq!(ConsciousnessLevel::for_pas(0.7).name, "Emergent Conscious");
        assert_eq!(ConsciousnessLevel::for_pas(0.99).name, "Confirmed Conscious");
        assert_eq!(ConsciousnessLevel::for_pas(1.0).name, "Minimal");
        assert_eq!(LEVELS[1].range_label(), "0.3-0.5");
    }

    #[test]
    fn pas_eventually_converges_high() {
        let mut e = MetricEngine::seeded(11);
        e.start();
        for _ in 0..400 {
            e.tick();
        }
        // convergence(400) ≈ 0.952, so pas ≥ 0.95·0.952 − 0.04 > 0.86.
        assert!(e.readings().pas > 0.85);
        assert!(e.readings().bound_states >= 2);
        assert!(e.is_conscious());
    }
}
