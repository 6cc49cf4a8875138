//! Simulation tuning knobs.
//!
//! The browser app always runs with the defaults; the headless runner can load
//! a JSON file. Every field has a default so partial files are fine.

use crate::consciousness;
use crate::error::{Error, Result};
use crate::pipeline;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricConfig {
    #[cfg_attr(feature = "serde", serde(default = "default_metric_tick_ms"))]
    pub tick_ms: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_history_len"))]
    pub history_len: usize,
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_metric_tick_ms(),
            history_len: default_history_len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PipelineConfig {
    #[cfg_attr(feature = "serde", serde(default = "default_pipeline_tick_ms"))]
    pub tick_ms: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_pipeline_tick_ms(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub metric: MetricConfig,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pipeline: PipelineConfig,
    /// Seed for the metric engine's noise. `None` lets the host pick one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
}

fn default_metric_tick_ms() -> u32 {
    consciousness::TICK_INTERVAL_MS
}

fn default_history_len() -> usize {
    consciousness::HISTORY_LEN
}

fn default_pipeline_tick_ms() -> u32 {
    pipeline::TICK_INTERVAL_MS
}

impl SimulationConfig {
    #[cfg(feature = "serde")]
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let cfg: SimulationConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.metric.tick_ms == 0 {
            return Err(Error::InvalidConfig("metric.tick_ms must be > 0".into()));
        }
        if self.pipeline.tick_ms == 0 {
            return Err(Error::InvalidConfig("pipeline.tick_ms must be > 0".into()));
        }
        if !(1..=consciousness::HISTORY_LEN).contains(&self.metric.history_len) {
            return Err(Error::InvalidConfig(format!(
                "metric.history_len must be in 1..={}",
                consciousness::HISTORY_LEN
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_simulation_constants() {
        let cfg = SimulationConfig::default();
        assert_eq!(cfg.metric.tick_ms, 100);
        assert_eq!(cfg.metric.history_len, 100);
        assert_eq!(cfg.pipeline.tick_ms, 800);
        assert_eq!(cfg.seed, None);
        assert!(cfg.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_defaults() {
        let cfg = SimulationConfig::from_json_str(r#"{ "seed": 7, "pipeline": {} }"#).unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.pipeline.tick_ms, 800);
        assert_eq!(cfg.metric, MetricConfig::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rejects_bad_values() {
        let err = SimulationConfig::from_json_str(r#"{ "metric": { "tick_ms": 0 } }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let err =
            SimulationConfig::from_json_str(r#"{ "metric": { "history_len": 500 } }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let err = SimulationConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
