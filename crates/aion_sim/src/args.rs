use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Consciousness,
    Pipeline,
    #[default]
    All,
}

impl Mode {
    fn parse(s: &str) -> Option<Mode> {
        match s.trim().to_ascii_lowercase().as_str() {
            "consciousness" | "metrics" => Some(Mode::Consciousness),
            "pipeline" => Some(Mode::Pipeline),
            "all" | "both" => Some(Mode::All),
            _ => None,
        }
    }

    pub fn runs_consciousness(self) -> bool {
        matches!(self, Mode::Consciousness | Mode::All)
    }

    pub fn runs_pipeline(self) -> bool {
        matches!(self, Mode::Pipeline | Mode::All)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub mode: Mode,
    /// Stop each simulation after this many ticks.
    pub ticks: Option<u64>,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("help requested")]
    Help,

    #[error("{0} expects a value")]
    MissingValue(&'static str),

    #[error("{flag} expects a non-negative integer, got '{value}'")]
    InvalidNumber { flag: &'static str, value: String },

    #[error("unknown mode '{0}' (expected consciousness, pipeline or all)")]
    UnknownMode(String),

    #[error("unexpected argument '{0}'")]
    Unexpected(String),
}

pub fn usage() -> &'static str {
    "\
Usage: aion_sim [consciousness|pipeline|all] [options]

Runs the AION-NEXUS simulations headless and logs every tick.

Options:
  --ticks <n>        Stop each simulation after n ticks
  --seed <n>         Seed for the metric engine's noise
  --config <file>    JSON simulation config (tick periods, history length, seed)
  -h, --help         Show this help

Log level comes from RUST_LOG (default: info)."
}

pub fn parse<I>(args: I) -> Result<Args, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut out = Args::default();
    let mut mode_seen = false;
    let mut it = args.into_iter();

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(CliError::Help),
            "--ticks" => out.ticks = Some(number("--ticks", it.next())?),
            "--seed" => out.seed = Some(number("--seed", it.next())?),
            "--config" => {
                let path = it.next().ok_or(CliError::MissingValue("--config"))?;
                out.config = Some(PathBuf::from(path));
            }
            other if other.starts_with('-') || mode_seen => {
                return Err(CliError::Unexpected(other.to_string()));
            }
            other => {
                out.mode =
                    Mode::parse(other).ok_or_else(|| CliError::UnknownMode(other.to_string()))?;
                mode_seen = true;
            }
        }
    }

    Ok(out)
}

fn number(flag: &'static str, value: Option<String>) -> Result<u64, CliError> {
    let value = value.ok_or(CliError::MissingValue(flag))?;
    value
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidNumber { flag, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, CliError> {
        parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_run_everything() {
        let a = args(&[]).unwrap();
        assert_eq!(a, Args::default());
        assert_eq!(a.mode, Mode::All);
        assert!(a.mode.runs_consciousness() && a.mode.runs_pipeline());
    }

    #[test]
    fn mode_and_flags() {
        let a = args(&[
            "pipeline", "--ticks", "7", "--seed", "42", "--config", "sim.json",
        ])
        .unwrap();
        assert_eq!(a.mode, Mode::Pipeline);
        assert!(!a.mode.runs_consciousness());
        assert_eq!(a.ticks, Some(7));
        assert_eq!(a.seed, Some(42));
        assert_eq!(a.config, Some(PathBuf::from("sim.json")));

        let a = args(&["--seed", "1", "Consciousness"]).unwrap();
        assert_eq!(a.mode, Mode::Consciousness);
    }

    #[test]
    fn errors() {
        assert_eq!(args(&["--ticks"]), Err(CliError::MissingValue("--ticks")));
        assert_eq!(
            args(&["--seed", "-3"]),
            Err(CliError::InvalidNumber {
                flag: "--seed",
                value: "-3".into()
            })
        );
        assert_eq!(
            args(&["dreaming"]),
            Err(CliError::UnknownMode("dreaming".into()))
        );
        assert_eq!(
            args(&["all", "pipeline"]),
            Err(CliError::Unexpected("pipeline".into()))
        );
        assert_eq!(
            args(&["--fast"]),
            Err(CliError::Unexpected("--fast".into()))
        );
        assert_eq!(args(&["pipeline", "-h"]), Err(CliError::Help));
    }
}
