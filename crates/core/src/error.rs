use thiserror::Error;

/// Errors surfaced by the model layer.
///
/// Nothing in the simulations themselves can fail; these cover lookups driven
/// by user selection and configuration loading.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown pipeline phase id {0} (expected 1..=7)")]
    UnknownPhase(u8),

    #[error("unknown paper section '{0}'")]
    UnknownPaperSection(String),

    #[error("unknown hexa-mind dimension '{0}'")]
    UnknownDimension(String),

    #[error("unknown theorem '{0}'")]
    UnknownTheorem(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse failed: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
