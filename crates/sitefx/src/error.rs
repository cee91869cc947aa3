//! Error types
//!
//! Page behaviors never surface errors to the page: a missing element only
//! switches the dependent feature off. These types exist for setup
//! reporting, configuration loading and the replay tool.

/// Page setup error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("expected element #{id} is missing")]
    MissingElement { id: &'static str },
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidThreshold { field: &'static str, value: f64 },
}

/// Replay step error
#[derive(Debug, thiserror::Error)]
pub enum StepError {
    #[error("malformed step {0:?}, expected scroll:<px>, click:<id> or wait:<ms>")]
    Malformed(String),

    #[error("invalid number in {step:?}")]
    InvalidFloat {
        step: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("invalid number in {step:?}")]
    InvalidInt {
        step: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("no element with id {0:?}")]
    UnknownElement(String),
}
