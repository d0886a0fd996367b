//! Error types for the ambient boundaries of the funnel crate.
//!
//! The wizard itself is total: every operation clamps instead of failing.
//! Errors only appear when loading configuration or parsing intents from text.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or validate a [`crate::config::FunnelConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse funnel config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid funnel config: {0}")]
    Invalid(String),
}

/// Failure to parse a textual [`crate::intent::Intent`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentParseError {
    #[error("unknown intent `{0}`")]
    UnknownVerb(String),
    #[error("intent `{verb}` requires an argument")]
    MissingArgument { verb: String },
    #[error("intent `{verb}` takes no argument")]
    UnexpectedArgument { verb: String },
    #[error("intent `{verb}` expects a non-negative number, got `{value}`")]
    InvalidNumber { verb: String, value: String },
}
