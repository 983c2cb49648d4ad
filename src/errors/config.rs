use std::env::VarError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The variable is set but could not be read (e.g. not valid unicode)
    #[error("Environment variable {key} could not be read: {source}")]
    EnvVar {
        key: String,
        #[source]
        source: VarError,
    },

    /// The value (or its built-in default) does not parse into the expected type
    #[error("Could not parse {key}={value:?}: {reason}")]
    Parse {
        key: String,
        value: String,
        reason: String,
    },
}
