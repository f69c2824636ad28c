//! Domain error types.

/// Top-level error type for fxsim.
#[derive(Debug, thiserror::Error)]
pub enum FxsimError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("invalid operation input: {}", violations.join("; "))]
    Validation { violations: Vec<String> },

    #[error("math domain error: {reason}")]
    MathDomain { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&FxsimError> for std::process::ExitCode {
    fn from(err: &FxsimError) -> Self {
        let code: u8 = match err {
            FxsimError::Io(_) => 1,
            FxsimError::ConfigParse { .. }
            | FxsimError::ConfigMissing { .. }
            | FxsimError::ConfigInvalid { .. } => 2,
            FxsimError::Validation { .. } => 3,
            FxsimError::MathDomain { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
