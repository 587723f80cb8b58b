use thiserror::Error;

/// Diagnostic code attached to unsupported record type failures.
pub const UNSUPPORTED_RECORD_TYPE_CODE: &str = "NLP12517812E";

#[derive(Error, Debug)]
pub enum RecordError {
    #[error(
        "Unsupported instance type ({found}). Only instances of datamodels \
         ClassificationTrainRecord and GenerationTrainRecord are supported"
    )]
    UnsupportedRecordType { found: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidArgument,
    Parse,
    Io,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RecordError {
    /// Fixed diagnostic code, for errors that carry one.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            RecordError::UnsupportedRecordType { .. } => Some(UNSUPPORTED_RECORD_TYPE_CODE),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RecordError::UnsupportedRecordType { .. } => ErrorCategory::InvalidArgument,
            RecordError::Serialization(_) => ErrorCategory::Parse,
            RecordError::IoError(_) => ErrorCategory::Io,
            RecordError::ConfigError { .. } | RecordError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RecordError::UnsupportedRecordType { .. } => ErrorSeverity::High,
            RecordError::Serialization(_) => ErrorSeverity::Medium,
            RecordError::IoError(_) => ErrorSeverity::Critical,
            RecordError::ConfigError { .. } | RecordError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
        }
    }

    /// Message with the diagnostic code prefixed, when there is one.
    pub fn user_friendly_message(&self) -> String {
        match self.code() {
            Some(code) => format!("<{}> {}", code, self),
            None => self.to_string(),
        }
    }

    /// Emit this error as a tracing event. Returning the error stays with the caller.
    pub fn log(&self) {
        match self.code() {
            Some(code) => tracing::error!(
                code,
                category = ?self.category(),
                "{}",
                self
            ),
            None => tracing::error!(category = ?self.category(), "{}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;
