use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Invalid timestamp value: '{value}'")]
    InvalidTemporalLiteral { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::InvalidTemporalLiteral { .. } => ErrorCategory::Input,
            FolioError::ConfigValidationError { .. }
            | FolioError::InvalidConfigValueError { .. }
            | FolioError::MissingConfigError { .. } => ErrorCategory::Config,
            FolioError::ProcessingError { .. } | FolioError::ValidationError { .. } => {
                ErrorCategory::Processing
            }
            FolioError::IoError(_) | FolioError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FolioError::InvalidTemporalLiteral { .. } => ErrorSeverity::Medium,
            FolioError::ValidationError { .. } => ErrorSeverity::Medium,
            FolioError::ConfigValidationError { .. }
            | FolioError::InvalidConfigValueError { .. }
            | FolioError::MissingConfigError { .. } => ErrorSeverity::High,
            FolioError::ProcessingError { .. } => ErrorSeverity::High,
            FolioError::SerializationError(_) => ErrorSeverity::High,
            FolioError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FolioError::InvalidTemporalLiteral { .. } => {
                "Use an ISO-8601 timestamp such as 2024-01-15T10:30:00.000Z".to_string()
            }
            FolioError::IoError(_) => {
                "Check that the input and output paths exist and are writable".to_string()
            }
            FolioError::SerializationError(_) => {
                "Check that the record file contains valid JSON".to_string()
            }
            FolioError::ConfigValidationError { field, .. }
            | FolioError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting and re-run", field)
            }
            FolioError::MissingConfigError { field } => {
                format!("Provide the '{}' setting via flag or config file", field)
            }
            FolioError::ProcessingError { .. } => {
                "Re-run with --verbose to see which record failed".to_string()
            }
            FolioError::ValidationError { .. } => {
                "Check the record fields named in the error message".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FolioError::InvalidTemporalLiteral { value } => {
                format!("'{}' is not a recognizable timestamp", value)
            }
            FolioError::IoError(e) => format!("File access failed: {}", e),
            FolioError::SerializationError(e) => format!("JSON error: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
