use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Box number {number} already exists")]
    DuplicateBoxNumber { number: u32 },

    #[error("No box with id {id}")]
    BoxNotFound { id: String },
}

impl ManifestError {
    /// Short status line suitable for showing to the person running the tool.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ManifestError::IoError(e) => format!("Could not read or write data: {}", e),
            ManifestError::SerializationError(_) => "Stored data could not be encoded.".to_string(),
            ManifestError::ConfigValidationError { field, .. }
            | ManifestError::InvalidConfigValueError { field, .. } => {
                format!("Configuration problem in '{}'.", field)
            }
            ManifestError::ValidationError { message } => message.clone(),
            ManifestError::DuplicateBoxNumber { .. } => {
                "That box number already exists. Use a different number.".to_string()
            }
            ManifestError::BoxNotFound { .. } => "That box no longer exists.".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ManifestError::IoError(_) => "Check that the data directory exists and is writable",
            ManifestError::SerializationError(_) => "Re-run the command; report a bug if it persists",
            ManifestError::ConfigValidationError { .. } | ManifestError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags and try again"
            }
            ManifestError::ValidationError { .. } => "Correct the input and try again",
            ManifestError::DuplicateBoxNumber { .. } => {
                "Run `list` to see used numbers, or omit --number to take the next free one"
            }
            ManifestError::BoxNotFound { .. } => "Run `list` to see current box ids",
        }
    }
}

pub type Result<T> = std::result::Result<T, ManifestError>;
