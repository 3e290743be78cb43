use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("Sort key '{key}' is missing from record {index}")]
    InvalidKey { key: String, index: usize },

    #[error("Sort key '{key}' holds {found} at record {index}, expected {expected}")]
    TypeMismatch {
        key: String,
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid cuisine pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BrowseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidKey { .. } | Self::TypeMismatch { .. } => ErrorCategory::Data,
            Self::Csv(_) | Self::Serialization(_) => ErrorCategory::Input,
            Self::TomlParse(_)
            | Self::Regex(_)
            | Self::InvalidConfigValue { .. }
            | Self::MissingConfig { .. } => ErrorCategory::Configuration,
            Self::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidKey { key, .. } => {
                format!("Make sure every row has a value in the '{}' column", key)
            }
            Self::TypeMismatch { key, .. } => format!(
                "Keep the '{}' column either all numbers or all text",
                key
            ),
            Self::Csv(_) => "Check that the data file is a valid CSV export with a header row".to_string(),
            Self::Io(_) => "Check that the file exists and is readable".to_string(),
            Self::Serialization(_) => "Check that the records contain only JSON-compatible values".to_string(),
            Self::TomlParse(_) => "Check the preset file for TOML syntax errors".to_string(),
            Self::Regex(_) => "Select fewer cuisines".to_string(),
            Self::InvalidConfigValue { field, .. } => format!("Adjust the value of '{}'", field),
            Self::MissingConfig { field } => format!("Provide a value for '{}'", field),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Data => format!("The stall data cannot be sorted: {}", self),
            ErrorCategory::Input => format!("The stall data could not be read: {}", self),
            ErrorCategory::Configuration => format!("Invalid settings: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, BrowseError>;
