use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("division by zero")]
    DivisionByZero,
}

/// 錯誤嚴重程度，決定 CLI 的退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DemoError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DemoError::DivisionByZero => ErrorSeverity::Medium,
            DemoError::ConfigParseError(_) | DemoError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            DemoError::IoError(_)
            | DemoError::SerializationError(_)
            | DemoError::PatternError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("Could not read or write a file: {}", e),
            DemoError::SerializationError(_) => "Could not render the report as JSON".to_string(),
            DemoError::ConfigParseError(e) => {
                format!("The configuration file is not valid TOML: {}", e)
            }
            DemoError::PatternError(_) => "Internal pattern error".to_string(),
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            DemoError::DivisionByZero => "Cannot divide by zero".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::IoError(_) => "Check that the file exists and that stdout is writable",
            DemoError::SerializationError(_) => "Retry with --format text",
            DemoError::ConfigParseError(_) => {
                "Check the TOML syntax and that every ${VAR} placeholder is set"
            }
            DemoError::PatternError(_) => "Please report this as a bug",
            DemoError::InvalidConfigValueError { .. } => {
                "Fix the value in the configuration file or command line"
            }
            DemoError::DivisionByZero => "Use a non-zero divisor",
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
