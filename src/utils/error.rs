use crate::core::prefix::Prefix;
use thiserror::Error;

/// 解析使用者輸入時可能發生的錯誤。
///
/// Every variant is recoverable: the caller shows the message and waits for
/// the next line. Format errors carry the usage string of the command that
/// rejected the input so the message can echo it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("No command entered")]
    EmptyInput,

    #[error("Unknown command: {keyword}")]
    UnknownCommand { keyword: String },

    #[error("Invalid command format! Missing mandatory field: {} ({prefix})\n{usage}", .prefix.field())]
    MissingMandatoryField {
        prefix: Prefix,
        usage: &'static str,
    },

    #[error("Invalid command format! Unexpected text before the first field: \"{preamble}\"\n{usage}")]
    UnexpectedPreamble {
        preamble: String,
        usage: &'static str,
    },

    #[error("Invalid command format! {reason}\n{usage}")]
    InvalidCommandFormat {
        reason: String,
        usage: &'static str,
    },

    #[error("Invalid index \"{raw}\": index must be a positive whole number")]
    InvalidIndex { raw: String },

    #[error("Invalid {field} \"{value}\": {reason}")]
    InvalidFieldFormat {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// Fieldless view of [`ParseError`], for callers that only branch on the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    EmptyInput,
    UnknownCommand,
    MissingMandatoryField,
    UnexpectedPreamble,
    InvalidCommandFormat,
    InvalidIndex,
    InvalidFieldFormat,
}

impl ParseError {
    pub fn invalid_field(field: &'static str, value: &str, reason: impl Into<String>) -> Self {
        ParseError::InvalidFieldFormat {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::EmptyInput => ParseErrorKind::EmptyInput,
            ParseError::UnknownCommand { .. } => ParseErrorKind::UnknownCommand,
            ParseError::MissingMandatoryField { .. } => ParseErrorKind::MissingMandatoryField,
            ParseError::UnexpectedPreamble { .. } => ParseErrorKind::UnexpectedPreamble,
            ParseError::InvalidCommandFormat { .. } => ParseErrorKind::InvalidCommandFormat,
            ParseError::InvalidIndex { .. } => ParseErrorKind::InvalidIndex,
            ParseError::InvalidFieldFormat { .. } => ParseErrorKind::InvalidFieldFormat,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ParseError::EmptyInput | ParseError::UnknownCommand { .. } => {
                "Type 'help' to see the available commands"
            }
            ParseError::MissingMandatoryField { .. } => {
                "Supply every mandatory field shown in the usage line"
            }
            ParseError::UnexpectedPreamble { .. } => {
                "Remove the text before the first field marker"
            }
            ParseError::InvalidCommandFormat { .. } => "Follow the usage line shown above",
            ParseError::InvalidIndex { .. } => {
                "Use the index number shown next to the applicant in the list"
            }
            ParseError::InvalidFieldFormat { .. } => "Correct the highlighted field and try again",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid configuration value for {field}: \"{value}\" ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::IoError(_) => ErrorCategory::Io,
            AppError::SerializationError(_) => ErrorCategory::Serialization,
            AppError::ConfigParseError(_) | AppError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            AppError::Parse(_) => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 輸入錯誤只影響單一指令
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Serialization => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::IoError(_) => "Check that the terminal or input file is readable",
            AppError::SerializationError(_) => "Switch the output format to text",
            AppError::ConfigParseError(_) => "Make sure the configuration file is valid TOML",
            AppError::InvalidConfigValue { .. } => {
                "Fix the configuration value named in the message"
            }
            AppError::Parse(e) => e.recovery_suggestion(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Parse(e) => e.to_string(),
            AppError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration problem in '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
pub type ParseResult<T> = std::result::Result<T, ParseError>;
