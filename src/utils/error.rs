use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("File operation failed for '{path}': {source}")]
    FileError {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid HSL value '{value}' on line {line}: {reason}")]
    InvalidHslError {
        line: usize,
        value: String,
        reason: String,
    },

    #[error("Invalid version string '{value}': {reason}")]
    VersionFormatError { value: String, reason: String },

    #[error("Missing field '{field}' in '{path}'")]
    MissingFieldError { path: String, field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ThemeError {
    /// 提供給使用者的修復建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ThemeError::FileError { .. } => {
                "Check that the file exists and is readable/writable"
            }
            ThemeError::JsonError(_) => "Check the JSON syntax of the target file",
            ThemeError::InvalidHslError { .. } => {
                "Expected '<degrees> <percent>% <percent>%', e.g. '142.1 76.2% 36.3%'"
            }
            ThemeError::VersionFormatError { .. } => {
                "Use 'major.minor.patch' with integer components, e.g. '1.2.3'"
            }
            ThemeError::MissingFieldError { .. } => {
                "Add a top-level \"version\" string field to the file"
            }
            ThemeError::InvalidConfigValueError { .. } => {
                "Check the command-line arguments (see --help)"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ThemeError>;
