use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Invalid zone: {zone} (expected 1-9)")]
    InvalidZone { zone: i64 },

    #[error("Unknown pitch type code: {0}")]
    UnknownPitchType(String),

    #[error("Unknown handedness: {0}")]
    UnknownHandedness(String),

    #[error("Missing location: {0} needs a zone position or a surface mark")]
    MissingLocation(&'static str),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unsupported schema version: {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    /// Errors caused by the caller's input rather than by configuration.
    pub fn is_input_error(&self) -> bool {
        match self {
            CommandError::InvalidZone { .. } => true,
            CommandError::UnknownPitchType(_) => true,
            CommandError::UnknownHandedness(_) => true,
            CommandError::MissingLocation(_) => true,
            CommandError::SchemaVersion { .. } => true,
            CommandError::Json(_) => true,
            CommandError::InvalidConfig(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CommandError>;
