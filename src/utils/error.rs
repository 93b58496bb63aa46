use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarpError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON config error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML config error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid config value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing config value for {field}")]
    MissingConfigError { field: String },

    #[error("Duplicate command name: {name}")]
    DuplicateCommandError { name: String },
}

pub type Result<T> = std::result::Result<T, WarpError>;
