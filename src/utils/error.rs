use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Profile parse error: {0}")]
    ProfileParseError(#[from] toml::de::Error),

    #[error("Unknown city: {value}")]
    UnknownCity { value: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, LedgerError>;
