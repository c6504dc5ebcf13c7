use thiserror::Error;

#[derive(Error, Debug)]
pub enum LqError {
    #[error("unknown variable: {0}")]
    UnknownVariable(String),

    #[error("invalid CAC method: {0} (use logarithmic|piecewise)")]
    InvalidMethod(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("missing field: {0}")]
    MissingField(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, LqError>;
