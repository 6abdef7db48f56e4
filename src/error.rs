use thiserror::Error;

/// Errors that can occur while loading, querying or exporting GDP data.
#[derive(Error, Debug)]
pub enum GdpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Excel error: {0}")]
    Excel(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown entity: '{0}'")]
    UnknownEntity(String),

    #[error("Reconciliation error: {0}")]
    Reconciliation(String),

    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<rust_xlsxwriter::XlsxError> for GdpError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        GdpError::Excel(e.to_string())
    }
}

#[cfg(feature = "live-fx")]
impl From<reqwest::Error> for GdpError {
    fn from(e: reqwest::Error) -> Self {
        GdpError::Http(e.to_string())
    }
}
