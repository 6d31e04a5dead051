use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport or status failure talking to Nominatim/Overpass
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The geocoder returned nothing usable as an area
    #[error("No boundary found for {0}")]
    NoBoundary(String),

    /// A service answered with a body we cannot interpret
    #[error("Unexpected response: {0}")]
    Response(String),

    /// A single street record could not be read
    #[error("Invalid street record: {0}")]
    InvalidRecord(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
