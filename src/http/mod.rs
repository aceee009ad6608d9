use reqwest::StatusCode;
use thiserror::Error;

pub mod spotify;

/// Seed identifiers for a recommendation request, either track ids or
/// artist ids. Spotify accepts up to five seeds per request.
pub enum RecommendationSeed {
    Tracks(Vec<String>),
    Artists(Vec<String>)
}

#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("Spotify client id/secret not configured")]
    MissingCredentials,

    #[error("token exchange failed: {0}")]
    Auth(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Spotify API returned status {0}")]
    Status(StatusCode),

    #[error("Spotify request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to encode request payload: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}
