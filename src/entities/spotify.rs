use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct SpotifyCallbackQuery {
    pub code: String
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SpotifyAuthTokenPayload {
    pub code: String,
    pub redirect_uri: String,
    pub grant_type: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SpotifyClientTokenPayload {
    pub grant_type: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SpotifyAuthTokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i32,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub refresh_token: Option<String>
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SpotifyArtist {
    pub id: String,
    pub name: String
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SpotifyTrack {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SpotifyArtist>
}

#[derive(Deserialize, Serialize, Debug)]
pub struct SpotifyTrackPage {
    pub items: Vec<SpotifyTrack>
}

#[derive(Deserialize, Serialize)]
pub struct SpotifyArtistPage {
    pub items: Vec<SpotifyArtist>
}

#[derive(Deserialize, Serialize, Debug)]
pub struct SpotifyTrackSearchResponse {
    pub tracks: SpotifyTrackPage
}

#[derive(Deserialize, Serialize)]
pub struct SpotifyArtistSearchResponse {
    pub artists: SpotifyArtistPage
}

/// Recommended tracks are kept as raw JSON values so the upstream payload is
/// passed through to the caller verbatim.
#[derive(Deserialize, Serialize)]
pub struct SpotifyRecommendationsResponse {
    pub tracks: Vec<Value>
}
