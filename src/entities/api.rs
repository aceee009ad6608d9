use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct RecommendByTrackRequest {
    #[serde(default)]
    pub track: String,
    #[serde(default)]
    pub artist: String
}

#[derive(Debug, Deserialize)]
pub struct RecommendByArtistsRequest {
    #[serde(default)]
    pub artist1: String,
    #[serde(default)]
    pub artist2: String,
    #[serde(default)]
    pub artist3: String
}

#[derive(Serialize)]
pub struct RecommendationsBody {
    pub tracks: Vec<Value>
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String
}
