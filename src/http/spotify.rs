use reqwest::Client;
use crate::entities::spotify::{SpotifyArtistSearchResponse, SpotifyAuthTokenPayload, SpotifyAuthTokenResponse, SpotifyClientTokenPayload, SpotifyRecommendationsResponse, SpotifyTrackSearchResponse};
use crate::http::{RecommendationSeed, SpotifyError};

/// Exchanges a one-time authorization grant code for an access token.
pub async fn request_token(http: &Client, accounts_url: &str, code: &str, redirect_uri: &str, auth: String) -> Result<SpotifyAuthTokenResponse, SpotifyError> {
    let payload = SpotifyAuthTokenPayload {
        code: code.to_string(),
        // Only used by Spotify for validation, must match the authorize call.
        redirect_uri: redirect_uri.to_string(),
        grant_type: "authorization_code".to_string()
    };

    exchange_token(http, accounts_url, serde_urlencoded::to_string(payload)?, auth).await
}

/// Obtains an access token directly from the client credentials, without
/// user interaction.
pub async fn request_client_token(http: &Client, accounts_url: &str, auth: String) -> Result<SpotifyAuthTokenResponse, SpotifyError> {
    let payload = SpotifyClientTokenPayload {
        grant_type: "client_credentials".to_string()
    };

    exchange_token(http, accounts_url, serde_urlencoded::to_string(payload)?, auth).await
}

async fn exchange_token(http: &Client, accounts_url: &str, payload_data: String, auth: String) -> Result<SpotifyAuthTokenResponse, SpotifyError> {
    let res = http.post(format!("{}/api/token", accounts_url))
        .header(reqwest::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(reqwest::header::AUTHORIZATION, format!("Basic {}", auth))
        .body(payload_data)
        .send()
        .await?;

    let code = res.status();

    if !code.is_success() {
        return Err(SpotifyError::Auth(format!("status {}", code)));
    }

    res.json().await.map_err(|err| SpotifyError::Auth(err.to_string()))
}

pub async fn search_tracks(http: &Client, api_url: &str, token: &str, track: &str, artist: &str) -> Result<SpotifyTrackSearchResponse, SpotifyError> {
    let query = format!("track:{} artist:{}", track, artist);

    let res = http.get(format!("{}/search", api_url))
        .query(&[("q", query.as_str()), ("type", "track"), ("limit", "1")])
        .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token))
        .send()
        .await?;

    let code = res.status();

    if !code.is_success() {
        return Err(SpotifyError::Status(code));
    }

    Ok(res.json().await?)
}

pub async fn search_artists(http: &Client, api_url: &str, token: &str, name: &str) -> Result<SpotifyArtistSearchResponse, SpotifyError> {
    let res = http.get(format!("{}/search", api_url))
        .query(&[("q", name), ("type", "artist"), ("limit", "1")])
        .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token))
        .send()
        .await?;

    let code = res.status();

    if !code.is_success() {
        return Err(SpotifyError::Status(code));
    }

    Ok(res.json().await?)
}

pub async fn get_recommendations(http: &Client, api_url: &str, token: &str, seed: &RecommendationSeed) -> Result<SpotifyRecommendationsResponse, SpotifyError> {
    let (param, ids) = match seed {
        RecommendationSeed::Tracks(ids) => ("seed_tracks", ids),
        RecommendationSeed::Artists(ids) => ("seed_artists", ids)
    };

    let res = http.get(format!("{}/recommendations", api_url))
        .query(&[(param, ids.join(",").as_str()), ("limit", "20")])
        .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token))
        .send()
        .await?;

    let code = res.status();

    if !code.is_success() {
        return Err(SpotifyError::Status(code));
    }

    Ok(res.json().await?)
}
