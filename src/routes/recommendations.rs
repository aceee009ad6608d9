use actix_web::{HttpResponse, post, web};
use serde::de::DeserializeOwned;
use crate::entities::api::{RecommendByArtistsRequest, RecommendByTrackRequest, RecommendationsBody};
use crate::routes::{ApiError, WebData};

// Bodies are parsed by hand rather than through the Json extractor so every
// rejection goes out with the same {"message": ...} shape.
fn parse_body<T: DeserializeOwned>(body: &web::Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body)
        .map_err(|err| ApiError::Validation(format!("invalid request body: {}", err)))
}

fn require_field(value: &str, name: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("missing field \"{}\"", name)));
    }

    Ok(())
}

#[post("/recommendations")]
pub async fn recommend_by_track(body: web::Bytes, data: web::Data<WebData>) -> Result<HttpResponse, ApiError> {
    let request: RecommendByTrackRequest = parse_body(&body)?;

    require_field(&request.track, "track")?;
    require_field(&request.artist, "artist")?;

    let tracks = data.spotify.recommend_by_track(&request.track, &request.artist).await?;

    Ok(HttpResponse::Ok().json(RecommendationsBody { tracks }))
}

#[post("/recommendations/artists")]
pub async fn recommend_by_artists(body: web::Bytes, data: web::Data<WebData>) -> Result<HttpResponse, ApiError> {
    let request: RecommendByArtistsRequest = parse_body(&body)?;

    require_field(&request.artist1, "artist1")?;
    require_field(&request.artist2, "artist2")?;
    require_field(&request.artist3, "artist3")?;

    let names = [request.artist1, request.artist2, request.artist3];
    let tracks = data.spotify.recommend_by_artists(&names).await?;

    Ok(HttpResponse::Ok().json(RecommendationsBody { tracks }))
}
