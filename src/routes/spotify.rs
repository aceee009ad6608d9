use actix_web::{HttpResponse, get, web};
use log::info;
use reqwest::header;
use crate::entities::spotify::SpotifyCallbackQuery;
use crate::routes::{ApiError, WebData};

#[get("/spotify/login")]
pub async fn spotify_login(data: web::Data<WebData>) -> Result<HttpResponse, ApiError> {
    let url = data.spotify.authorize_url()?;

    Ok(HttpResponse::Found().insert_header((header::LOCATION, url)).finish())
}

#[get("/spotify/callback")]
pub async fn spotify_callback(query: web::Query<SpotifyCallbackQuery>, data: web::Data<WebData>) -> Result<HttpResponse, ApiError> {
    let token = data.spotify.exchange_code(&query.code).await?;

    info!("authorization code exchanged, token stored for this session");

    *data.session.lock().await = Some(token);

    Ok(HttpResponse::Ok().body("You're now authenticated, the access token has been stored for this session."))
}
