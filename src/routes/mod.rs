use std::sync::Arc;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;
use tokio::sync::Mutex;
use crate::entities::api::ErrorBody;
use crate::entities::spotify::SpotifyAuthTokenResponse;
use crate::http::SpotifyError;
use crate::managers::spotify::Spotify;

pub mod recommendations;
pub mod spotify;

#[derive(Clone)]
pub struct WebData {
    pub spotify: Spotify,
    /// Last token obtained through the browser login flow. Process-local,
    /// single-user by design.
    pub session: Arc<Mutex<Option<SpotifyAuthTokenResponse>>>
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Spotify(#[from] SpotifyError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Spotify(SpotifyError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Spotify(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        error!("{}", self);

        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.to_string()
        })
    }
}
