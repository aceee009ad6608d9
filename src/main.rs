use std::sync::Arc;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use log::{LevelFilter, info};
use simple_logger::SimpleLogger;
use tokio::sync::Mutex;
use crate::config::config::Config;
use crate::managers::spotify::Spotify;
use crate::routes::WebData;
use crate::routes::recommendations::{recommend_by_artists, recommend_by_track};
use crate::routes::spotify::{spotify_callback, spotify_login};

mod config;
mod entities;
mod http;
mod managers;
mod routes;

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../views/index.html"))
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).env().with_colors(true).init().unwrap();

    let _ = dotenvy::dotenv();

    let config = Arc::new(Config::from_env());
    let client = Arc::new(reqwest::Client::new());

    let web_data = WebData {
        spotify: Spotify::new(client, config.clone()),
        session: Arc::new(Mutex::new(None))
    };

    info!("Spotify recommendation proxy listening on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(web_data.clone()))
            .service(index)
            .service(spotify_login)
            .service(spotify_callback)
            .service(recommend_by_track)
            .service(recommend_by_artists)
    })
        .bind(config.get_webserver_address())?
        .run()
        .await
}
