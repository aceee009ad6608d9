use std::sync::Arc;
use reqwest::Client;
use serde_json::Value;
use crate::config::config::Config;
use crate::entities::spotify::SpotifyAuthTokenResponse;
use crate::http::spotify::{get_recommendations, request_client_token, request_token, search_artists, search_tracks};
use crate::http::{RecommendationSeed, SpotifyError};

const SCOPES: &str = "user-read-private user-read-email";

/// Orchestrates the token, search and recommendation calls against the
/// Spotify Web API. Holds no token state; a fresh client-credentials token
/// is requested for every recommendation request.
#[derive(Clone)]
pub struct Spotify {
    http: Arc<Client>,
    config: Arc<Config>
}

impl Spotify {
    pub fn new(http: Arc<Client>, config: Arc<Config>) -> Self {
        Self {
            http,
            config
        }
    }

    /// The Spotify authorize URL the browser is redirected to on login.
    pub fn authorize_url(&self) -> Result<String, SpotifyError> {
        let query = serde_urlencoded::to_string([
            ("response_type", "code"),
            ("client_id", self.config.client_id.as_str()),
            ("scope", SCOPES),
            ("redirect_uri", self.config.redirect_url.as_str()),
        ])?;

        Ok(format!("{}/authorize?{}", self.config.accounts_url, query))
    }

    /// Exchanges the grant code delivered to the redirect callback for an
    /// access token, which the caller is expected to store.
    pub async fn exchange_code(&self, code: &str) -> Result<SpotifyAuthTokenResponse, SpotifyError> {
        if !self.config.has_credentials() {
            return Err(SpotifyError::MissingCredentials);
        }

        request_token(&self.http, &self.config.accounts_url, code,
                      &self.config.redirect_url, self.config.get_auth_base64()).await
    }

    async fn client_token(&self) -> Result<String, SpotifyError> {
        if !self.config.has_credentials() {
            return Err(SpotifyError::MissingCredentials);
        }

        let res = request_client_token(&self.http, &self.config.accounts_url,
                                       self.config.get_auth_base64()).await?;

        Ok(res.access_token)
    }

    /// Recommendations seeded by the best match for a track/artist pair.
    /// Best match is unconditionally the first item of the search result.
    pub async fn recommend_by_track(&self, track: &str, artist: &str) -> Result<Vec<Value>, SpotifyError> {
        let token = self.client_token().await?;

        let found = search_tracks(&self.http, &self.config.api_url, &token, track, artist).await?;

        let best_match = found.tracks.items.into_iter().next()
            .ok_or_else(|| SpotifyError::NotFound(format!("track \"{}\" by \"{}\"", track, artist)))?;

        self.recommend(&token, &RecommendationSeed::Tracks(vec![best_match.id])).await
    }

    /// Recommendations seeded by the best match for each artist name. The
    /// searches run strictly sequentially; the first empty or failing search
    /// decides the reported error and no recommendation call is made.
    pub async fn recommend_by_artists(&self, names: &[String]) -> Result<Vec<Value>, SpotifyError> {
        let token = self.client_token().await?;

        let mut seeds = Vec::with_capacity(names.len());

        for name in names {
            let found = search_artists(&self.http, &self.config.api_url, &token, name).await?;

            let best_match = found.artists.items.into_iter().next()
                .ok_or_else(|| SpotifyError::NotFound(format!("artist \"{}\"", name)))?;

            seeds.push(best_match.id);
        }

        self.recommend(&token, &RecommendationSeed::Artists(seeds)).await
    }

    async fn recommend(&self, token: &str, seed: &RecommendationSeed) -> Result<Vec<Value>, SpotifyError> {
        let res = get_recommendations(&self.http, &self.config.api_url, token, seed).await?;

        if res.tracks.is_empty() {
            return Err(SpotifyError::NotFound("recommendations".to_string()));
        }

        Ok(res.tracks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};

    const TOKEN_BODY: &str = r#"{"access_token":"tok","token_type":"Bearer","expires_in":3600}"#;

    fn test_config(server: &ServerGuard) -> Arc<Config> {
        Arc::new(Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
            redirect_url: "http://localhost:8080/spotify/callback".to_string(),
            accounts_url: server.url(),
            api_url: server.url()
        })
    }

    fn spotify(server: &ServerGuard) -> Spotify {
        Spotify::new(Arc::new(Client::new()), test_config(server))
    }

    #[tokio::test]
    async fn recommends_from_first_track_match() {
        let mut server = Server::new_async().await;

        let token = server.mock("POST", "/api/token")
            .match_header("authorization", Matcher::Regex("^Basic ".to_string()))
            .match_body(Matcher::UrlEncoded("grant_type".into(), "client_credentials".into()))
            .with_body(TOKEN_BODY)
            .create_async()
            .await;

        let _search = server.mock("GET", "/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("type".into(), "track".into()),
                Matcher::UrlEncoded("q".into(), "track:Yesterday artist:The Beatles".into()),
            ]))
            .with_body(r#"{"tracks":{"items":[{"id":"abc123","name":"Yesterday"},{"id":"nope","name":"Yesterday - Remastered"}]}}"#)
            .create_async()
            .await;

        let recs = server.mock("GET", "/recommendations")
            .match_query(Matcher::UrlEncoded("seed_tracks".into(), "abc123".into()))
            .with_body(r#"{"tracks":[{"id":"xyz"}]}"#)
            .create_async()
            .await;

        let tracks = spotify(&server).recommend_by_track("Yesterday", "The Beatles").await.unwrap();

        token.assert_async().await;
        recs.assert_async().await;
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0]["id"], "xyz");
    }

    #[tokio::test]
    async fn empty_search_skips_the_recommendation_call() {
        let mut server = Server::new_async().await;

        let _token = server.mock("POST", "/api/token")
            .with_body(TOKEN_BODY)
            .create_async()
            .await;

        let _search = server.mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_body(r#"{"tracks":{"items":[]}}"#)
            .create_async()
            .await;

        let recs = server.mock("GET", "/recommendations")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let err = spotify(&server).recommend_by_track("Yesterday", "Nobody").await.unwrap_err();

        recs.assert_async().await;
        assert!(matches!(err, SpotifyError::NotFound(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn token_failure_stops_before_any_search() {
        let mut server = Server::new_async().await;

        let _token = server.mock("POST", "/api/token")
            .with_status(400)
            .with_body(r#"{"error":"invalid_client"}"#)
            .create_async()
            .await;

        let search = server.mock("GET", "/search")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let err = spotify(&server).recommend_by_track("Yesterday", "The Beatles").await.unwrap_err();

        search.assert_async().await;
        assert!(matches!(err, SpotifyError::Auth(_)));
    }

    #[tokio::test]
    async fn missing_credentials_fail_without_network() {
        let server = Server::new_async().await;

        let config = Arc::new(Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            client_id: String::new(),
            client_secret: String::new(),
            redirect_url: "http://localhost:8080/spotify/callback".to_string(),
            accounts_url: server.url(),
            api_url: server.url()
        });

        let spotify = Spotify::new(Arc::new(Client::new()), config);
        let err = spotify.recommend_by_track("Yesterday", "The Beatles").await.unwrap_err();

        assert!(matches!(err, SpotifyError::MissingCredentials));
    }

    #[tokio::test]
    async fn artist_searches_stop_at_first_miss() {
        let mut server = Server::new_async().await;

        let _token = server.mock("POST", "/api/token")
            .with_body(TOKEN_BODY)
            .create_async()
            .await;

        let _search = server.mock("GET", "/search")
            .match_query(Matcher::UrlEncoded("q".into(), "radiohead".into()))
            .with_body(r#"{"artists":{"items":[{"id":"ar1","name":"Radiohead"}]}}"#)
            .create_async()
            .await;

        let _search = server.mock("GET", "/search")
            .match_query(Matcher::UrlEncoded("q".into(), "unknownband".into()))
            .with_body(r#"{"artists":{"items":[]}}"#)
            .create_async()
            .await;

        let third = server.mock("GET", "/search")
            .match_query(Matcher::UrlEncoded("q".into(), "portishead".into()))
            .expect(0)
            .create_async()
            .await;

        let recs = server.mock("GET", "/recommendations")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let names = ["radiohead".to_string(), "unknownband".to_string(), "portishead".to_string()];
        let err = spotify(&server).recommend_by_artists(&names).await.unwrap_err();

        third.assert_async().await;
        recs.assert_async().await;
        assert!(err.to_string().contains("unknownband"));
    }

    #[tokio::test]
    async fn three_artist_seeds_are_forwarded() {
        let mut server = Server::new_async().await;

        let _token = server.mock("POST", "/api/token")
            .with_body(TOKEN_BODY)
            .create_async()
            .await;

        let mut search_mocks = Vec::new();

        for (name, id) in [("radiohead", "ar1"), ("portishead", "ar2"), ("massiveattack", "ar3")] {
            let mock = server.mock("GET", "/search")
                .match_query(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("type".into(), "artist".into()),
                    Matcher::UrlEncoded("q".into(), name.into()),
                ]))
                .with_body(format!(r#"{{"artists":{{"items":[{{"id":"{}","name":"{}"}}]}}}}"#, id, name))
                .create_async()
                .await;

            search_mocks.push(mock);
        }

        let recs = server.mock("GET", "/recommendations")
            .match_query(Matcher::UrlEncoded("seed_artists".into(), "ar1,ar2,ar3".into()))
            .with_body(r#"{"tracks":[{"id":"t1"},{"id":"t2"}]}"#)
            .create_async()
            .await;

        let names = ["radiohead".to_string(), "portishead".to_string(), "massiveattack".to_string()];
        let tracks = spotify(&server).recommend_by_artists(&names).await.unwrap();

        recs.assert_async().await;
        assert_eq!(tracks.len(), 2);
    }
}
