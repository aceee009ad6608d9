use std::env;
use log::warn;

const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

pub struct Config {
    pub host: String,
    pub port: u16,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub accounts_url: String,
    pub api_url: String
}

fn env_any(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| env::var(key).ok().filter(|val| !val.is_empty()))
}

impl Config {
    /// Loads the configuration from the process environment. Missing client
    /// credentials are a warning rather than a startup failure; token requests
    /// made without them fail per request instead.
    pub fn from_env() -> Self {
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok()).unwrap_or(8080);

        let client_id = env_any(&["CLIENT_ID", "SPOTIFY_CLIENT_ID"]).unwrap_or_default();
        let client_secret = env_any(&["CLIENT_SECRET", "SPOTIFY_CLIENT_SECRET"]).unwrap_or_default();

        if client_id.is_empty() || client_secret.is_empty() {
            warn!("Spotify client id/secret not configured, token requests will fail");
        }

        let redirect_url = env_any(&["REDIRECT_URL", "REDIRECT_URI"])
            .unwrap_or_else(|| format!("http://localhost:{}/spotify/callback", port));

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            client_id,
            client_secret,
            redirect_url,
            accounts_url: env_any(&["SPOTIFY_ACCOUNTS_URL"])
                .unwrap_or_else(|| DEFAULT_ACCOUNTS_URL.to_string()),
            api_url: env_any(&["SPOTIFY_API_URL"])
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }

    pub fn get_auth_base64(&self) -> String {
        base64::encode(format!("{}:{}", &self.client_id, &self.client_secret))
    }

    pub fn get_webserver_address(&self) -> (String, u16) {
        (String::from(&self.host), self.port)
    }
}
