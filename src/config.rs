// Configuration for the gateway client. Everything the HTTP layer needs is
// carried in one explicit struct so nothing hides in module-level statics;
// `main` builds it once and hands it to `GatewayClient::new`.

use std::env;
use std::time::Duration;

/// Environment variable overriding the service base URL.
pub const API_URL_VAR: &str = "BOOKER_API_URL";
/// Environment variable overriding the auth username.
pub const USERNAME_VAR: &str = "BOOKER_USERNAME";
/// Environment variable overriding the auth password.
pub const PASSWORD_VAR: &str = "BOOKER_PASSWORD";

const DEFAULT_API_URL: &str = "https://restful-booker.herokuapp.com";
const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "password123";

// Every request carries the same fixed deadline; there is no retry layer
// on top, a slow call simply fails the current operation.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the remote booking service.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub timeout: Duration,
}

impl Config {
    /// Build a configuration from explicit values. A trailing slash on the
    /// base URL is trimmed so endpoint paths can be appended verbatim.
    pub fn new(base_url: &str, username: &str, password: &str) -> Self {
        Config {
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            password: password.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Read the configuration from `BOOKER_API_URL`, `BOOKER_USERNAME` and
    /// `BOOKER_PASSWORD`, falling back to the public sandbox service and
    /// its documented credentials.
    pub fn from_env() -> Self {
        let base_url = env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.into());
        let username = env::var(USERNAME_VAR).unwrap_or_else(|_| DEFAULT_USERNAME.into());
        let password = env::var(PASSWORD_VAR).unwrap_or_else(|_| DEFAULT_PASSWORD.into());
        Config::new(&base_url, &username, &password)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_API_URL, DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}
