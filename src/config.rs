//! Startup configuration
//!
//! Everything the process needs from its environment is read once here and
//! frozen into a [`Config`], which is then passed by reference to the
//! components that need it. Nothing else reads environment variables.
//!
//! A `.env` file, if present, is merged into the environment before the
//! arguments are parsed. Variables that are already set win.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const SPOTIFY_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com";

pub const DEFAULT_MARKET: &str = "US";
pub const DEFAULT_SEARCH_LIMIT: u8 = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_DIR: &str = ".logs";

/// Load `KEY=value` pairs from the nearest `.env` file without overriding
/// variables that are already set. Returns the file that was read, if any.
pub fn load_env_file() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Command-line arguments accepted by the `spotify-search` binary.
#[derive(Parser)]
#[command(
    name = "spotify-search",
    version,
    about = "Search the Spotify catalog from the terminal"
)]
pub struct CliArgs {
    #[arg(
        long,
        env = "CLIENT_ID",
        hide_env_values = true,
        help = "Spotify application client id"
    )]
    pub client_id: String,
    #[arg(
        long,
        env = "CLIENT_SECRET",
        hide_env_values = true,
        help = "Spotify application client secret"
    )]
    pub client_secret: String,
    #[arg(
        long,
        env = "SPOTIFY_MARKET",
        default_value = DEFAULT_MARKET,
        help = "Market (ISO 3166-1 alpha-2) used to filter search results"
    )]
    pub market: String,
    #[arg(
        long,
        env = "SPOTIFY_SEARCH_LIMIT",
        default_value_t = DEFAULT_SEARCH_LIMIT,
        value_parser = clap::value_parser!(u8).range(1..=50),
        help = "Number of results fetched per search"
    )]
    pub limit: u8,
    #[arg(
        long = "timeout",
        env = "SPOTIFY_TIMEOUT_SECS",
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Connect and read timeout for every HTTP request"
    )]
    pub timeout_secs: u64,
    #[arg(
        long,
        env = "SPOTIFY_SEARCH_LOG_DIR",
        value_name = "DIR",
        default_value = DEFAULT_LOG_DIR,
        help = "Directory for the rolling log files"
    )]
    pub log_dir: PathBuf,
    #[arg(long, hide = true, default_value = SPOTIFY_ACCOUNTS_URL)]
    pub accounts_url: String,
    #[arg(long, hide = true, default_value = SPOTIFY_API_URL)]
    pub api_url: String,
}

/// Client-credentials pair for the Spotify accounts service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Immutable process configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub credentials: Credentials,
    pub market: String,
    pub limit: u8,
    pub timeout: Duration,
    pub log_dir: PathBuf,
    pub accounts_url: String,
    pub api_url: String,
}

impl Config {
    /// Configuration with default endpoints, market and limits.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            market: DEFAULT_MARKET.to_string(),
            limit: DEFAULT_SEARCH_LIMIT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            accounts_url: SPOTIFY_ACCOUNTS_URL.to_string(),
            api_url: SPOTIFY_API_URL.to_string(),
        }
    }

    pub fn with_accounts_url(mut self, url: impl Into<String>) -> Self {
        self.accounts_url = normalize_base_url(url.into());
        self
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = normalize_base_url(url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the shared HTTP client used for the token exchange and searches.
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        self.http_client_builder().build()
    }

    pub(crate) fn http_client_builder(&self) -> reqwest::ClientBuilder {
        reqwest::Client::builder()
            .user_agent(concat!("spotify-search/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(self.timeout)
            .timeout(self.timeout)
    }
}

impl From<CliArgs> for Config {
    fn from(args: CliArgs) -> Self {
        Self {
            credentials: Credentials::new(args.client_id, args.client_secret),
            market: args.market,
            limit: args.limit,
            timeout: Duration::from_secs(args.timeout_secs),
            log_dir: args.log_dir,
            accounts_url: normalize_base_url(args.accounts_url),
            api_url: normalize_base_url(args.api_url),
        }
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
