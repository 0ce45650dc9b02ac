//! Client configuration: API key, endpoint, timeout and retry policy.
//!
//! A `ClientConfig` is built once and then only read. Values come from explicit
//! construction, a TOML file, environment variables, or a mix (file first,
//! environment overriding).
//!
//! ```toml
//! api_key = "..."
//! base_url = "https://api.langbridge.dev/v1"
//! timeout_secs = 30
//! max_retries = 2
//! retry_backoff_ms = 500
//! ```

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use zeroize::Zeroizing;

use crate::client::ApiError;

/// Default service endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.langbridge.dev/v1";
/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default delay unit between retries.
pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "LANGBRIDGE_API_KEY";
/// Environment variable overriding the endpoint.
pub const ENV_BASE_URL: &str = "LANGBRIDGE_BASE_URL";
/// Environment variable overriding the timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "LANGBRIDGE_TIMEOUT_SECS";
/// Environment variable overriding the retry count.
pub const ENV_MAX_RETRIES: &str = "LANGBRIDGE_MAX_RETRIES";

/// API credential, wiped from memory on drop.
#[derive(Clone)]
pub struct ApiKey(Zeroizing<String>);

impl ApiKey {
    /// What: Wrap a raw key, rejecting empty or whitespace-only input.
    ///
    /// # Errors
    /// - Returns `ApiError::MissingApiKey` when the key is blank
    pub fn new(raw: impl Into<String>) -> Result<Self, ApiError> {
        let raw = Zeroizing::new(raw.into());
        if raw.trim().is_empty() {
            return Err(ApiError::MissingApiKey);
        }
        Ok(Self(raw))
    }

    /// What: Borrow the secret for use in a request header.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Immutable settings shared by every call made through one client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Credential sent with each request.
    pub api_key: ApiKey,
    /// Service endpoint without trailing operation path.
    pub base_url: String,
    /// Per-request timeout enforced by the transport.
    pub timeout: Duration,
    /// Extra attempts for retryable failures (0 = single attempt).
    pub max_retries: u32,
    /// Delay unit; attempt `n` waits `n * retry_backoff`.
    pub retry_backoff: Duration,
}

/// On-disk representation of the configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    /// API key.
    api_key: Option<String>,
    /// Service endpoint.
    base_url: Option<String>,
    /// Timeout in seconds.
    timeout_secs: Option<u64>,
    /// Retry count.
    max_retries: Option<u32>,
    /// Backoff unit in milliseconds.
    retry_backoff_ms: Option<u64>,
}

impl ClientConfig {
    /// What: Create a configuration with default endpoint, timeout and retries.
    ///
    /// Inputs:
    /// - `api_key`: Raw API key
    ///
    /// # Errors
    /// - Returns `ApiError::MissingApiKey` when the key is blank
    pub fn new(api_key: impl Into<String>) -> Result<Self, ApiError> {
        Ok(Self {
            api_key: ApiKey::new(api_key)?,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: 0,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
        })
    }

    /// What: Replace the endpoint (trailing slashes are dropped).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// What: Replace the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// What: Replace the retry count and backoff unit.
    #[must_use]
    pub const fn with_retries(mut self, max_retries: u32, backoff: Duration) -> Self {
        self.max_retries = max_retries;
        self.retry_backoff = backoff;
        self
    }

    /// What: Build a configuration purely from environment variables.
    ///
    /// # Errors
    /// - Returns `ApiError::MissingApiKey` when `LANGBRIDGE_API_KEY` is unset or blank
    /// - Returns `ApiError::Config` when a numeric variable does not parse
    pub fn from_env() -> Result<Self, ApiError> {
        Self::layered(FileConfig::default(), |name| env::var(name).ok())
    }

    /// What: Build a configuration from a TOML file, without environment overrides.
    ///
    /// # Errors
    /// - Returns `ApiError::Config` when the file cannot be read or parsed
    /// - Returns `ApiError::MissingApiKey` when the file has no usable key
    pub fn from_file(path: &Path) -> Result<Self, ApiError> {
        Self::layered(read_file_config(path)?, |_| None)
    }

    /// What: Build a configuration from an optional file plus environment overrides.
    ///
    /// Inputs:
    /// - `explicit_path`: File given by the caller; when `None` the default
    ///   location is used if it exists
    ///
    /// # Errors
    /// - Returns `ApiError::Config` when an explicit file is unreadable or invalid
    /// - Returns `ApiError::MissingApiKey` when no layer provides a key
    ///
    /// Details:
    /// - Environment variables win over file values
    /// - A missing default file is not an error
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ApiError> {
        let file = match explicit_path {
            Some(path) => read_file_config(path)?,
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => {
                    tracing::debug!(path = %path.display(), "loading default config file");
                    read_file_config(&path)?
                }
                None => FileConfig::default(),
            },
        };
        Self::layered(file, |name| env::var(name).ok())
    }

    /// What: Merge file values with a variable lookup (lookup wins).
    fn layered(
        file: FileConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ApiError> {
        let api_key = lookup(ENV_API_KEY).or(file.api_key).unwrap_or_default();
        let mut config = Self::new(api_key)?;

        if let Some(base_url) = lookup(ENV_BASE_URL).or(file.base_url) {
            config = config.with_base_url(base_url);
        }
        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => Some(parse_number::<u64>(ENV_TIMEOUT_SECS, &raw)?),
            None => file.timeout_secs,
        };
        if let Some(secs) = timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        let max_retries = match lookup(ENV_MAX_RETRIES) {
            Some(raw) => Some(parse_number::<u32>(ENV_MAX_RETRIES, &raw)?),
            None => file.max_retries,
        };
        if let Some(retries) = max_retries {
            config.max_retries = retries;
        }
        if let Some(ms) = file.retry_backoff_ms {
            config.retry_backoff = Duration::from_millis(ms);
        }
        Ok(config)
    }
}

/// What: Parse a numeric setting, naming the variable on failure.
fn parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, ApiError> {
    raw.trim().parse().map_err(|_| {
        ApiError::Config(format!("{name} must be a non-negative integer, got '{raw}'"))
    })
}

/// What: Read and parse a TOML configuration file.
fn read_file_config(path: &Path) -> Result<FileConfig, ApiError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ApiError::Config(format!("failed to read {}: {e}", path.display())))?;
    toml::from_str(&contents)
        .map_err(|e| ApiError::Config(format!("failed to parse {}: {e}", path.display())))
}

/// What: Default configuration file location.
///
/// Output:
/// - `$XDG_CONFIG_HOME/langbridge/config.toml`, else `$HOME/.config/langbridge/config.toml`
/// - `None` when neither variable is set
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    let base = env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| env::var("HOME").ok().map(|h| Path::new(&h).join(".config")))?;
    Some(base.join("langbridge").join("config.toml"))
}
