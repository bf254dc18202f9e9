use std::time::Duration;

/// Hostname probed when the user does not name one.
pub const DEFAULT_HOST: &str = "google.com";

/// Per-probe request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Measurement endpoint. `{id}` is replaced by the vantage point's remote id.
pub const DEFAULT_ENDPOINT: &str = "http://{id}-ping.vultr.com/ajax.php";

/// Placeholder substituted in [`Config::endpoint`].
pub const ENDPOINT_ID_PLACEHOLDER: &str = "{id}";

#[derive(Debug, Clone)]
pub struct Config {
    /// Host every vantage point pings.
    pub host: String,
    /// Applied to each probe request individually, never to the whole batch.
    pub timeout: Duration,
    /// URL template of the measurement endpoint.
    pub endpoint: String,
    /// 0 prints everything, 1 drops headers and the spinner, 2 keeps only the
    /// table and warnings.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            timeout: DEFAULT_TIMEOUT,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            quiet: 0,
        }
    }
}

impl Config {
    /// Builds the measurement URL for one vantage point.
    pub fn endpoint_for(&self, remote_id: &str) -> String {
        self.endpoint.replace(ENDPOINT_ID_PLACEHOLDER, remote_id)
    }
}
