pub(crate) const DEFAULT_USER_AGENT: &str = concat!("launchcheck/", env!("CARGO_PKG_VERSION"));

/// API base URL used when neither `--api-url` nor `API_URL` is set.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";
/// Client base URL used when neither `--client-url` nor `CLIENT_URL` is set.
pub const DEFAULT_CLIENT_URL: &str = "http://localhost:5173";
