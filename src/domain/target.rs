use url::Url;

use crate::error::ValidationError;

/// Where the deployment under test lives. Resolved once per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetConfig {
    api_base: String,
    client_base: String,
}

impl TargetConfig {
    /// Validates both base URLs.
    ///
    /// # Errors
    ///
    /// Returns an error when either URL does not parse or is not http(s).
    pub fn new(api_base: &str, client_base: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            api_base: normalize_base("api-url", api_base)?,
            client_base: normalize_base("client-url", client_base)?,
        })
    }

    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    #[must_use]
    pub fn client_base(&self) -> &str {
        &self.client_base
    }

    /// Joins an absolute endpoint path onto the API base, keeping any path
    /// prefix the base carries.
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

fn normalize_base(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    let parsed = Url::parse(trimmed).map_err(|err| ValidationError::InvalidUrl {
        field,
        value: value.to_owned(),
        source: err,
    })?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ValidationError::UnsupportedScheme {
                field,
                value: value.to_owned(),
                scheme: other.to_owned(),
            });
        }
    }
    Ok(trimmed.trim_end_matches('/').to_owned())
}
