//! Response contracts of the service under test. Every field is optional so
//! that an absent field is something a probe classifies, not a decode error.
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ProbeError;
use crate::http::ProbeResponse;

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub(crate) success: Option<bool>,
    pub(crate) data: Option<T>,
}

impl<T> Envelope<T> {
    /// Only an explicit `success: false` counts as a refusal.
    pub(crate) fn not_refused(&self) -> bool {
        self.success != Some(false)
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct HealthBody {
    pub(crate) status: Option<String>,
    pub(crate) uptime: Option<f64>,
    pub(crate) memory: Option<MemoryUsage>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MemoryUsage {
    #[serde(rename = "heapUsed")]
    pub(crate) heap_used: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DatastoreHealth {
    pub(crate) connected: Option<bool>,
    #[serde(rename = "responseTime")]
    pub(crate) response_time: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SessionToken {
    pub(crate) token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatedCapsule {
    pub(crate) capsule: Option<ResourceRef>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResourceRef {
    #[serde(rename = "_id", alias = "id")]
    pub(crate) id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MemoryList {
    pub(crate) memories: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeneratedTitle {
    pub(crate) title: Option<String>,
}

pub(crate) fn decode<T: DeserializeOwned>(
    response: &ProbeResponse,
    endpoint: &str,
) -> Result<T, ProbeError> {
    response
        .json()
        .map_err(|err| ProbeError::malformed(endpoint, err))
}
