//! The ten readiness probes and the context they run in.
mod accounts;
mod ai;
mod auth;
mod client_app;
mod content;
mod context;
mod datastore;
mod health;
mod performance;
mod realtime;
mod security;
mod shapes;
mod upload;


use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ProbeError;

pub use ai::AiProbe;
pub use auth::AuthProbe;
pub use client_app::ClientAppProbe;
pub use content::ContentProbe;
pub use context::ProbeContext;
pub use datastore::DatastoreProbe;
pub use health::HealthProbe;
pub use performance::PerformanceProbe;
pub use realtime::RealtimeProbe;
pub use security::SecurityProbe;
pub use upload::UploadProbe;

/// One named group of checks.
///
/// A probe records zero or more outcomes through its context. Returning an
/// error ends the probe early; the session records it as a single Fail.
#[async_trait]
pub trait Probe: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(&self, ctx: &ProbeContext) -> Result<(), ProbeError>;
}

/// Every probe, in the order a session runs them.
#[must_use]
pub fn launch_probes() -> Vec<Arc<dyn Probe>> {
    vec![
        Arc::new(HealthProbe),
        Arc::new(DatastoreProbe),
        Arc::new(AuthProbe),
        Arc::new(ContentProbe),
        Arc::new(UploadProbe),
        Arc::new(RealtimeProbe),
        Arc::new(AiProbe),
        Arc::new(SecurityProbe),
        Arc::new(PerformanceProbe),
        Arc::new(ClientAppProbe),
    ]
}
