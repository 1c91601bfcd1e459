use async_trait::async_trait;

use crate::error::ProbeError;
use crate::http::RequestOptions;

use super::context::ProbeContext;
use super::Probe;

const REALTIME_PATH: &str = "/socket.io/";

/// Reachability of the real-time endpoint. Only a refused connection proves
/// the server is absent; other failures are inconclusive.
pub struct RealtimeProbe;

#[async_trait]
impl Probe for RealtimeProbe {
    fn name(&self) -> &'static str {
        "Real-time channel"
    }

    async fn run(&self, ctx: &ProbeContext) -> Result<(), ProbeError> {
        let url = ctx.target().api_url(REALTIME_PATH);
        let result = ctx
            .client()
            .get(&url, RequestOptions::new().timeout(ctx.timeouts().realtime))
            .await;
        match result {
            Ok(response) if response.status() == 200 => ctx.pass("Real-time server available"),
            Ok(response) if response.status() >= 400 => ctx.warn(format!(
                "Real-time check inconclusive (status {})",
                response.status()
            )),
            Ok(response) => ctx.fail(format!(
                "Real-time server not responding (status {})",
                response.status()
            )),
            Err(err) if err.is_connection_refused() => ctx.fail("Real-time server not running"),
            Err(err) => ctx.warn(format!("Real-time check inconclusive ({})", err)),
        }
    }
}
