use async_trait::async_trait;

use crate::error::ProbeError;
use crate::http::RequestOptions;

use super::context::ProbeContext;
use super::shapes::{HealthBody, decode};
use super::Probe;

pub(crate) const HEALTH_PATH: &str = "/health";
/// 500 MiB.
const HEAP_LIMIT_BYTES: f64 = 524_288_000.0;
const BYTES_PER_MIB: u64 = 1_048_576;

/// Liveness, uptime and heap usage from `GET /health`.
pub struct HealthProbe;

#[async_trait]
impl Probe for HealthProbe {
    fn name(&self) -> &'static str {
        "Server health"
    }

    async fn run(&self, ctx: &ProbeContext) -> Result<(), ProbeError> {
        let response = ctx
            .api_get(
                HEALTH_PATH,
                RequestOptions::new().timeout(ctx.timeouts().health),
            )
            .await?;
        if response.status() != 200 {
            return ctx.fail(format!(
                "Server health check failed (status {})",
                response.status()
            ));
        }

        let body: HealthBody = decode(&response, "GET /health")?;
        match body.status.as_deref() {
            Some("OK") => ctx.pass("Server is running")?,
            Some(other) => {
                return ctx.fail(format!("Server health check failed: status is {}", other));
            }
            None => return ctx.fail("Server health check failed: status not reported"),
        }

        match body.uptime {
            Some(uptime) if uptime > 0.0 => ctx.pass(format!(
                "Server uptime: {} minutes",
                (uptime as u64).checked_div(60).unwrap_or(0)
            ))?,
            Some(_) => ctx.warn("Server uptime is not positive")?,
            None => ctx.warn("Server uptime not reported")?,
        }

        match body.memory.and_then(|memory| memory.heap_used) {
            Some(heap) if heap < HEAP_LIMIT_BYTES => ctx.pass("Memory usage within limits"),
            Some(heap) => ctx.warn(format!(
                "High memory usage detected: {} MiB",
                (heap as u64).checked_div(BYTES_PER_MIB).unwrap_or(0)
            )),
            None => ctx.warn("Memory usage not reported"),
        }
    }
}
