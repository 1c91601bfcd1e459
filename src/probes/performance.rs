use async_trait::async_trait;

use crate::error::ProbeError;
use crate::http::{Method, RequestOptions};

use super::context::ProbeContext;
use super::health::HEALTH_PATH;
use super::Probe;

const CONCURRENT_REQUESTS: usize = 5;
const SLOW_SINGLE_MS: u64 = 1000;
const SLOW_BURST_MS: u64 = 2000;

/// Burst timing is only judged when at least one burst request got a response.
pub struct PerformanceProbe;

#[async_trait]
impl Probe for PerformanceProbe {
    fn name(&self) -> &'static str {
        "Performance"
    }

    async fn run(&self, ctx: &ProbeContext) -> Result<(), ProbeError> {
        let bounded = RequestOptions::new().timeout(ctx.timeouts().health);
        let single = ctx.api_get(HEALTH_PATH, bounded.clone()).await?;
        let single_ms = single.elapsed_ms();
        if single_ms < SLOW_SINGLE_MS {
            ctx.pass(format!("API response time: {}ms", single_ms))?;
        } else {
            ctx.warn(format!("Slow API response: {}ms", single_ms))?;
        }

        let url = ctx.target().api_url(HEALTH_PATH);
        let burst = ctx
            .client()
            .burst(
                CONCURRENT_REQUESTS,
                Method::GET,
                &url,
                &bounded,
            )
            .await;
        let failures = burst.failures();
        if failures >= CONCURRENT_REQUESTS {
            return ctx.warn(format!(
                "All {} concurrent requests failed",
                CONCURRENT_REQUESTS
            ));
        }
        if failures > 0 {
            ctx.warn(format!(
                "{} of {} concurrent requests failed",
                failures, CONCURRENT_REQUESTS
            ))?;
        }
        let burst_ms = burst.elapsed_ms();
        if burst_ms < SLOW_BURST_MS {
            ctx.pass(format!("Concurrent request handling: {}ms", burst_ms))
        } else {
            ctx.warn(format!("Slow concurrent handling: {}ms", burst_ms))
        }
    }
}
