use async_trait::async_trait;

use crate::error::ProbeError;
use crate::http::RequestOptions;

use super::context::ProbeContext;
use super::shapes::{DatastoreHealth, decode};
use super::Probe;

const DATASTORE_PATH: &str = "/api/health/database";
const SLOW_DATASTORE_MS: f64 = 100.0;

pub struct DatastoreProbe;

#[async_trait]
impl Probe for DatastoreProbe {
    fn name(&self) -> &'static str {
        "Database connection"
    }

    async fn run(&self, ctx: &ProbeContext) -> Result<(), ProbeError> {
        let response = ctx
            .api_get(
                DATASTORE_PATH,
                RequestOptions::new().timeout(ctx.timeouts().health),
            )
            .await?;
        if response.status() != 200 {
            return ctx.fail(format!(
                "Database connection failed (status {})",
                response.status()
            ));
        }

        let body: DatastoreHealth = decode(&response, "GET /api/health/database")?;
        if body.connected != Some(true) {
            return ctx.fail("Database connection failed: not connected");
        }
        ctx.pass("Database connected")?;

        match body.response_time {
            Some(ms) if ms < SLOW_DATASTORE_MS => {
                ctx.pass(format!("Database response time: {}ms", ms))
            }
            Some(ms) => ctx.warn(format!("Slow database response: {}ms", ms)),
            None => ctx.warn("Database response time not reported"),
        }
    }
}
