use async_trait::async_trait;
use serde_json::json;

use crate::error::ProbeError;
use crate::http::{Method, RequestOptions};

use super::accounts::LOGIN_PATH;
use super::context::ProbeContext;
use super::health::HEALTH_PATH;
use super::Probe;

const LOGIN_ATTEMPTS: usize = 10;

/// Advisory checks: rate limiting, CORS and framing headers.
pub struct SecurityProbe;

#[async_trait]
impl Probe for SecurityProbe {
    fn name(&self) -> &'static str {
        "Security"
    }

    async fn run(&self, ctx: &ProbeContext) -> Result<(), ProbeError> {
        let login_url = ctx.target().api_url(LOGIN_PATH);
        let attempts = ctx
            .client()
            .burst(
                LOGIN_ATTEMPTS,
                Method::POST,
                &login_url,
                &RequestOptions::new().json(json!({
                    "email": "nonexistent@example.com",
                    "password": "wrongpassword",
                })),
            )
            .await;
        if attempts.any_status(429) {
            ctx.pass("Rate limiting active")?;
        } else {
            ctx.warn("Rate limiting may not be configured")?;
        }

        let preflight = ctx
            .api(
                Method::OPTIONS,
                LOGIN_PATH,
                RequestOptions::new()
                    .header("Origin", ctx.target().client_base())
                    .header("Access-Control-Request-Method", "POST"),
            )
            .await?;
        if preflight.header("access-control-allow-origin").is_some() {
            ctx.pass("CORS headers configured")?;
        } else {
            ctx.warn("CORS headers not found")?;
        }

        let health = ctx
            .api_get(
                HEALTH_PATH,
                RequestOptions::new().timeout(ctx.timeouts().health),
            )
            .await?;
        if health.header("x-frame-options").is_some() {
            ctx.pass("Security headers present")?;
        } else {
            ctx.warn("Security headers may be missing")?;
        }

        ctx.pass("Security tests completed")
    }
}
