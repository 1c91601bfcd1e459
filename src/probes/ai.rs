use async_trait::async_trait;
use serde_json::json;

use crate::error::ProbeError;
use crate::http::RequestOptions;

use super::accounts::signed_in;
use super::context::ProbeContext;
use super::shapes::{Envelope, GeneratedTitle};
use super::Probe;

const TITLE_PATH: &str = "/api/ai/generate-title";

pub struct AiProbe;

#[async_trait]
impl Probe for AiProbe {
    fn name(&self) -> &'static str {
        "AI features"
    }

    async fn run(&self, ctx: &ProbeContext) -> Result<(), ProbeError> {
        let token = signed_in(ctx, "ai-test").await?;
        let response = ctx
            .api_post(
                TITLE_PATH,
                RequestOptions::new().bearer(&token).json(json!({
                    "text": "Today we celebrated my grandmother's 90th birthday at the lake house.",
                    "type": "text",
                })),
            )
            .await?;
        match response.status() {
            200 => {
                let titled = response
                    .json::<Envelope<GeneratedTitle>>()
                    .ok()
                    .and_then(|envelope| envelope.data)
                    .and_then(|data| data.title)
                    .is_some_and(|title| !title.trim().is_empty());
                if titled {
                    ctx.pass("AI features working")
                } else {
                    ctx.fail("AI features not working: no title generated")
                }
            }
            404 => ctx.warn("AI endpoints not found - may not be implemented"),
            429 => ctx.warn("AI rate limiting active"),
            status => ctx.fail(format!("AI features test failed (status {})", status)),
        }
    }
}
