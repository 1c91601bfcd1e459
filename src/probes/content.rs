use async_trait::async_trait;
use serde_json::json;

use crate::error::ProbeError;
use crate::http::RequestOptions;

use super::accounts::signed_in;
use super::context::ProbeContext;
use super::shapes::{CreatedCapsule, Envelope, MemoryList, decode};
use super::Probe;

const CAPSULES_PATH: &str = "/api/capsules";
const MEMORIES_PATH: &str = "/api/memories";

/// Create a capsule, add a memory to it, read the memories back.
pub struct ContentProbe;

#[async_trait]
impl Probe for ContentProbe {
    fn name(&self) -> &'static str {
        "Core content flow"
    }

    async fn run(&self, ctx: &ProbeContext) -> Result<(), ProbeError> {
        let token = signed_in(ctx, "feature-test").await?;

        let created = ctx
            .api_post(
                CAPSULES_PATH,
                RequestOptions::new().bearer(&token).json(json!({
                    "title": "Launch Check Capsule",
                    "description": "Created by launchcheck",
                    "type": "private",
                    "theme": "default",
                })),
            )
            .await?;
        if created.status() != 201 {
            return ctx.fail(format!(
                "Capsule creation failed (status {})",
                created.status()
            ));
        }
        let capsule: Envelope<CreatedCapsule> = decode(&created, "POST /api/capsules")?;
        let Some(capsule_id) = capsule
            .data
            .and_then(|data| data.capsule)
            .and_then(|resource| resource.id)
        else {
            return ctx.fail("Capsule creation returned no capsule id");
        };
        ctx.pass("Capsule creation")?;

        let memory = ctx
            .api_post(
                MEMORIES_PATH,
                RequestOptions::new().bearer(&token).json(json!({
                    "capsuleId": capsule_id,
                    "type": "text",
                    "title": "Launch Check Memory",
                    "text": "A memory written by launchcheck.",
                    "tags": ["launchcheck"],
                })),
            )
            .await?;
        if memory.status() != 201 {
            return ctx.fail(format!(
                "Memory creation failed (status {})",
                memory.status()
            ));
        }
        ctx.pass("Memory creation")?;

        let path = format!("{}/capsule/{}", MEMORIES_PATH, capsule_id);
        let listed = ctx
            .api_get(&path, RequestOptions::new().bearer(&token))
            .await?;
        if listed.status() != 200 {
            return ctx.fail(format!(
                "Memory retrieval failed (status {})",
                listed.status()
            ));
        }
        let listing: Envelope<MemoryList> = decode(&listed, &format!("GET {}", path))?;
        let count = listing
            .data
            .and_then(|data| data.memories)
            .map_or(0, |memories| memories.len());
        if count == 0 {
            ctx.fail("Memory retrieval failed: no memories returned")
        } else {
            ctx.pass("Memory retrieval")
        }
    }
}
