use async_trait::async_trait;

use crate::error::ProbeError;
use crate::http::RequestOptions;

use super::accounts::signed_in;
use super::context::ProbeContext;
use super::Probe;

const SIGNATURE_PATH: &str = "/api/upload/signature";

/// Upload signing is optional, so anything short of a transport error is at
/// worst a warning.
pub struct UploadProbe;

#[async_trait]
impl Probe for UploadProbe {
    fn name(&self) -> &'static str {
        "File upload"
    }

    async fn run(&self, ctx: &ProbeContext) -> Result<(), ProbeError> {
        let token = signed_in(ctx, "upload-test").await?;
        let response = ctx
            .api_get(SIGNATURE_PATH, RequestOptions::new().bearer(&token))
            .await?;
        match response.status() {
            200 => ctx.pass("File upload system available"),
            404 => ctx.warn("File upload endpoint not found - may not be implemented"),
            status => ctx.warn(format!(
                "File upload system not available (status {})",
                status
            )),
        }
    }
}
