use async_trait::async_trait;

use crate::error::ProbeError;
use crate::http::RequestOptions;

use super::context::ProbeContext;
use super::Probe;

/// Fetches the client entry page and looks for the markers a built
/// single-page app ships with.
pub struct ClientAppProbe;

#[async_trait]
impl Probe for ClientAppProbe {
    fn name(&self) -> &'static str {
        "Client application"
    }

    async fn run(&self, ctx: &ProbeContext) -> Result<(), ProbeError> {
        let url = ctx.target().client_base();
        let page = ctx
            .client()
            .get(url, RequestOptions::new().timeout(ctx.timeouts().page))
            .await
            .map_err(|err| ProbeError::transport(format!("GET {}", url), err))?;
        if page.status() != 200 {
            return ctx.fail(format!(
                "Client application not accessible (status {})",
                page.status()
            ));
        }
        ctx.pass("Client application accessible")?;

        let html = page.body();
        if html.contains("react") || html.contains("root") {
            ctx.pass("React application detected")?;
        }

        let lowered = html.to_ascii_lowercase();
        if lowered.contains("<title") {
            ctx.pass("Page title present")?;
        } else {
            ctx.warn("Page title missing")?;
        }
        if lowered.contains("viewport") {
            ctx.pass("Mobile viewport configured")?;
        } else {
            ctx.warn("Mobile viewport meta tag missing")?;
        }

        ctx.pass("Client application tests completed")
    }
}
