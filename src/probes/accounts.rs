use chrono::Utc;
use rand::Rng;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::ProbeError;
use crate::http::{ProbeResponse, RequestOptions};

use super::context::ProbeContext;
use super::shapes::{Envelope, SessionToken, decode};

pub(crate) const REGISTER_PATH: &str = "/api/auth/register";
pub(crate) const LOGIN_PATH: &str = "/api/auth/login";
const TEST_PASSWORD: &str = "testpassword123";

/// A throwaway account with an email no earlier run has used.
#[derive(Debug, Clone)]
pub(crate) struct TestUser {
    name: String,
    email: String,
}

impl TestUser {
    pub(crate) fn fresh(prefix: &str, name: &str) -> Self {
        let suffix: u32 = rand::thread_rng().r#gen();
        Self {
            name: name.to_owned(),
            email: format!(
                "{}-{}-{:08x}@example.com",
                prefix,
                Utc::now().timestamp_millis(),
                suffix
            ),
        }
    }

    pub(crate) fn email(&self) -> &str {
        &self.email
    }

    pub(crate) fn registration(&self) -> Value {
        json!({
            "name": self.name,
            "email": self.email,
            "password": TEST_PASSWORD,
        })
    }

    pub(crate) fn credentials(&self) -> Value {
        json!({
            "email": self.email,
            "password": TEST_PASSWORD,
        })
    }
}

pub(crate) async fn register(
    ctx: &ProbeContext,
    user: &TestUser,
) -> Result<ProbeResponse, ProbeError> {
    debug!(email = user.email(), "registering test user");
    ctx.api_post(
        REGISTER_PATH,
        RequestOptions::new().json(user.registration()),
    )
    .await
}

/// Token from a registration response, if it carried one.
pub(crate) fn session_token(response: &ProbeResponse) -> Option<String> {
    response
        .json::<Envelope<SessionToken>>()
        .ok()
        .filter(Envelope::not_refused)
        .and_then(|envelope| envelope.data)
        .and_then(|data| data.token)
        .filter(|token| !token.is_empty())
}

/// Registers a fresh user for probes that only need to be signed in.
pub(crate) async fn signed_in(ctx: &ProbeContext, prefix: &str) -> Result<String, ProbeError> {
    let user = TestUser::fresh(prefix, "Launch Check User");
    let response = register(ctx, &user).await?;
    let endpoint = format!("POST {}", REGISTER_PATH);
    if !(200..300).contains(&response.status()) {
        return Err(ProbeError::unexpected_status(endpoint, response.status()));
    }
    let envelope: Envelope<SessionToken> = decode(&response, &endpoint)?;
    envelope
        .data
        .and_then(|data| data.token)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ProbeError::malformed(endpoint, "missing data.token"))
}
