use async_trait::async_trait;

use crate::error::ProbeError;
use crate::http::RequestOptions;

use super::accounts::{LOGIN_PATH, TestUser, register, session_token};
use super::context::ProbeContext;
use super::shapes::{Envelope, SessionToken};
use super::Probe;

const PROFILE_PATH: &str = "/api/auth/profile";

/// Register, validate the token, then log in again with the same account.
pub struct AuthProbe;

#[async_trait]
impl Probe for AuthProbe {
    fn name(&self) -> &'static str {
        "Authentication"
    }

    async fn run(&self, ctx: &ProbeContext) -> Result<(), ProbeError> {
        let user = TestUser::fresh("auth-test", "Test User");

        let registered = register(ctx, &user).await?;
        let token = match session_token(&registered) {
            Some(token) if registered.status() == 201 => token,
            Some(_) | None => {
                return ctx.fail(format!(
                    "User registration failed (status {})",
                    registered.status()
                ));
            }
        };
        ctx.pass("User registration")?;

        let profile = ctx
            .api_get(PROFILE_PATH, RequestOptions::new().bearer(&token))
            .await?;
        if profile.status() == 200 {
            ctx.pass("JWT token validation")?;
        } else {
            ctx.fail(format!(
                "JWT token validation failed (status {})",
                profile.status()
            ))?;
        }

        let login = ctx
            .api_post(LOGIN_PATH, RequestOptions::new().json(user.credentials()))
            .await?;
        let accepted = login
            .json::<Envelope<SessionToken>>()
            .map_or(true, |envelope| envelope.not_refused());
        if login.status() == 200 && accepted {
            ctx.pass("User login")
        } else {
            ctx.fail(format!("User login failed (status {})", login.status()))
        }
    }
}
