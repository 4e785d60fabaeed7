//! Sign-in, sign-up, and sign-out wrappers.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use szachmart_core::error::AppError;

use crate::ApiClient;

/// Request body for `POST /auth/signin`.
#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Response body of `POST /auth/signin`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    access_token: String,
}

/// Request body for `POST /auth/signup`.
#[derive(Debug, Serialize)]
struct SignUpRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Response body of `POST /auth/signup`.
#[derive(Debug, Deserialize)]
struct MessageResponse {
    message: String,
}

impl ApiClient {
    /// Signs in and stores the returned access token in the token slot.
    ///
    /// Auth failure is opaque: the backend gives no taxonomy beyond a
    /// non-success status. Returns the raw token for display/debugging.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<String, AppError> {
        let response = self
            .send(
                self.request(Method::POST, "/auth/signin")
                    .json(&SignInRequest { username, password }),
            )
            .await?;

        let body: SignInResponse = response.json().await?;
        self.token_store().save(&body.access_token)?;
        Ok(body.access_token)
    }

    /// Registers a new account. Returns the backend's confirmation message.
    pub async fn sign_up(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<String, AppError> {
        let response = self
            .send(self.request(Method::POST, "/auth/signup").json(&SignUpRequest {
                username,
                email,
                password,
            }))
            .await?;

        let body: MessageResponse = response.json().await?;
        Ok(body.message)
    }

    /// Signs out by clearing the token slot. Local only; the backend keeps
    /// no session state to tear down.
    pub fn sign_out(&self) -> Result<(), AppError> {
        self.token_store().clear()
    }
}
