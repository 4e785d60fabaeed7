//! Password reset wrappers.

use reqwest::Method;
use serde::Serialize;

use szachmart_core::error::AppError;

use crate::ApiClient;

/// Request body for `POST /password/reset-request`.
#[derive(Debug, Serialize)]
struct ResetRequestBody<'a> {
    email: &'a str,
}

/// Request body for `POST /password/reset`.
#[derive(Debug, Serialize)]
struct ResetBody<'a> {
    token: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Asks the backend to email a reset link.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AppError> {
        self.send(
            self.request(Method::POST, "/password/reset-request")
                .json(&ResetRequestBody { email }),
        )
        .await?;
        Ok(())
    }

    /// Sets a new password using a reset token from the emailed link.
    pub async fn reset_password(&self, token: &str, password: &str) -> Result<(), AppError> {
        self.send(
            self.request(Method::POST, "/password/reset")
                .json(&ResetBody { token, password }),
        )
        .await?;
        Ok(())
    }
}
