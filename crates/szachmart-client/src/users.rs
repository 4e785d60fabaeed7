//! User management wrappers.

use reqwest::Method;
use serde::Serialize;

use szachmart_core::error::AppError;
use szachmart_entity::user::{RoleAssignment, ShippingDetails, User};

use crate::ApiClient;

/// Request body for `PUT /users/{id}`.
#[derive(Debug, Serialize)]
struct UpdateUserRequest<'a> {
    username: &'a str,
    email: &'a str,
}

impl ApiClient {
    /// Fetches every account (admin view).
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.get_json("/users").await
    }

    /// Fetches the account behind the stored token.
    ///
    /// The backend has no `/me` endpoint; the username is read out of the
    /// token's subject claim and looked up explicitly.
    pub async fn current_user(&self) -> Result<User, AppError> {
        let raw = self
            .token_store()
            .load()?
            .ok_or_else(|| AppError::expired_session("No token stored, please log in"))?;
        let claims = szachmart_auth::token::decode(&raw)?;
        self.get_json(&format!("/users/by-username/{}", claims.sub))
            .await
    }

    /// Updates an account's username and email.
    pub async fn update_user(
        &self,
        user_id: i64,
        username: &str,
        email: &str,
    ) -> Result<User, AppError> {
        let response = self
            .send(
                self.request(Method::PUT, &format!("/users/{user_id}"))
                    .json(&UpdateUserRequest { username, email }),
            )
            .await?;
        Ok(response.json().await?)
    }

    /// Replaces an account's role set.
    pub async fn update_user_roles(
        &self,
        user_id: i64,
        roles: &[RoleAssignment],
    ) -> Result<User, AppError> {
        let response = self
            .send(
                self.request(Method::PUT, &format!("/users/{user_id}/roles"))
                    .json(&roles),
            )
            .await?;
        Ok(response.json().await?)
    }

    /// Updates an account's shipping details.
    pub async fn update_user_shipping(
        &self,
        user_id: i64,
        details: &ShippingDetails,
    ) -> Result<User, AppError> {
        let response = self
            .send(
                self.request(Method::PUT, &format!("/users/{user_id}/shipping"))
                    .json(details),
            )
            .await?;
        Ok(response.json().await?)
    }

    /// Deletes an account.
    pub async fn delete_user(&self, user_id: i64) -> Result<(), AppError> {
        self.send(self.request(Method::DELETE, &format!("/users/{user_id}")))
            .await?;
        Ok(())
    }
}
