//! Product comment and moderation wrappers.

use reqwest::Method;
use serde::Serialize;

use szachmart_core::error::AppError;
use szachmart_entity::comment::{Comment, CommentStatus};

use crate::ApiClient;

/// Request body for `POST /comments/product/{id}`.
#[derive(Debug, Serialize)]
struct CommentRequest<'a> {
    content: &'a str,
}

impl ApiClient {
    /// Fetches the visible comments of a product.
    pub async fn comments_for_product(&self, product_id: i64) -> Result<Vec<Comment>, AppError> {
        self.get_json(&format!("/comments/product/{product_id}")).await
    }

    /// Posts a comment on a product. Requires authentication; the new
    /// comment starts in the pending queue.
    pub async fn create_comment(
        &self,
        product_id: i64,
        content: &str,
    ) -> Result<Comment, AppError> {
        let response = self
            .send(
                self.request(Method::POST, &format!("/comments/product/{product_id}"))
                    .json(&CommentRequest { content }),
            )
            .await?;
        Ok(response.json().await?)
    }

    /// Deletes a comment.
    pub async fn delete_comment(&self, comment_id: i64) -> Result<(), AppError> {
        self.send(self.request(Method::DELETE, &format!("/comments/{comment_id}")))
            .await?;
        Ok(())
    }

    /// Fetches the moderation queue.
    pub async fn pending_comments(&self) -> Result<Vec<Comment>, AppError> {
        self.get_json("/comments/pending").await
    }

    /// Accepts or rejects a pending comment.
    pub async fn set_comment_status(
        &self,
        comment_id: i64,
        status: CommentStatus,
    ) -> Result<(), AppError> {
        self.send(
            self.request(Method::PUT, &format!("/comments/{comment_id}/status"))
                .query(&[("status", status.as_str())]),
        )
        .await?;
        Ok(())
    }

    /// Number of comments awaiting moderation (the navbar badge).
    pub async fn pending_comment_count(&self) -> Result<u64, AppError> {
        self.get_json("/comments/pending/count").await
    }
}
