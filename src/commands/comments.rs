//! Product comment and moderation CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use szachmart_auth::guard::RouteSpec;
use szachmart_core::error::AppError;
use szachmart_entity::comment::{Comment, CommentStatus};
use szachmart_entity::user::Role;

use super::CliContext;
use crate::output::{self, OutputFormat};

/// Arguments for comment commands
#[derive(Debug, Args)]
pub struct CommentArgs {
    /// Comment subcommand
    #[command(subcommand)]
    pub command: CommentCommand,
}

/// Comment subcommands
#[derive(Debug, Subcommand)]
pub enum CommentCommand {
    /// List the visible comments of a product
    List {
        /// Product ID
        product_id: i64,
    },
    /// Comment on a product
    Add {
        /// Product ID
        product_id: i64,
        /// Comment text
        content: String,
    },
    /// Delete a comment (moderation)
    Delete {
        /// Comment ID
        id: i64,
    },
    /// List comments awaiting moderation
    Pending,
    /// Accept a pending comment
    Approve {
        /// Comment ID
        id: i64,
    },
    /// Reject a pending comment
    Reject {
        /// Comment ID
        id: i64,
    },
    /// Count comments awaiting moderation
    PendingCount,
}

/// Comment display row
#[derive(Debug, Serialize, Tabled)]
struct CommentRow {
    /// Comment ID
    id: i64,
    /// Author
    author: String,
    /// Product
    product: String,
    /// Status
    status: String,
    /// Content
    content: String,
}

fn row(c: &Comment) -> CommentRow {
    CommentRow {
        id: c.id,
        author: c.author_name.clone(),
        product: if c.product_name.is_empty() {
            c.product_id.to_string()
        } else {
            c.product_name.clone()
        },
        status: c.status.to_string(),
        content: c.content.clone(),
    }
}

/// Roles allowed into the moderation queue.
fn moderation_spec() -> RouteSpec {
    RouteSpec::any_of([Role::Admin, Role::Moderator])
}

/// Execute comment commands
pub async fn execute(
    args: &CommentArgs,
    ctx: &CliContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        CommentCommand::List { product_id } => {
            match ctx.client.comments_for_product(*product_id).await {
                Ok(comments) => {
                    let rows: Vec<CommentRow> = comments.iter().map(row).collect();
                    output::print_list(&rows, format);
                }
                Err(e) => {
                    output::print_warning(&format!("Could not load comments: {e}"));
                    output::print_list(&Vec::<CommentRow>::new(), format);
                }
            }
        }
        CommentCommand::Add {
            product_id,
            content,
        } => {
            ctx.ensure_access(&RouteSpec::authenticated_only())?;
            ctx.client.create_comment(*product_id, content).await?;
            output::print_success("Comment submitted for moderation");
        }
        CommentCommand::Delete { id } => {
            ctx.ensure_access(&moderation_spec())?;
            ctx.client.delete_comment(*id).await?;
            output::print_success(&format!("Comment {} deleted", id));
        }
        CommentCommand::Pending => {
            ctx.ensure_access(&moderation_spec())?;
            let comments = ctx.client.pending_comments().await?;
            let rows: Vec<CommentRow> = comments.iter().map(row).collect();
            output::print_list(&rows, format);
        }
        CommentCommand::Approve { id } => {
            ctx.ensure_access(&moderation_spec())?;
            ctx.client
                .set_comment_status(*id, CommentStatus::Accepted)
                .await?;
            output::print_success(&format!("Comment {} accepted", id));
        }
        CommentCommand::Reject { id } => {
            ctx.ensure_access(&moderation_spec())?;
            ctx.client
                .set_comment_status(*id, CommentStatus::Rejected)
                .await?;
            output::print_success(&format!("Comment {} rejected", id));
        }
        CommentCommand::PendingCount => {
            ctx.ensure_access(&moderation_spec())?;
            let count = ctx.client.pending_comment_count().await?;
            println!("Pending comments: {}", count);
        }
    }

    Ok(())
}
