//! Password reset CLI commands.

use clap::{Args, Subcommand};

use szachmart_core::error::AppError;

use super::CliContext;
use crate::output;

/// Arguments for password commands
#[derive(Debug, Args)]
pub struct PasswordArgs {
    /// Password subcommand
    #[command(subcommand)]
    pub command: PasswordCommand,
}

/// Password subcommands
#[derive(Debug, Subcommand)]
pub enum PasswordCommand {
    /// Request a reset link by email
    Forgot {
        /// Account email address
        email: String,
    },
    /// Set a new password using a reset token
    Reset {
        /// Reset token from the emailed link
        token: String,
    },
}

/// Execute password commands
pub async fn execute(args: &PasswordArgs, ctx: &CliContext) -> Result<(), AppError> {
    match &args.command {
        PasswordCommand::Forgot { email } => {
            ctx.client.request_password_reset(email).await?;
            output::print_success("If the address exists, a reset link has been sent.");
        }
        PasswordCommand::Reset { token } => {
            let password = dialoguer::Password::new()
                .with_prompt("New password")
                .with_confirmation("Confirm password", "Passwords do not match")
                .interact()
                .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

            ctx.client.reset_password(token, &password).await?;
            output::print_success("Password changed. You can log in now.");
        }
    }

    Ok(())
}
