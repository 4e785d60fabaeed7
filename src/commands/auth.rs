//! Authentication CLI commands.

use clap::{Args, Subcommand};

use szachmart_core::error::AppError;

use super::CliContext;
use crate::output;

/// Arguments for auth commands
#[derive(Debug, Args)]
pub struct AuthArgs {
    /// Auth subcommand
    #[command(subcommand)]
    pub command: AuthCommand,
}

/// Auth subcommands
#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Sign in and store the access token
    Login {
        /// Account username
        username: String,
    },
    /// Register a new account
    Register {
        /// Desired username
        username: String,
        /// Email address
        email: String,
    },
    /// Sign out (clears the stored token)
    Logout,
    /// Show the current session
    Whoami,
}

/// Execute auth commands
pub async fn execute(args: &AuthArgs, ctx: &CliContext) -> Result<(), AppError> {
    match &args.command {
        AuthCommand::Login { username } => {
            let password = dialoguer::Password::new()
                .with_prompt("Password")
                .interact()
                .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

            ctx.client.sign_in(username, &password).await.map_err(|e| {
                AppError::with_source(e.kind, "Login failed. Please check your credentials.", e)
            })?;
            output::print_success(&format!("Logged in as {}", username));
        }
        AuthCommand::Register { username, email } => {
            let password = dialoguer::Password::new()
                .with_prompt("Password")
                .with_confirmation("Confirm password", "Passwords do not match")
                .interact()
                .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

            let message = ctx
                .client
                .sign_up(username, email, &password)
                .await
                .map_err(|e| {
                    AppError::with_source(e.kind, "Registration failed. Please try again.", e)
                })?;
            output::print_success(&format!("{message} Now you can log in."));
        }
        AuthCommand::Logout => {
            ctx.client.sign_out()?;
            output::print_success("Logged out");
        }
        AuthCommand::Whoami => {
            let session = ctx.session();
            if !session.authenticated {
                println!("Not logged in.");
                return Ok(());
            }
            output::print_kv("user", session.subject.as_deref().unwrap_or("?"));
            let mut roles: Vec<&str> = session.roles.iter().map(|r| r.as_str()).collect();
            roles.sort_unstable();
            output::print_kv("roles", &roles.join(", "));
        }
    }

    Ok(())
}
