//! User and slider administration CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use szachmart_auth::guard::RouteSpec;
use szachmart_core::error::AppError;
use szachmart_entity::user::{Role, RoleAssignment, ShippingDetails, User};

use super::CliContext;
use crate::output::{self, OutputFormat};

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// User management (admin only)
    Users(UserArgs),
    /// Home-page slider management (admin or moderator)
    Slider(SliderArgs),
}

/// Arguments for user management
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User management subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all accounts
    List,
    /// Update an account's username and email
    Update {
        /// User ID
        id: i64,
        /// New username
        #[arg(long)]
        username: String,
        /// New email
        #[arg(long)]
        email: String,
    },
    /// Replace an account's role set
    Roles {
        /// User ID
        id: i64,
        /// Comma-separated roles (ROLE_USER,ROLE_MODERATOR,ROLE_ADMIN)
        #[arg(long, value_delimiter = ',')]
        roles: Vec<Role>,
    },
    /// Replace an account's shipping details
    Shipping {
        /// User ID
        id: i64,
        /// Recipient name
        #[arg(long)]
        name: String,
        /// Street address
        #[arg(long)]
        address: String,
        /// City
        #[arg(long)]
        city: String,
        /// Postal code
        #[arg(long)]
        postal_code: String,
        /// Country
        #[arg(long)]
        country: String,
    },
    /// Delete an account
    Delete {
        /// User ID
        id: i64,
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Arguments for slider management
#[derive(Debug, Args)]
pub struct SliderArgs {
    /// Slider subcommand
    #[command(subcommand)]
    pub command: SliderCommand,
}

/// Slider management subcommands
#[derive(Debug, Subcommand)]
pub enum SliderCommand {
    /// Show the current slider contents
    Show,
    /// Replace the slider with the given products, in order
    Set {
        /// Comma-separated product IDs
        #[arg(long, value_delimiter = ',')]
        products: Vec<i64>,
    },
}

/// User display row
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: i64,
    /// Username
    username: String,
    /// Email
    email: String,
    /// Roles
    roles: String,
}

fn user_row(u: &User) -> UserRow {
    UserRow {
        id: u.id,
        username: u.username.clone(),
        email: u.email.clone(),
        roles: u
            .roles
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// The backend's seeded role rows; role names map to fixed record ids.
fn role_assignment(role: Role) -> RoleAssignment {
    let id = match role {
        Role::User => 1,
        Role::Moderator => 2,
        Role::Admin => 3,
    };
    RoleAssignment { id, name: role }
}

/// Execute admin commands
pub async fn execute(
    args: &AdminArgs,
    ctx: &CliContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        AdminCommand::Users(user_args) => {
            ctx.ensure_access(&RouteSpec::any_of([Role::Admin]))?;
            execute_users(user_args, ctx, format).await
        }
        AdminCommand::Slider(slider_args) => {
            ctx.ensure_access(&RouteSpec::any_of([Role::Admin, Role::Moderator]))?;
            execute_slider(slider_args, ctx, format).await
        }
    }
}

async fn execute_users(
    args: &UserArgs,
    ctx: &CliContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        UserCommand::List => {
            let users = ctx.client.list_users().await?;
            let rows: Vec<UserRow> = users.iter().map(user_row).collect();
            output::print_list(&rows, format);
        }
        UserCommand::Update {
            id,
            username,
            email,
        } => {
            ctx.client.update_user(*id, username, email).await?;
            output::print_success(&format!("User {} updated", id));
        }
        UserCommand::Roles { id, roles } => {
            if roles.is_empty() {
                return Err(AppError::validation(
                    "An account must keep at least one role",
                ));
            }
            let assignments: Vec<RoleAssignment> =
                roles.iter().copied().map(role_assignment).collect();
            ctx.client.update_user_roles(*id, &assignments).await?;
            output::print_success(&format!("Roles of user {} replaced", id));
        }
        UserCommand::Shipping {
            id,
            name,
            address,
            city,
            postal_code,
            country,
        } => {
            let details = ShippingDetails {
                shipping_name: name.clone(),
                shipping_address: address.clone(),
                shipping_city: city.clone(),
                shipping_postal_code: postal_code.clone(),
                shipping_country: country.clone(),
            };
            ctx.client.update_user_shipping(*id, &details).await?;
            output::print_success(&format!("Shipping details of user {} replaced", id));
        }
        UserCommand::Delete { id, force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete user {}?", id))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;
                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }
            ctx.client.delete_user(*id).await?;
            output::print_success(&format!("User {} deleted", id));
        }
    }

    Ok(())
}

async fn execute_slider(
    args: &SliderArgs,
    ctx: &CliContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        SliderCommand::Show => {
            let config = ctx.client.slider_config().await?;
            match format {
                OutputFormat::Json => output::print_json(&config),
                OutputFormat::Table => {
                    output::print_kv("display count", &config.display_count.to_string());
                    for p in &config.products {
                        println!("  {} — {}", p.id, p.name);
                    }
                }
            }
        }
        SliderCommand::Set { products } => {
            let config = ctx.client.slider_config().await?;
            let mut selected = Vec::with_capacity(products.len());
            for id in products {
                selected.push(ctx.client.product(*id).await?);
            }
            ctx.client.update_slider_config(config.id, selected).await?;
            output::print_success("Slider updated");
        }
    }

    Ok(())
}
