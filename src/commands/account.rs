//! Account profile CLI commands.

use clap::{Args, Subcommand};

use szachmart_auth::guard::RouteSpec;
use szachmart_core::error::AppError;
use szachmart_entity::user::ShippingDetails;

use super::CliContext;
use crate::output::{self, OutputFormat};

/// Arguments for account commands
#[derive(Debug, Args)]
pub struct AccountArgs {
    /// Account subcommand
    #[command(subcommand)]
    pub command: AccountCommand,
}

/// Account subcommands
#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// Show your account details
    Show,
    /// Update your shipping details
    Shipping {
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
}

/// Execute account commands
pub async fn execute(
    args: &AccountArgs,
    ctx: &CliContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    ctx.ensure_access(&RouteSpec::authenticated_only())?;

    match &args.command {
        AccountCommand::Show => {
            let user = ctx.client.current_user().await?;
            match format {
                OutputFormat::Json => output::print_json(&user),
                OutputFormat::Table => {
                    output::print_kv("id", &user.id.to_string());
                    output::print_kv("username", &user.username);
                    output::print_kv("email", &user.email);
                    let roles: Vec<String> =
                        user.roles.iter().map(|r| r.name.to_string()).collect();
                    output::print_kv("roles", &roles.join(", "));
                    if let Some(name) = &user.shipping_name {
                        output::print_kv("ship to", name);
                    }
                    if let Some(address) = &user.shipping_address {
                        output::print_kv("address", address);
                    }
                }
            }
        }
        AccountCommand::Shipping {
            name,
            address,
            city,
            postal_code,
            country,
        } => {
            let user = ctx.client.current_user().await?;
            let details = ShippingDetails {
                shipping_name: name.clone(),
                shipping_address: address.clone(),
                shipping_city: city.clone(),
                shipping_postal_code: postal_code.clone(),
                shipping_country: country.clone(),
            };
            ctx.client.update_user_shipping(user.id, &details).await?;
            output::print_success("Shipping details updated");
        }
    }

    Ok(())
}
