//! Checkout CLI command.

use clap::Args;

use szachmart_auth::guard::RouteSpec;
use szachmart_core::error::AppError;

use super::CliContext;
use crate::output;

/// Arguments for checkout
#[derive(Debug, Args)]
pub struct CheckoutArgs {
    /// Skip confirmation
    #[arg(long)]
    pub yes: bool,
}

/// Execute checkout: authentication required, shipping prefilled from the
/// account, cart cleared only after the order is accepted.
pub async fn execute(args: &CheckoutArgs, ctx: &CliContext) -> Result<(), AppError> {
    ctx.ensure_access(&RouteSpec::authenticated_only())?;

    let mut cart = ctx.load_cart()?;
    if cart.is_empty() {
        output::print_warning("Your cart is empty.");
        return Ok(());
    }

    println!(
        "Ordering {} items for {}",
        cart.item_count(),
        cart.total()
    );

    match ctx.client.current_user().await {
        Ok(user) => {
            if let Some(name) = &user.shipping_name {
                output::print_kv("ship to", name);
            }
            if let Some(address) = &user.shipping_address {
                output::print_kv("address", address);
            }
            if let Some(city) = &user.shipping_city {
                output::print_kv("city", city);
            }
        }
        // Missing shipping details do not block checkout
        Err(e) => output::print_warning(&format!("Could not load shipping details: {e}")),
    }

    if !args.yes {
        let confirm = dialoguer::Confirm::new()
            .with_prompt("Place this order?")
            .default(false)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;
        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    ctx.client
        .create_order(cart.order_items())
        .await
        .map_err(|e| AppError::with_source(e.kind, "Failed to place order. Please try again.", e))?;

    // Clear only on success; a failed order keeps the cart intact
    cart.clear();
    ctx.save_cart(&cart)?;
    output::print_success("Order placed. Thank you for shopping at Szachmart!");

    Ok(())
}
