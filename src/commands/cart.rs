//! Shopping cart CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use szachmart_cart::CartLine;
use szachmart_core::error::AppError;

use super::CliContext;
use crate::output::{self, OutputFormat};

/// Arguments for cart commands
#[derive(Debug, Args)]
pub struct CartArgs {
    /// Cart subcommand
    #[command(subcommand)]
    pub command: CartCommand,
}

/// Cart subcommands
#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// Add a product to the cart
    Add {
        /// Product ID
        product_id: i64,
        /// Quantity to add
        #[arg(long, default_value_t = 1)]
        qty: u32,
    },
    /// Show the cart contents
    List,
    /// Set a line's quantity (0 removes the line)
    Update {
        /// Product ID
        product_id: i64,
        /// New quantity
        qty: i64,
    },
    /// Remove a line
    Remove {
        /// Product ID
        product_id: i64,
    },
    /// Empty the cart
    Clear,
}

/// Cart display row
#[derive(Debug, Serialize, Tabled)]
struct CartRow {
    /// Product ID
    id: i64,
    /// Name
    name: String,
    /// Unit price
    price: String,
    /// Quantity
    qty: u32,
    /// Line total
    total: String,
}

fn row(line: &CartLine) -> CartRow {
    CartRow {
        id: line.product_id,
        name: line.name.clone(),
        price: line.unit_price.to_string(),
        qty: line.quantity,
        total: line
            .unit_price
            .checked_mul(line.quantity)
            .unwrap_or(line.unit_price)
            .to_string(),
    }
}

/// Execute cart commands
pub async fn execute(
    args: &CartArgs,
    ctx: &CliContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut cart = ctx.load_cart()?;

    match &args.command {
        CartCommand::Add { product_id, qty } => {
            // Snapshot name and price at add time, like a product page would
            let product = ctx.client.product(*product_id).await?;
            cart.add_item(&product, *qty);
            ctx.save_cart(&cart)?;
            output::print_success(&format!(
                "Added {} × {} (cart: {} items, {})",
                qty,
                product.name,
                cart.item_count(),
                cart.total()
            ));
        }
        CartCommand::List => {
            let rows: Vec<CartRow> = cart.lines().iter().map(row).collect();
            output::print_list(&rows, format);
            if !cart.is_empty() {
                output::print_kv("items", &cart.item_count().to_string());
                output::print_kv("total", &cart.total().to_string());
            }
        }
        CartCommand::Update { product_id, qty } => {
            cart.update_quantity(*product_id, *qty);
            ctx.save_cart(&cart)?;
            output::print_success(&format!(
                "Cart updated ({} items, {})",
                cart.item_count(),
                cart.total()
            ));
        }
        CartCommand::Remove { product_id } => {
            cart.remove_item(*product_id);
            ctx.save_cart(&cart)?;
            output::print_success("Removed from cart");
        }
        CartCommand::Clear => {
            cart.clear();
            ctx.save_cart(&cart)?;
            output::print_success("Cart emptied");
        }
    }

    Ok(())
}
