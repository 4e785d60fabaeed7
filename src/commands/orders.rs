//! Order history and fulfilment CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use szachmart_auth::guard::RouteSpec;
use szachmart_core::error::AppError;
use szachmart_entity::order::{Order, OrderStatus};
use szachmart_entity::user::Role;

use super::CliContext;
use crate::output::{self, OutputFormat};

/// Arguments for order commands
#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Order subcommand
    #[command(subcommand)]
    pub command: OrderCommand,
}

/// Order subcommands
#[derive(Debug, Subcommand)]
pub enum OrderCommand {
    /// List your own orders
    List,
    /// List every order in the shop (admin)
    All,
    /// Update an order's fulfilment status (admin)
    SetStatus {
        /// Order ID
        id: i64,
        /// New status (PENDING, PAID, SHIPPED, DELIVERED, CANCELLED)
        status: OrderStatus,
    },
}

/// Order display row
#[derive(Debug, Serialize, Tabled)]
struct OrderRow {
    /// Order ID
    id: i64,
    /// Placement date
    date: String,
    /// Line count
    lines: usize,
    /// Total
    total: String,
    /// Status
    status: String,
}

fn row(o: &Order) -> OrderRow {
    OrderRow {
        id: o.id,
        date: o.order_date.clone(),
        lines: o.order_items.len(),
        total: o.total_price.to_string(),
        status: o.status.to_string(),
    }
}

/// Execute order commands
pub async fn execute(
    args: &OrderArgs,
    ctx: &CliContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        OrderCommand::List => {
            ctx.ensure_access(&RouteSpec::authenticated_only())?;
            match ctx.client.my_orders().await {
                Ok(orders) => {
                    let rows: Vec<OrderRow> = orders.iter().map(row).collect();
                    output::print_list(&rows, format);
                }
                Err(e) => {
                    output::print_warning(&format!("Could not load orders: {e}"));
                    output::print_list(&Vec::<OrderRow>::new(), format);
                }
            }
        }
        OrderCommand::All => {
            ctx.ensure_access(&RouteSpec::any_of([Role::Admin]))?;
            let orders = ctx.client.all_orders().await?;
            let rows: Vec<OrderRow> = orders.iter().map(row).collect();
            output::print_list(&rows, format);
        }
        OrderCommand::SetStatus { id, status } => {
            ctx.ensure_access(&RouteSpec::any_of([Role::Admin]))?;
            ctx.client.set_order_status(*id, *status).await?;
            output::print_success(&format!("Order {} set to {}", id, status));
        }
    }

    Ok(())
}
