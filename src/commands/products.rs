//! Product catalog CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use szachmart_auth::guard::RouteSpec;
use szachmart_core::error::AppError;
use szachmart_core::types::Money;
use szachmart_entity::product::{Product, ProductRequest};

use super::CliContext;
use crate::output::{self, OutputFormat};

/// Arguments for product commands
#[derive(Debug, Args)]
pub struct ProductArgs {
    /// Product subcommand
    #[command(subcommand)]
    pub command: ProductCommand,
}

/// Product subcommands
#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    /// List the catalog, optionally filtered by category
    List {
        /// Category name (e.g. Szachownice, Figury, Zegary)
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one product
    Show {
        /// Product ID
        id: i64,
    },
    /// List product categories
    Categories,
    /// List a new product for sale
    Add {
        /// Product name
        name: String,
        /// Unit price, e.g. 189.00
        #[arg(long)]
        price: Money,
        /// Category name
        #[arg(long)]
        category: String,
        /// Long description
        #[arg(long)]
        description: String,
        /// Image URL (the backend fills this in when omitted)
        #[arg(long, default_value = "")]
        image_url: String,
    },
}

/// Product display row
#[derive(Debug, Serialize, Tabled)]
struct ProductRow {
    /// Product ID
    id: i64,
    /// Name
    name: String,
    /// Category
    category: String,
    /// Unit price
    price: String,
}

fn row(p: &Product) -> ProductRow {
    ProductRow {
        id: p.id,
        name: p.name.clone(),
        category: p.category_name.clone(),
        price: p.price.to_string(),
    }
}

/// Execute product commands
pub async fn execute(
    args: &ProductArgs,
    ctx: &CliContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ProductCommand::List { category } => {
            let result = match category {
                Some(name) => ctx.client.products_by_category(name).await,
                None => ctx.client.list_products().await,
            };
            // Listing failures degrade to an empty listing plus a warning
            match result {
                Ok(products) => {
                    let rows: Vec<ProductRow> = products.iter().map(row).collect();
                    output::print_list(&rows, format);
                }
                Err(e) => {
                    output::print_warning(&format!("Could not load products: {e}"));
                    output::print_list(&Vec::<ProductRow>::new(), format);
                }
            }
        }
        ProductCommand::Show { id } => {
            let product = ctx.client.product(*id).await?;
            match format {
                OutputFormat::Json => output::print_json(&product),
                OutputFormat::Table => {
                    output::print_kv("id", &product.id.to_string());
                    output::print_kv("name", &product.name);
                    output::print_kv("category", &product.category_name);
                    output::print_kv("price", &product.price.to_string());
                    if !product.author_name.is_empty() {
                        output::print_kv("author", &product.author_name);
                    }
                    if !product.description.is_empty() {
                        output::print_kv("description", &product.description);
                    }
                }
            }
        }
        ProductCommand::Add {
            name,
            price,
            category,
            description,
            image_url,
        } => {
            ctx.ensure_access(&RouteSpec::authenticated_only())?;
            let request = ProductRequest {
                name: name.clone(),
                description: description.clone(),
                price: *price,
                category_name: category.clone(),
                image_url: image_url.clone(),
            };
            let product = ctx.client.create_product(&request).await?;
            output::print_success(&format!("Product {} listed as \"{}\"", product.id, product.name));
        }
        ProductCommand::Categories => match ctx.client.list_categories().await {
            Ok(categories) => {
                for c in &categories {
                    println!("{}", c.name);
                }
            }
            Err(e) => output::print_warning(&format!("Could not load categories: {e}")),
        },
    }

    Ok(())
}
