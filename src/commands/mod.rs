//! CLI command definitions and dispatch.

pub mod account;
pub mod admin;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod comments;
pub mod orders;
pub mod password;
pub mod products;

use std::fs;
use std::sync::Arc;

use chrono::Utc;
use clap::{Parser, Subcommand};

use szachmart_auth::guard::{Access, RouteSpec, authorize};
use szachmart_auth::session::{Session, derive_session};
use szachmart_auth::store::{FileTokenStore, TokenStore};
use szachmart_cart::CartStore;
use szachmart_client::ApiClient;
use szachmart_core::config::ClientConfig;
use szachmart_core::error::AppError;

use crate::output::OutputFormat;

/// Szachmart — chess shop storefront client
#[derive(Debug, Parser)]
#[command(name = "szachmart", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in, register, sign out, inspect the session
    Auth(auth::AuthArgs),
    /// Browse the product catalog
    Products(products::ProductArgs),
    /// Manage the shopping cart
    Cart(cart::CartArgs),
    /// Place an order for the cart contents
    Checkout(checkout::CheckoutArgs),
    /// Order history and fulfilment
    Orders(orders::OrderArgs),
    /// Product comments and moderation
    Comments(comments::CommentArgs),
    /// Account profile and shipping details
    Account(account::AccountArgs),
    /// User and slider administration
    Admin(admin::AdminArgs),
    /// Password reset flow
    Password(password::PasswordArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: ClientConfig) -> Result<(), AppError> {
        let ctx = CliContext::new(config)?;
        match &self.command {
            Commands::Auth(args) => auth::execute(args, &ctx).await,
            Commands::Products(args) => products::execute(args, &ctx, self.format).await,
            Commands::Cart(args) => cart::execute(args, &ctx, self.format).await,
            Commands::Checkout(args) => checkout::execute(args, &ctx).await,
            Commands::Orders(args) => orders::execute(args, &ctx, self.format).await,
            Commands::Comments(args) => comments::execute(args, &ctx, self.format).await,
            Commands::Account(args) => account::execute(args, &ctx, self.format).await,
            Commands::Admin(args) => admin::execute(args, &ctx, self.format).await,
            Commands::Password(args) => password::execute(args, &ctx).await,
        }
    }
}

/// Shared state every command needs: config, the token slot, and the
/// API client bound to both.
pub struct CliContext {
    /// Loaded configuration.
    pub config: ClientConfig,
    /// The durable token slot.
    pub store: Arc<dyn TokenStore>,
    /// Backend client.
    pub client: ApiClient,
}

impl CliContext {
    /// Builds the context from loaded configuration.
    pub fn new(config: ClientConfig) -> Result<Self, AppError> {
        let store: Arc<dyn TokenStore> =
            Arc::new(FileTokenStore::new(config.storage.token_path()));
        let client = ApiClient::new(&config.api, Arc::clone(&store))?;
        Ok(Self {
            config,
            store,
            client,
        })
    }

    /// Derives the current session from the token slot.
    pub fn session(&self) -> Session {
        derive_session(self.store.as_ref(), Utc::now())
    }

    /// Checks the session against a route requirement, rendering the
    /// guard's redirect outcomes as CLI errors.
    pub fn ensure_access(&self, spec: &RouteSpec) -> Result<Session, AppError> {
        let session = self.session();
        match authorize(&session, spec) {
            Access::Allow => Ok(session),
            Access::RedirectLogin => Err(AppError::expired_session(
                "You are not logged in. Run `szachmart auth login` first.",
            )),
            Access::RedirectHome => Err(AppError::authorization(
                "Your account does not have permission for this command.",
            )),
        }
    }

    /// Loads the persisted cart, or an empty one when no cart file exists.
    pub fn load_cart(&self) -> Result<CartStore, AppError> {
        let path = self.config.storage.cart_path();
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(CartStore::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Persists the cart for the next invocation.
    pub fn save_cart(&self, cart: &CartStore) -> Result<(), AppError> {
        let path = self.config.storage.cart_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(cart)?)?;
        Ok(())
    }
}
