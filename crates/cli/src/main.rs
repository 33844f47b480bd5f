//! Clay Market CLI - catalog, checkout, and admin tools over a data directory.
//!
//! # Usage
//!
//! ```bash
//! # Seed the catalog on first run (or reset it with --force)
//! clay-cli seed
//! clay-cli seed --force
//!
//! # List the catalog, optionally filtered by category
//! clay-cli catalog --category bowls
//!
//! # Place an order for two of product 1 and one of product 3
//! clay-cli checkout -i 1:2 -i 3 --name "Anna" --phone "+7 999 123-45-67" --address "Tverskaya 1"
//!
//! # Admin commands
//! clay-cli admin -u potter -p '<password>' orders
//! clay-cli admin -u potter -p '<password>' add-product --name "Milk jug" --price 2300 \
//!     --category vases --image https://example.com/jug.jpg --description "Holds a litre"
//! clay-cli admin -u potter -p '<password>' delete-product --id 4
//! ```
//!
//! # Commands
//!
//! - `seed` - Seed the product catalog
//! - `catalog` - List products and category counts
//! - `checkout` - Place an order
//! - `admin` - List orders and manage products
//!
//! Logging goes through `tracing`. Set `RUST_LOG` to change the filter and
//! `LOG_FORMAT=json` for JSON lines.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clay_market_core::{Category, ProductId};

mod commands;

use commands::checkout::ItemSpec;

#[derive(Parser)]
#[command(name = "clay-cli")]
#[command(author, version, about = "Clay Market CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the product catalog if it is empty
    Seed {
        /// Overwrite the stored catalog with the defaults
        #[arg(long)]
        force: bool,
    },
    /// List the catalog
    Catalog {
        /// Category token (`all`, `vases`, `bowls`, `plates`)
        #[arg(short, long, default_value = "all")]
        category: String,
    },
    /// Place an order
    Checkout {
        /// Product to order, as `ID` or `ID:QTY` (repeatable)
        #[arg(short, long = "item", required = true)]
        items: Vec<ItemSpec>,

        /// Customer name
        #[arg(long)]
        name: String,

        /// Customer phone
        #[arg(long)]
        phone: String,

        /// Delivery address
        #[arg(long)]
        address: String,
    },
    /// Admin operations (requires the configured credentials)
    Admin {
        /// Admin username
        #[arg(short, long)]
        username: String,

        /// Admin password
        #[arg(short, long)]
        password: String,

        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// List submitted orders
    Orders,
    /// List products
    Products,
    /// Create a product
    AddProduct {
        #[arg(long)]
        name: String,

        /// Price in rubles
        #[arg(long)]
        price: String,

        /// Category (`vases`, `bowls`, `plates`)
        #[arg(long, default_value = "vases")]
        category: Category,

        /// Image URL
        #[arg(long)]
        image: String,

        #[arg(long)]
        description: String,
    },
    /// Delete a product
    DeleteProduct {
        #[arg(long)]
        id: ProductId,
    },
}

fn main() {
    // Load .env file if present so RUST_LOG and LOG_FORMAT apply
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "clay_market=info,clay_cli=info".into());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { force } => commands::seed::catalog(force)?,
        Commands::Catalog { category } => commands::catalog::list(&category)?,
        Commands::Checkout {
            items,
            name,
            phone,
            address,
        } => commands::checkout::place(&items, name, phone, address)?,
        Commands::Admin {
            username,
            password,
            action,
        } => match action {
            AdminAction::Orders => commands::admin::orders(&username, &password)?,
            AdminAction::Products => commands::admin::products(&username, &password)?,
            AdminAction::AddProduct {
                name,
                price,
                category,
                image,
                description,
            } => {
                let draft = clay_market_admin::ProductDraft {
                    name,
                    price,
                    category,
                    image,
                    description,
                };
                commands::admin::add_product(&username, &password, &draft)?;
            }
            AdminAction::DeleteProduct { id } => {
                commands::admin::delete_product(&username, &password, id)?;
            }
        },
    }
    Ok(())
}
