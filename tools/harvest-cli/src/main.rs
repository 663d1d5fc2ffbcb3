//! Harvest CLI - Command line storefront for The Daily Harvest.
//!
//! Commands:
//! - `harvest products` - Load and list the catalog
//! - `harvest shop` - Fill the cart and check out
//! - `harvest review` - Review a product
//! - `harvest admin` - Log in and manage the sale
//! - `harvest view` - Render any page by route
//! - `harvest config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AdminArgs, ConfigArgs, ProductsArgs, ReviewArgs, ShopArgs, ViewArgs};

/// Harvest CLI - Browse, shop, and administer The Daily Harvest
#[derive(Parser)]
#[command(name = "harvest")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and list the catalog
    Products(ProductsArgs),

    /// Apply cart operations and optionally check out
    Shop(ShopArgs),

    /// Submit a product review
    Review(ReviewArgs),

    /// Log in as admin and manage the sale
    Admin(AdminArgs),

    /// Render the page for a route
    View(ViewArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Diagnostics go to stderr. `RUST_LOG` wins unless `--verbose` is set.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Shop(args) => commands::shop::run(args, &ctx).await,
        Commands::Review(args) => commands::review::run(args, &ctx).await,
        Commands::Admin(args) => commands::admin::run(args, &ctx).await,
        Commands::View(args) => commands::view::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
