//! CLI command implementations.

pub mod admin;
pub mod config;
pub mod products;
pub mod review;
pub mod shop;
pub mod view;

use anyhow::{bail, Context as _, Result};
use clap::{Args, Subcommand, ValueEnum};
use harvest_commerce::admin::{Sale, INVALID_PERCENT};
use harvest_commerce::catalog::CatalogHandle;
use harvest_commerce::pages;
use harvest_commerce::parse_percent;
use harvest_commerce::routes::AppContext;
use harvest_data::{CatalogLoader, LoadReport, SourceKind};
use tracing::debug;

use crate::context::Context;

/// Transport override for `--source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    Http,
    File,
}

impl From<SourceArg> for SourceKind {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Http => SourceKind::Http,
            SourceArg::File => SourceKind::File,
        }
    }
}

/// Where to load the catalog from. Defaults come from `[catalog]`.
#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// Product source transport (default: inferred from the base).
    #[arg(long, value_enum)]
    pub source: Option<SourceArg>,

    /// Base URL or directory holding `{id}.json` files.
    #[arg(long)]
    pub base: Option<String>,
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Price the listing with a sale of PCT off.
    #[arg(long, value_name = "PCT")]
    pub sale: Option<String>,
}

/// Arguments for the shop command.
///
/// Cart operations run adds first, then quantity sets, then removals.
#[derive(Args)]
pub struct ShopArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Add one unit of a product (repeatable).
    #[arg(long = "add", value_name = "ID")]
    pub add: Vec<String>,

    /// Set a line's quantity; 0 or less removes it (repeatable).
    #[arg(long = "set", value_name = "ID=QTY")]
    pub set: Vec<String>,

    /// Remove a line (repeatable).
    #[arg(long = "remove", value_name = "ID")]
    pub remove: Vec<String>,

    /// Check out after applying the cart operations.
    #[arg(long)]
    pub checkout: bool,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the review command.
#[derive(Args)]
pub struct ReviewArgs {
    /// Product to review.
    pub id: String,

    /// Reviewer name.
    #[arg(long)]
    pub author: String,

    /// Review text.
    #[arg(long)]
    pub comment: String,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

/// Arguments for the admin command.
#[derive(Args)]
pub struct AdminArgs {
    #[arg(short, long)]
    pub username: String,

    #[arg(short, long)]
    pub password: String,

    /// Percent off every product.
    #[arg(long, value_name = "PCT", conflicts_with = "end_sale")]
    pub sale: Option<String>,

    /// End the running sale.
    #[arg(long)]
    pub end_sale: bool,
}

/// Arguments for the view command.
#[derive(Args)]
pub struct ViewArgs {
    /// Route path, e.g. `/products`.
    #[arg(default_value = "/")]
    pub path: String,

    /// Log in before dispatching (unlocks `/admin`).
    #[arg(short, long, requires = "password")]
    pub username: Option<String>,

    #[arg(short, long, requires = "username")]
    pub password: Option<String>,

    /// Run a sale of PCT off while rendering.
    #[arg(long, value_name = "PCT")]
    pub sale: Option<String>,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Load the catalog behind a "Loading products..." spinner.
///
/// Items that fail to load are reported as warnings and left out.
pub async fn load_catalog(
    args: &CatalogArgs,
    ctx: &Context,
) -> Result<(CatalogHandle, LoadReport)> {
    let base = args
        .base
        .clone()
        .unwrap_or_else(|| ctx.config.catalog.products_base.clone());
    let kind = args
        .source
        .map(SourceKind::from)
        .unwrap_or_else(|| SourceKind::detect(&base));
    let base = match kind {
        SourceKind::File => ctx.resolve_path(&base).display().to_string(),
        SourceKind::Http => base,
    };
    debug!(base = %base, ?kind, "opening product source");

    let source = kind
        .open(&base, ctx.config.fetch_policy())
        .with_context(|| format!("Failed to open product source: {base}"))?;
    let loader = CatalogLoader::new(source, ctx.config.product_ids());
    let catalog = CatalogHandle::new();

    let spinner = ctx.output.spinner(pages::products::LOADING);
    let report = loader.load(&catalog).await;
    spinner.finish_and_clear();

    for (id, err) in &report.failed {
        ctx.output.warn(&format!("Could not load {id}: {err}"));
    }
    Ok((catalog, report))
}

/// Session state for the page constructors, seeded from config.
pub fn app_context(ctx: &Context, catalog: CatalogHandle) -> AppContext {
    AppContext::new()
        .with_catalog(catalog)
        .with_credentials(ctx.config.credentials())
        .with_images_base(&ctx.config.catalog.images_base)
}

/// Parse a `--sale` value. Absent means no sale.
pub fn sale_arg(input: Option<&str>) -> Result<Sale> {
    let Some(input) = input else {
        return Ok(Sale::default());
    };
    match parse_percent(input) {
        Some(percent) => Ok(Sale::new(percent)),
        None => bail!("{INVALID_PERCENT} (got '{input}')"),
    }
}

/// JSON form of a report's failures.
pub fn failures_json(report: &LoadReport) -> serde_json::Value {
    report
        .failed
        .iter()
        .map(|(id, err)| serde_json::json!({ "id": id, "error": err.to_string() }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_arg() {
        assert!(!sale_arg(None).unwrap().is_active());
        assert_eq!(sale_arg(Some("15")).unwrap().percent(), 15.0);
        assert_eq!(sale_arg(Some(" 12.5 ")).unwrap().percent(), 12.5);

        let err = sale_arg(Some("lots")).unwrap_err().to_string();
        assert!(err.contains("Please enter a valid number"));
    }
}
