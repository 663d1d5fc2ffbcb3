//! List the catalog.

use anyhow::Result;
use harvest_commerce::pages::products::HEADING;
use serde_json::json;

use super::{failures_json, load_catalog, sale_arg, ProductsArgs};
use crate::context::Context;
use crate::output::product_line;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let sale = sale_arg(args.sale.as_deref())?;
    let (catalog, report) = load_catalog(&args.catalog, ctx).await?;
    let catalog = catalog.read();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "products": catalog.products(),
            "sale": sale.percent(),
            "salePrices": catalog
                .products()
                .iter()
                .map(|p| json!({ "id": p.id, "price": sale.apply(p.price) }))
                .collect::<Vec<_>>(),
            "failed": failures_json(&report),
        }));
        return Ok(());
    }

    ctx.output.header(HEADING);
    if sale.is_active() {
        ctx.output.info(&sale.message());
    }
    for product in catalog.products() {
        ctx.output.list_item(&product_line(product, sale.apply(product.price)));
    }

    if report.is_complete() {
        ctx.output.success(&format!("Loaded {} products", report.loaded.len()));
    } else {
        ctx.output.info(&format!(
            "Loaded {} products, {} failed",
            report.loaded.len(),
            report.failed.len()
        ));
    }
    Ok(())
}
