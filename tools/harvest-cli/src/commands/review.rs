//! Submit a product review.

use anyhow::{Context as _, Result};
use harvest_commerce::pages::{render_review_panel, ProductsPage};
use harvest_commerce::ProductId;
use serde_json::json;

use super::{app_context, load_catalog, ReviewArgs};
use crate::context::Context;

/// Run the review command.
pub async fn run(args: ReviewArgs, ctx: &Context) -> Result<()> {
    let (catalog, _) = load_catalog(&args.catalog, ctx).await?;
    let app = app_context(ctx, catalog.clone());
    let mut page = ProductsPage::new(app.cart.as_ref(), app.catalog.as_ref())?;

    let id = ProductId::new(&args.id);
    page.open_reviews(&id)
        .with_context(|| format!("Cannot review {id}"))?;
    let review = page.submit_review(&args.author, &args.comment)?;

    let product = catalog
        .product(&id)
        .with_context(|| format!("Product {id} disappeared from the catalog"))?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "product": id,
            "review": review,
            "reviews": product.reviews,
        }));
        return Ok(());
    }

    ctx.output.success(&format!("Review by {} added to {}", review.author, product.name));
    ctx.output.page(&render_review_panel(&product));
    Ok(())
}
