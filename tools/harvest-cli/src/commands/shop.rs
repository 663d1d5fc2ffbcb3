//! Fill the cart and optionally check out.

use anyhow::{bail, Context as _, Result};
use chrono::Local;
use dialoguer::Confirm;
use harvest_commerce::cart::CartHandle;
use harvest_commerce::pages::cart::CONFIRM_PROMPT;
use harvest_commerce::pages::{CartPage, ProductsPage};
use harvest_commerce::{calculate_total, ProductId};
use serde_json::json;

use super::{app_context, load_catalog, ShopArgs};
use crate::context::Context;

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if args.checkout && ctx.output.is_json() && !args.yes {
        bail!("--json checkout needs --yes");
    }

    let (catalog, _) = load_catalog(&args.catalog, ctx).await?;
    let app = app_context(ctx, catalog);
    let cart = CartHandle::require(app.cart.as_ref())?;

    let products = ProductsPage::new(app.cart.as_ref(), app.catalog.as_ref())?;
    for id in &args.add {
        products
            .add_to_cart(&ProductId::new(id))
            .with_context(|| format!("Cannot add {id} to the cart"))?;
    }
    for spec in &args.set {
        let (id, quantity) = parse_set(spec)?;
        cart.update_quantity(&id, quantity);
    }
    for id in &args.remove {
        cart.remove_from_cart(&ProductId::new(id));
    }

    let mut page = CartPage::new(app.cart.as_ref())?.with_images_base(&app.images_base);
    if !args.checkout {
        if ctx.output.is_json() {
            let items = cart.cart_items();
            ctx.output.json(&json!({
                "items": items,
                "total": calculate_total(&items),
            }));
        } else {
            ctx.output.page(&page.render());
        }
        return Ok(());
    }

    page.begin_checkout().context("Cannot check out")?;
    ctx.output.page(&page.render());

    let confirmed = args.yes
        || Confirm::new()
            .with_prompt(CONFIRM_PROMPT)
            .default(false)
            .interact()?;
    if !confirmed {
        page.cancel_checkout()?;
        ctx.output.warn("Checkout cancelled");
        ctx.output.page(&page.render());
        return Ok(());
    }

    let order = page.confirm_checkout()?.clone();
    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }
    ctx.output.page(&page.render());
    ctx.output.kv("Order", order.id.as_str());
    let placed = order.placed_at.with_timezone(&Local);
    ctx.output.kv("Placed", &placed.format("%Y-%m-%d %H:%M:%S").to_string());
    ctx.output.kv("Items", &order.item_count().to_string());
    Ok(())
}

/// Parse an `ID=QTY` argument.
fn parse_set(spec: &str) -> Result<(ProductId, i64)> {
    let Some((id, quantity)) = spec.split_once('=') else {
        bail!("Expected ID=QTY, got '{spec}'");
    };
    let id = id.trim();
    if id.is_empty() {
        bail!("Missing product id in '{spec}'");
    }
    let quantity = quantity
        .trim()
        .parse()
        .with_context(|| format!("Invalid quantity in '{spec}'"))?;
    Ok((ProductId::new(id), quantity))
}
