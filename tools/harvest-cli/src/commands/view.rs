//! Dispatch a route and print the page.

use anyhow::{Context as _, Result};
use harvest_commerce::catalog::CatalogHandle;
use harvest_commerce::pages::LoginPage;
use harvest_commerce::routes::{Route, Router};
use serde_json::json;

use super::{app_context, load_catalog, sale_arg, ViewArgs};
use crate::context::Context;

/// Run the view command.
pub async fn run(args: ViewArgs, ctx: &Context) -> Result<()> {
    let route = Route::from_path(&args.path);
    let sale = sale_arg(args.sale.as_deref())?;

    // Only the products page reads the catalog.
    let catalog = if route == Route::Products {
        load_catalog(&args.catalog, ctx).await?.0
    } else {
        CatalogHandle::new()
    };

    let mut app = app_context(ctx, catalog);
    app.sale = sale;
    if let (Some(username), Some(password)) = (&args.username, &args.password) {
        let session = LoginPage::new(app.credentials.clone())
            .login(username.as_str(), password.as_str())
            .context("Login failed")?;
        app.admin_session = Some(session);
    }

    let view = Router::dispatch(route, &app)?;
    if view.route() != route {
        ctx.output.warn(&format!(
            "{} requires login, showing {}",
            route.path(),
            view.route().path()
        ));
    }
    if route == Route::NotFound {
        ctx.output.warn(&format!("No page at {}", args.path));
    }

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "route": view.route(),
            "path": view.route().path(),
            "text": view.render(),
        }));
        return Ok(());
    }
    ctx.output.page(&view.render());
    Ok(())
}
