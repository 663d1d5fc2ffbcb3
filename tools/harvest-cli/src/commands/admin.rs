//! Log in and manage the store-wide sale.

use anyhow::Result;
use harvest_commerce::pages::{AdminPage, LoginPage};
use serde_json::json;

use super::AdminArgs;
use crate::context::Context;

/// Run the admin command.
pub async fn run(args: AdminArgs, ctx: &Context) -> Result<()> {
    let mut login = LoginPage::new(ctx.config.credentials());
    let session = match login.login(&args.username, &args.password) {
        Ok(session) => session,
        Err(err) => {
            ctx.output.page(&login.render());
            return Err(err.into());
        }
    };
    ctx.output.success(&format!("Logged in as {}", session.username()));

    let mut page = AdminPage::new(session);
    if let Some(input) = &args.sale {
        if let Err(err) = page.set_sale(input.as_str()) {
            ctx.output.page(&page.render());
            return Err(err.into());
        }
    } else if args.end_sale {
        page.end_sale();
    }

    let sale = page.console().sale();
    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "percent": sale.percent(),
            "active": sale.is_active(),
            "message": sale.message(),
        }));
        return Ok(());
    }

    ctx.output.page(&page.render());
    Ok(())
}
