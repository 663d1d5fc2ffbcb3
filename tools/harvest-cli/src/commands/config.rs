//! Configuration management commands.

use std::collections::HashSet;
use std::fs;

use anyhow::{bail, Result};
use harvest_data::SourceKind;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let catalog = &ctx.config.catalog;
    ctx.output.info("[catalog]");
    ctx.output.kv("products_base", &catalog.products_base);
    ctx.output.kv("images_base", &catalog.images_base);
    ctx.output.kv("product_ids", &catalog.product_ids.join(", "));

    let fetch = &ctx.config.fetch;
    ctx.output.info("[fetch]");
    let timeout = match fetch.timeout_ms {
        0 => "none".to_string(),
        ms => ms.to_string(),
    };
    ctx.output.kv("timeout_ms", &timeout);
    ctx.output.kv("max_retries", &fetch.max_retries.to_string());
    ctx.output.kv("backoff_ms", &fetch.backoff_ms.to_string());

    ctx.output.info("[admin]");
    ctx.output.kv("username", &ctx.config.admin.username);
    ctx.output.kv("password", "********");

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check(&ctx.config);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Returns (errors, warnings).
fn check(config: &CliConfig) -> (Vec<String>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if config.catalog.products_base.trim().is_empty() {
        errors.push("catalog.products_base is required".to_string());
    } else if SourceKind::detect(&config.catalog.products_base) == SourceKind::File
        && config.catalog.products_base.contains("://")
    {
        errors.push(format!(
            "catalog.products_base '{}' uses an unsupported scheme",
            config.catalog.products_base
        ));
    }

    if config.catalog.product_ids.is_empty() {
        errors.push("catalog.product_ids must list at least one product".to_string());
    }
    let mut seen = HashSet::new();
    for id in &config.catalog.product_ids {
        if id.trim().is_empty() {
            errors.push("catalog.product_ids contains an empty id".to_string());
        } else if !seen.insert(id.as_str()) {
            errors.push(format!("catalog.product_ids lists '{id}' twice"));
        }
    }

    if config.fetch.max_retries > 10 {
        warnings.push(format!(
            "fetch.max_retries = {} will make failures slow to surface",
            config.fetch.max_retries
        ));
    }

    if config.admin.username.trim().is_empty() {
        errors.push("admin.username is required".to_string());
    }
    if config.admin.password == "admin" {
        warnings.push("admin.password is still the default".to_string());
    }

    (errors, warnings)
}
