//! Terminal and JSON output for the storefront CLI.
//!
//! In `--json` mode only [`Output::json`] and errors reach the terminal, so
//! the JSON document on stdout stays parseable.

use std::time::Duration;

use console::{style, StyledObject};
use harvest_commerce::catalog::Product;
use harvest_commerce::Money;
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    fn line(&self, mark: StyledObject<&str>, msg: &str) {
        if !self.json {
            println!("{mark} {msg}");
        }
    }

    pub fn info(&self, msg: &str) {
        self.line(style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.line(style("✓").green(), msg);
    }

    pub fn list_item(&self, item: &str) {
        self.line(style("  •").dim(), item);
    }

    /// Warnings go to stderr so they never interleave with page text.
    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, msg: &str) {
        if !self.json {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    /// A rendered page, printed verbatim.
    pub fn page(&self, text: &str) {
        if !self.json {
            println!("{text}");
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(text) => println!("{text}"),
            Err(e) => self.error(&format!("Failed to encode JSON: {e}")),
        }
    }

    /// Spinner shown while the catalog loads. Hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    }
}

/// One-line product summary with its stock badge.
pub fn product_line(product: &Product, price: Money) -> String {
    let stock = if product.in_stock {
        style("in stock").green().to_string()
    } else {
        style("out of stock").red().to_string()
    };
    format!(
        "{:<10} {:<12} {:>8}  {}",
        product.id,
        product.name,
        price.display(),
        stock
    )
}
