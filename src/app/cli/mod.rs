//! CLI Adapter.

mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::app::api::{self, AddonStatus, AddonSummary, CatalogReport, DefaultContext};
use crate::domain::{AppError, BatchResult, Capability};

#[derive(Parser)]
#[command(name = "addonctl")]
#[command(version)]
#[command(about = "Resolve add-on dependencies and activate add-ons in batches", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./addonctl.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Catalog file (.toml, .yml or .yaml); overrides the configured catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog add-ons with their state
    #[clap(visible_alias = "ls")]
    List,
    /// Show state and dependency check for one add-on
    #[clap(visible_alias = "st")]
    Status {
        /// Add-on slug
        slug: String,
    },
    /// Show the processing order for the given add-ons
    #[clap(visible_alias = "o")]
    Order {
        /// Requested add-on slugs
        #[arg(required = true)]
        slugs: Vec<String>,
    },
    /// Report dangling dependencies and cycles in the catalog
    Check,
    /// Activate add-ons and their dependencies
    #[clap(visible_alias = "a")]
    Activate {
        /// Requested add-on slugs
        #[arg(required = true)]
        slugs: Vec<String>,
    },
    /// Deactivate add-ons, dependents first
    #[clap(visible_alias = "d")]
    Deactivate {
        /// Requested add-on slugs
        #[arg(required = true)]
        slugs: Vec<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = execute(cli);

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn execute(cli: Cli) -> Result<i32, AppError> {
    let ctx = api::load_context(cli.config.as_deref(), cli.catalog.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::List => run_list(&ctx, format).map(|_| 0),
        Commands::Status { slug } => run_status(&ctx, &slug, format).map(|_| 0),
        Commands::Order { slugs } => run_order(&ctx, &slugs, format).map(|_| 0),
        Commands::Check => run_check(&ctx, format),
        Commands::Activate { slugs } => {
            run_batch(Capability::Activate, api::activate(&ctx, &slugs), format)
        }
        Commands::Deactivate { slugs } => {
            run_batch(Capability::Deactivate, api::deactivate(&ctx, &slugs), format)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_list(ctx: &DefaultContext, format: OutputFormat) -> Result<(), AppError> {
    let addons: Vec<AddonSummary> = api::list(ctx);
    if format == OutputFormat::Json {
        return print_json(&addons);
    }

    println!("Available add-ons:");
    for addon in &addons {
        let state = match (addon.installed, addon.active) {
            (_, true) => "active",
            (true, false) => "installed",
            (false, false) => "not installed",
        };
        println!("  {} - {} [{}]", addon.slug, addon.name, state);
        if !addon.dependencies.is_empty() {
            println!("    requires: {}", addon.dependencies.join(", "));
        }
    }
    Ok(())
}

fn run_status(ctx: &DefaultContext, slug: &str, format: OutputFormat) -> Result<(), AppError> {
    let status: AddonStatus = api::status(ctx, slug)?;
    if format == OutputFormat::Json {
        return print_json(&status);
    }

    println!("{} ({})", status.name, status.slug);
    println!("  installed: {}", yes_no(status.state.installed));
    println!("  active: {}", yes_no(status.state.active));
    if status.dependencies.satisfied {
        println!("  dependencies: satisfied");
    } else {
        println!("  dependencies: missing {}", status.dependencies.missing.join(", "));
    }
    if !status.active_dependents.is_empty() {
        println!("  required by: {}", status.active_dependents.join(", "));
    }
    Ok(())
}

fn run_order(ctx: &DefaultContext, slugs: &[String], format: OutputFormat) -> Result<(), AppError> {
    let order = api::order(ctx, slugs)?;
    if format == OutputFormat::Json {
        return print_json(&order);
    }

    println!("Processing order:");
    for (i, slug) in order.iter().enumerate() {
        println!("  {}. {}", i + 1, slug);
    }
    Ok(())
}

fn run_check(ctx: &DefaultContext, format: OutputFormat) -> Result<i32, AppError> {
    let report: CatalogReport = api::check(ctx);
    let exit_code = if report.is_clean() { 0 } else { 1 };
    if format == OutputFormat::Json {
        print_json(&report)?;
        return Ok(exit_code);
    }

    if report.is_clean() {
        println!("✅ Catalog is consistent ({} add-ons)", ctx.catalog().len());
        return Ok(exit_code);
    }

    println!("⚠️  Catalog problems:");
    for dangling in &report.dangling {
        println!("  • {} depends on unknown add-on '{}'", dangling.addon, dangling.dependency);
    }
    for cycle in &report.cycles {
        println!("  • circular dependency: {}", cycle);
    }
    Ok(exit_code)
}

fn run_batch(
    operation: Capability,
    result: BatchResult,
    format: OutputFormat,
) -> Result<i32, AppError> {
    let exit_code = if result.success { 0 } else { 1 };
    if format == OutputFormat::Json {
        print_json(&result)?;
        return Ok(exit_code);
    }

    let verb = match operation {
        Capability::Activate => "Activated",
        Capability::Deactivate => "Deactivated",
    };
    if result.success {
        println!("✅ {} {} add-on(s)", verb, result.affected.len());
    } else {
        println!(
            "⚠️  {} {} add-on(s) with {} error(s)",
            verb,
            result.affected.len(),
            result.errors.len()
        );
    }
    for slug in &result.affected {
        println!("  • {}", slug);
    }
    for error in &result.errors {
        eprintln!("  ✗ {}", error);
    }
    Ok(exit_code)
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
