// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use std::env;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

// Use library instead of local modules
use fiinora::{
    context, format_inr, generate_response, to_fixed, DashboardConfig, FinancialContext,
    FinancialSnapshot,
};

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let config = DashboardConfig::load().context("Failed to load dashboard configuration")?;
    debug!(user = %config.user.name, rate = config.conversion_rate, "Configuration loaded");

    context::install(FinancialContext::new(FinancialSnapshot::demo(), config.user.clone()))
        .context("Failed to install financial context")?;
    let ctx = context::current().context("Financial context missing after install")?;

    match args.get(1).map(String::as_str) {
        Some("ask") => run_ask(&args[2..], ctx)?,
        Some("summary") => run_summary(ctx)?,
        Some("export") => run_export(ctx)?,
        // UI mode (default)
        _ => run_ui_mode(ctx.clone(), &config)?,
    }

    Ok(())
}

/// Logs go to stderr; `warn` by default so the TUI screen stays clean
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_ask(words: &[String], ctx: &FinancialContext) -> Result<()> {
    let question = words.join(" ");
    if question.trim().is_empty() {
        eprintln!("Usage: fiinora ask <question...>");
        std::process::exit(2);
    }

    info!(question = %question, "Answering one-shot question");
    println!("{}", generate_response(&question, ctx.snapshot(), &ctx.user().name));
    Ok(())
}

fn run_summary(ctx: &FinancialContext) -> Result<()> {
    let summary = ctx.summary();

    println!("💰 Fiinora - Financial Summary for {}", ctx.user().name);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Net worth:          {}", format_inr(summary.net_worth));
    println!("  Assets:           {}", format_inr(summary.total_assets));
    println!("  Liabilities:      {}", format_inr(summary.total_liabilities));
    println!();
    println!("Monthly income:     {}", format_inr(summary.monthly_income));
    println!("Monthly expenses:   {}", format_inr(summary.monthly_expenses));
    println!("Savings rate:       {}%", to_fixed(summary.savings_rate, 1));
    println!();
    println!(
        "Budget used:        {}% ({} of {})",
        to_fixed(summary.budget_utilization, 1),
        format_inr(summary.total_spent),
        format_inr(summary.total_budgeted)
    );
    println!("Portfolio value:    {}", format_inr(summary.portfolio_value));
    println!("Savings goals:      {} of {}", format_inr(summary.total_savings), format_inr(summary.total_savings_target));
    println!("Total debt:         {}", format_inr(summary.total_debt));
    println!("Minimum payments:   {}", format_inr(summary.total_min_payments));
    if let Some(target) = &summary.avalanche_target {
        println!("Avalanche target:   {}", target);
    }

    Ok(())
}

fn run_export(ctx: &FinancialContext) -> Result<()> {
    let json = ctx.snapshot().to_json().context("Failed to serialize snapshot")?;
    println!("{}", json);
    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(ctx: FinancialContext, config: &DashboardConfig) -> Result<()> {
    info!("Starting dashboard UI");

    let mut app = ui::App::new(ctx, config);
    ui::run_ui(&mut app)?;

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_ctx: FinancialContext, _config: &DashboardConfig) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use: fiinora ask <question> | summary | export");
    std::process::exit(1);
}
