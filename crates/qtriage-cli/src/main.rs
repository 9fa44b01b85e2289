//! qtriage - budget-constrained incident selection CLI
//!
//! Reads an incident report (JSON with a top-level `issues` array),
//! encodes the selection problem as a knapsack QUBO, hands it to a
//! minimizer, and prints the energy and the selected incident indices.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use qtriage_core::{
    plan_remediation, EffortBudget, ExhaustiveMinimizer, IncidentReport, MinimizerService,
    RemoteMinimizer, RemoteMinimizerConfig,
};

#[derive(Parser)]
#[command(name = "qtriage")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Select the incidents worth fixing within an effort budget", long_about = None)]
struct Cli {
    /// Path to the incident report JSON file
    #[arg(default_value = "response.json")]
    path: PathBuf,

    /// Effort capacity in minutes
    #[arg(long, default_value_t = 100)]
    capacity: i64,

    /// Deadline for the solve call, in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Remote minimizer base URL; omitted, the built-in exhaustive
    /// minimizer is used
    #[arg(long, env = "QTRIAGE_SOLVER_URL")]
    solver_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    qtriage_core::init_tracing(cli.json, level);

    let report = IncidentReport::from_path(&cli.path)
        .with_context(|| format!("failed to read incident report {}", cli.path.display()))?;

    let minimizer: Box<dyn MinimizerService> = match &cli.solver_url {
        Some(url) => Box::new(
            RemoteMinimizer::new(RemoteMinimizerConfig::new(url))
                .context("failed to set up remote minimizer")?,
        ),
        None => Box::new(ExhaustiveMinimizer::new()),
    };

    let plan = plan_remediation(
        &report,
        EffortBudget::new(cli.capacity),
        minimizer.as_ref(),
        cli.timeout_secs.map(Duration::from_secs),
    )
    .await
    .context("remediation planning failed")?;

    println!("Found solution at energy {}", plan.energy);
    println!(
        "Selected item numbers (0-indexed): {:?}",
        plan.selected
    );

    Ok(())
}
