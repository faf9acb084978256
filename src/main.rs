use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use seqrun_config::PlanDef;
use seqrun_step_executor::StepExecutor;

/// Seqrun - run a plan of commands one after another, stopping at the first failure
#[derive(Parser)]
#[command(name = "seqrun")]
#[command(version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Run every step of a plan in order
  Run {
    /// Path to the plan file (JSON)
    plan_file: PathBuf,
  },

  /// Check that a plan file parses and is valid
  Validate {
    /// Path to the plan file (JSON)
    plan_file: PathBuf,
  },
}

fn main() -> Result<()> {
  init_tracing()?;

  let cli = Cli::parse();

  match cli.command {
    Some(Commands::Run { plan_file }) => {
      run_plan(plan_file)?;
    }
    Some(Commands::Validate { plan_file }) => {
      validate_plan(plan_file)?;
    }
    None => {
      println!("seqrun - use --help to see available commands");
    }
  }

  Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (info and above by default).
fn init_tracing() -> Result<()> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::registry()
    .with(filter)
    .with(
      tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false),
    )
    .try_init()?;

  Ok(())
}

fn run_plan(plan_file: PathBuf) -> Result<()> {
  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(async { run_plan_async(plan_file).await })
}

async fn run_plan_async(plan_file: PathBuf) -> Result<()> {
  let plan = PlanDef::load(&plan_file)
    .await
    .with_context(|| format!("failed to load plan file: {}", plan_file.display()))?;

  info!(plan = %plan.name, steps = plan.steps.len(), "loaded plan");

  let executor = StepExecutor::new();
  let result = executor
    .execute_plan(&plan)
    .await
    .context("plan execution failed")?;

  info!(execution_id = %result.execution_id, "execution completed");

  println!("{}", serde_json::to_string_pretty(&result.step_results)?);

  Ok(())
}

fn validate_plan(plan_file: PathBuf) -> Result<()> {
  let rt = tokio::runtime::Runtime::new()?;
  let plan = rt
    .block_on(PlanDef::load(&plan_file))
    .with_context(|| format!("invalid plan file: {}", plan_file.display()))?;

  println!("{}: {} steps, ok", plan.name, plan.steps.len());

  Ok(())
}
