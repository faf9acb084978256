//! Step executor implementation.

use std::process::Stdio;
use std::time::Duration;

use seqrun_config::{PlanDef, StepDef};
use seqrun_queue::{TaskProducer, run_sequential};
use tokio::process::Command;
use tracing::{error, info, instrument};

use crate::error::StepExecutionError;
use crate::result::{PlanResult, StepResult};

/// Runs plan steps as child processes.
///
/// Each executor carries an execution ID that tags its tracing spans and the
/// [`PlanResult`] it produces.
#[derive(Debug, Clone)]
pub struct StepExecutor {
  execution_id: String,
}

impl StepExecutor {
  /// Create an executor with a fresh execution ID.
  pub fn new() -> Self {
    Self::with_execution_id(uuid::Uuid::new_v4().to_string())
  }

  /// Create an executor with the given execution ID.
  pub fn with_execution_id(execution_id: impl Into<String>) -> Self {
    Self {
      execution_id: execution_id.into(),
    }
  }

  /// The execution ID tagging this executor's spans and results.
  pub fn execution_id(&self) -> &str {
    &self.execution_id
  }

  /// Execute a plan, one step at a time, in order.
  ///
  /// The first failing step aborts the plan: later steps are never started and
  /// its error is returned as-is. The plan is expected to be validated already.
  #[instrument(
    name = "plan_execute",
    skip(self, plan),
    fields(
      execution_id = %self.execution_id,
      plan = %plan.name,
      steps = plan.steps.len(),
    )
  )]
  pub async fn execute_plan(&self, plan: &PlanDef) -> Result<PlanResult, StepExecutionError> {
    info!("plan started");

    match run_sequential(self.producers(plan)).await {
      Ok(step_results) => {
        info!("plan completed");
        Ok(PlanResult {
          execution_id: self.execution_id.clone(),
          step_results,
        })
      }
      Err(e) => {
        error!(step_id = %e.step_id(), error = %e, "plan failed");
        Err(e)
      }
    }
  }

  /// One task producer per step, in plan order.
  ///
  /// Nothing runs until a producer is invoked.
  pub fn producers<'a>(
    &'a self,
    plan: &'a PlanDef,
  ) -> impl Iterator<Item = impl TaskProducer<StepResult, StepExecutionError> + 'a> + 'a {
    plan.steps.iter().map(move |step| move || self.execute(step))
  }

  /// Execute a single step.
  #[instrument(
    name = "step_execute",
    skip(self, step),
    fields(
      execution_id = %self.execution_id,
      step_id = %step.step_id,
    )
  )]
  pub async fn execute(&self, step: &StepDef) -> Result<StepResult, StepExecutionError> {
    info!(command = %step.command, args = ?step.args, "step started");

    let result = self.execute_inner(step).await;

    match &result {
      Ok(step_result) => {
        info!(exit_code = step_result.exit_code, "step completed");
      }
      Err(e) => {
        error!(error = %e, "step failed");
      }
    }

    result
  }

  /// Inner execution logic.
  async fn execute_inner(&self, step: &StepDef) -> Result<StepResult, StepExecutionError> {
    let mut command = Command::new(&step.command);
    command
      .args(&step.args)
      .envs(&step.env)
      .stdin(Stdio::null())
      .kill_on_drop(true);

    if let Some(dir) = &step.working_dir {
      command.current_dir(dir);
    }

    // Dropping the output future on timeout kills the child.
    let output = match step.timeout_ms {
      Some(timeout_ms) => {
        tokio::time::timeout(Duration::from_millis(timeout_ms), command.output())
          .await
          .map_err(|_| StepExecutionError::Timeout {
            step_id: step.step_id.clone(),
            timeout_ms,
          })?
      }
      None => command.output().await,
    }
    .map_err(|source| StepExecutionError::Spawn {
      step_id: step.step_id.clone(),
      source,
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
      return Err(StepExecutionError::NonZeroExit {
        step_id: step.step_id.clone(),
        exit_code: output.status.code(),
        stderr,
      });
    }

    Ok(StepResult {
      step_id: step.step_id.clone(),
      exit_code: output.status.code().unwrap_or_default(),
      stdout,
      stderr,
    })
  }
}

impl Default for StepExecutor {
  fn default() -> Self {
    Self::new()
  }
}
