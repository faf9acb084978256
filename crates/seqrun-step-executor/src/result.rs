//! Step and plan execution results.

use serde::{Deserialize, Serialize};

/// Result of a successful step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
  /// Step ID this result belongs to.
  pub step_id: String,
  /// Process exit code.
  pub exit_code: i32,
  /// Captured standard output (lossy UTF-8).
  pub stdout: String,
  /// Captured standard error (lossy UTF-8).
  pub stderr: String,
}

/// Result of a plan in which every step succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResult {
  /// Unique execution ID.
  pub execution_id: String,
  /// One result per step, in plan order.
  pub step_results: Vec<StepResult>,
}
