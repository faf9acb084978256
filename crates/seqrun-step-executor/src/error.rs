//! Step execution errors.

/// Errors that can occur during step execution.
#[derive(Debug, thiserror::Error)]
pub enum StepExecutionError {
  /// The command could not be started or waited on.
  #[error("failed to run step '{step_id}': {source}")]
  Spawn {
    step_id: String,
    #[source]
    source: std::io::Error,
  },

  /// The command ran but did not exit successfully.
  #[error("step '{step_id}' exited with code {exit_code:?}")]
  NonZeroExit {
    step_id: String,
    /// `None` when the process was terminated by a signal.
    exit_code: Option<i32>,
    stderr: String,
  },

  /// The command exceeded its timeout and was killed.
  #[error("step '{step_id}' timed out after {timeout_ms}ms")]
  Timeout { step_id: String, timeout_ms: u64 },
}

impl StepExecutionError {
  /// The id of the step that failed.
  pub fn step_id(&self) -> &str {
    match self {
      Self::Spawn { step_id, .. }
      | Self::NonZeroExit { step_id, .. }
      | Self::Timeout { step_id, .. } => step_id,
    }
  }
}
