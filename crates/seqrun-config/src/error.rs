//! Plan configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or validating a plan.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// The plan file could not be read.
  #[error("failed to read plan file: {}", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The plan is not valid JSON or does not match the plan schema.
  #[error("failed to parse plan: {0}")]
  Parse(#[from] serde_json::Error),

  /// A step has a blank `step_id`.
  #[error("step at index {index} has an empty step_id")]
  EmptyStepId { index: usize },

  /// Two steps share the same `step_id`.
  #[error("duplicate step_id: {0}")]
  DuplicateStepId(String),

  /// A step has a blank `command`.
  #[error("step '{step_id}' has an empty command")]
  EmptyCommand { step_id: String },
}
