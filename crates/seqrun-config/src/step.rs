use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single command to run as part of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDef {
  pub step_id: String,
  /// Program to execute (resolved through `PATH`).
  pub command: String,
  #[serde(default)]
  pub args: Vec<String>,
  /// Extra environment variables, added on top of the inherited environment.
  #[serde(default, skip_serializing_if = "HashMap::is_empty")]
  pub env: HashMap<String, String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub working_dir: Option<PathBuf>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub timeout_ms: Option<u64>,
}
