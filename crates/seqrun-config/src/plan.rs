use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::step::StepDef;

/// An ordered list of steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDef {
  pub name: String,
  /// Steps in execution order. An empty plan is valid and does nothing.
  #[serde(default)]
  pub steps: Vec<StepDef>,
}

impl PlanDef {
  /// Parse a plan from a JSON string. Does not validate.
  pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
    Ok(serde_json::from_str(content)?)
  }

  /// Read and parse a plan file, then validate it.
  pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
      .await
      .map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
      })?;

    let plan = Self::from_json_str(&content)?;
    plan.validate()?;
    Ok(plan)
  }

  /// Check that every step has a non-empty, unique id and a non-empty command.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for (index, step) in self.steps.iter().enumerate() {
      if step.step_id.trim().is_empty() {
        return Err(ConfigError::EmptyStepId { index });
      }
      if !seen.insert(step.step_id.as_str()) {
        return Err(ConfigError::DuplicateStepId(step.step_id.clone()));
      }
      if step.command.trim().is_empty() {
        return Err(ConfigError::EmptyCommand {
          step_id: step.step_id.clone(),
        });
      }
    }

    Ok(())
  }
}
