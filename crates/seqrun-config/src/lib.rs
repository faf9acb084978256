//! Seqrun Config
//!
//! This crate contains the serializable plan configuration types for seqrun.
//! A plan is an ordered list of command steps that the step executor runs one
//! after another, stopping at the first failure.
//!
//! Plans are loaded from JSON files (via the CLI with `seqrun run plan.json`).

mod error;
mod plan;
mod step;

pub use error::ConfigError;
pub use plan::PlanDef;
pub use step::StepDef;
