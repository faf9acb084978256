//! Step execution for seqrun plans.
//!
//! This crate provides the [`StepExecutor`] which runs the command of a
//! single plan step, and runs whole plans by handing one task producer per
//! step to [`seqrun_queue::run_sequential`].

mod error;
mod executor;
mod result;

pub use error::StepExecutionError;
pub use executor::StepExecutor;
pub use result::{PlanResult, StepResult};
