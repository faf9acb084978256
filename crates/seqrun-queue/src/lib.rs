//! Sequential execution of deferred async tasks.
//!
//! A task producer is a zero-argument callable that starts an asynchronous
//! operation when invoked. This crate runs a list of producers strictly one
//! after another, collecting their results in input order and stopping at the
//! first failure.
//!
//! # Usage
//!
//! ```ignore
//! use seqrun_queue::{SequentialRunner, run_sequential};
//!
//! // From any owned sequence of producers
//! let results = run_sequential(vec![|| fetch(1), || fetch(2)]).await?;
//!
//! // Or assembled incrementally
//! let mut runner = SequentialRunner::with_label("migrations");
//! runner.push(|| migrate("0001")).push(|| migrate("0002"));
//! let results = runner.run().await?;
//! ```

mod producer;
mod runner;

pub use producer::{BoxedProducer, TaskProducer};
pub use runner::{SequentialRunner, run_sequential};
