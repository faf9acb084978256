//! Sequential runner.

use std::fmt;

use futures::FutureExt;
use tracing::{debug, info, instrument, warn};

use crate::producer::{BoxedProducer, TaskProducer};

const DEFAULT_LABEL: &str = "sequential";

/// Run `producers` one at a time, in order, collecting their results.
///
/// Producer `i + 1` is not invoked until producer `i` has completed
/// successfully. The first error is returned unchanged; producers after it are
/// dropped without being invoked and the results collected so far are
/// discarded. An empty input resolves to an empty `Vec`.
///
/// The sequence is taken by value, so the caller cannot observe or mutate it
/// once the run has started.
pub async fn run_sequential<I, P, T, E>(producers: I) -> Result<Vec<T>, E>
where
  I: IntoIterator<Item = P>,
  P: TaskProducer<T, E>,
{
  run_labelled(DEFAULT_LABEL, producers).await
}

#[instrument(name = "sequential_run", skip_all, fields(label = %label))]
async fn run_labelled<I, P, T, E>(label: &str, producers: I) -> Result<Vec<T>, E>
where
  I: IntoIterator<Item = P>,
  P: TaskProducer<T, E>,
{
  let mut results = Vec::new();

  for (index, producer) in producers.into_iter().enumerate() {
    debug!(index, "task started");

    match producer.start().await {
      Ok(value) => {
        debug!(index, "task completed");
        results.push(value);
      }
      Err(e) => {
        // Remaining producers are dropped with the iterator.
        warn!(
          index,
          completed = results.len(),
          "task failed, skipping remaining tasks"
        );
        return Err(e);
      }
    }
  }

  info!(tasks = results.len(), "sequential run completed");
  Ok(results)
}

/// An owned queue of task producers, run in insertion order.
///
/// Useful when the list is assembled piece by piece, or when producers of
/// different concrete types have to share one queue. Producers are boxed, so
/// they (and their futures) must be `Send`.
///
/// # Usage
///
/// ```ignore
/// let mut runner = SequentialRunner::with_label("deploy");
/// runner.push(|| build()).push(|| upload());
/// let outputs = runner.run().await?;
/// ```
pub struct SequentialRunner<'a, T, E> {
  label: String,
  producers: Vec<BoxedProducer<'a, T, E>>,
}

impl<'a, T, E> SequentialRunner<'a, T, E> {
  /// Create an empty runner.
  pub fn new() -> Self {
    Self::with_label(DEFAULT_LABEL)
  }

  /// Create an empty runner whose tracing span carries `label`.
  pub fn with_label(label: impl Into<String>) -> Self {
    Self {
      label: label.into(),
      producers: Vec::new(),
    }
  }

  /// Append a producer to the end of the queue.
  pub fn push<P>(&mut self, producer: P) -> &mut Self
  where
    P: TaskProducer<T, E> + Send + 'a,
    P::Future: Send + 'a,
  {
    self
      .producers
      .push(Box::new(move || producer.start().boxed()));
    self
  }

  /// The label used for the run's tracing span.
  pub fn label(&self) -> &str {
    &self.label
  }

  /// Number of queued producers.
  pub fn len(&self) -> usize {
    self.producers.len()
  }

  /// Whether no producers are queued.
  pub fn is_empty(&self) -> bool {
    self.producers.is_empty()
  }

  /// Run every queued producer in order.
  ///
  /// Same semantics as [`run_sequential`].
  pub async fn run(self) -> Result<Vec<T>, E> {
    let Self { label, producers } = self;
    run_labelled(&label, producers).await
  }
}

impl<T, E> Default for SequentialRunner<'_, T, E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T, E> fmt::Debug for SequentialRunner<'_, T, E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SequentialRunner")
      .field("label", &self.label)
      .field("producers", &self.producers.len())
      .finish()
  }
}
