//! Task producers.

use std::future::Future;

use futures::future::BoxFuture;

/// A deferred asynchronous operation.
///
/// Invoking [`start`](TaskProducer::start) consumes the producer and begins the
/// operation. Implemented for every `FnOnce() -> Fut` where `Fut` resolves to a
/// `Result<T, E>`, so plain closures and async blocks wrapped in closures work
/// without adapters.
pub trait TaskProducer<T, E> {
  /// The future returned when the producer is started.
  type Future: Future<Output = Result<T, E>>;

  /// Start the operation.
  fn start(self) -> Self::Future;
}

impl<F, Fut, T, E> TaskProducer<T, E> for F
where
  F: FnOnce() -> Fut,
  Fut: Future<Output = Result<T, E>>,
{
  type Future = Fut;

  fn start(self) -> Self::Future {
    self()
  }
}

/// A type-erased producer, as stored by [`SequentialRunner`](crate::SequentialRunner).
pub type BoxedProducer<'a, T, E> = Box<dyn FnOnce() -> BoxFuture<'a, Result<T, E>> + Send + 'a>;
