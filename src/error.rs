//! Error taxonomy for generator operations.
//!
//! Every failure surfaces synchronously from the operation that triggered
//! it; nothing is swallowed inside the adapter. Exhaustion is not an error
//! and is reported through [`Step::Complete`](crate::Step) instead.

use thiserror::Error;

/// Errors returned by [`Generator`](crate::Generator) operations.
///
/// `E` is the application's own error type, flowing both directions: the
/// producer fails with it, and the consumer injects it with
/// [`throw`](crate::Generator::throw).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError<E> {
    /// The producer failed with an uncaught error, or an injected error
    /// was re-raised because the generator could not absorb it.
    ///
    /// This permanently exhausts the generator.
    #[error("{0}")]
    Producer(E),

    /// A value was sent into a generator that has not yielded yet.
    ///
    /// Only [`advance`](crate::Generator::advance) may perform the first
    /// resume. The generator is left untouched and the producer is never
    /// started, so a later `advance` still works.
    #[error("can't send a value into a generator that has not started")]
    NotStarted,

    /// The producer swallowed a close request and kept emitting.
    ///
    /// Reported by [`close`](crate::Generator::close) when the producer
    /// catches [`Unwind::Closed`](crate::Unwind) and then emits another
    /// item instead of unwinding. The offending item is discarded and the
    /// generator stays live.
    #[error("producer ignored the close request and kept emitting")]
    IgnoredClose,
}
