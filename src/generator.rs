//! Core trait for pull-style generators.
//!
//! This module defines the [`Generator`] trait, the consumer-facing shape
//! of every sequence in this crate. A [`Generator`] is a stateful object
//! that hands out one item per resume, accepts a value, an injected error,
//! or a close request in exchange, and eventually reports exhaustion with
//! an optional final value.
//!
//! Everything is built on the single required method [`resume`], which
//! takes a [`Resume`] command; `advance`, `send`, `throw`, and `close` are
//! provided wrappers. Thread-backed generators come from
//! [`from_callback`](crate::from_callback); hand-written state machines
//! can implement the trait directly.

use crate::error::GenError;
use crate::step::Step;

/// A resume command sent into a suspended generator.
///
/// This is both the public vocabulary of [`Generator::resume`] and the
/// message delivered to a suspended producer, which observes it through
/// the return value of [`Emitter::emit`](crate::Emitter::emit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resume<I, E> {
    /// Resume without a value; `emit` returns `Ok(None)`.
    Next,
    /// Resume with a value; `emit` returns `Ok(Some(value))`.
    Send(I),
    /// Resume by raising an error at the emit site; `emit` returns
    /// `Err(Unwind::Error(error))`.
    Throw(E),
    /// Request cooperative termination; `emit` returns
    /// `Err(Unwind::Closed)`.
    Close,
}

/// The outcome of a single resume: an item, exhaustion, or an error.
pub type ResumeResult<Y, R, E> = Result<Step<Y, R>, GenError<E>>;

/// A pull-style generator: one item per resume, with two-way communication.
///
/// # Examples
///
/// Implementing the trait by hand for a small state machine:
///
/// ```rust
/// use genify::{GenError, Generator, Resume, Step};
///
/// struct Countdown(u32);
///
/// impl Generator for Countdown {
///     type Yield = u32;
///     type Resume = ();
///     type Return = ();
///     type Error = String;
///
///     fn resume(&mut self, cmd: Resume<(), String>) -> Result<Step<u32, ()>, GenError<String>> {
///         match cmd {
///             Resume::Next | Resume::Send(()) if self.0 > 0 => {
///                 self.0 -= 1;
///                 Ok(Step::Yielded(self.0 + 1))
///             }
///             Resume::Throw(error) => {
///                 self.0 = 0;
///                 Err(GenError::Producer(error))
///             }
///             _ => {
///                 self.0 = 0;
///                 Ok(Step::Complete(None))
///             }
///         }
///     }
/// }
///
/// let mut countdown = Countdown(2);
/// assert_eq!(countdown.advance(), Ok(Step::Yielded(2)));
/// assert_eq!(countdown.advance(), Ok(Step::Yielded(1)));
/// assert_eq!(countdown.advance(), Ok(Step::Complete(None)));
/// ```
pub trait Generator {
    /// Type of items the generator yields.
    type Yield;
    /// Type of values the consumer can send back in.
    type Resume;
    /// Type of the final value carried by exhaustion.
    type Return;
    /// Application error type, flowing in both directions.
    type Error;

    /// Deliver one resume command and block until the generator answers.
    ///
    /// State rules every implementation must uphold:
    ///
    /// - Before the first item: `Next` starts the generator, `Send(_)`
    ///   fails with [`GenError::NotStarted`] without starting it,
    ///   `Throw(e)` re-raises `e` and exhausts it without starting it,
    ///   and `Close` exhausts it without starting it.
    /// - After exhaustion: `Throw(e)` re-raises `e`; everything else
    ///   answers `Complete(None)`. The final value is carried only by the
    ///   resume that caused exhaustion.
    /// - Answering `Close` with `Yielded(_)` means the producer ignored
    ///   the request; the generator stays live.
    fn resume(
        &mut self,
        cmd: Resume<Self::Resume, Self::Error>,
    ) -> ResumeResult<Self::Yield, Self::Return, Self::Error>;

    /// Request the next item, resuming the producer without a value.
    fn advance(&mut self) -> ResumeResult<Self::Yield, Self::Return, Self::Error> {
        self.resume(Resume::Next)
    }

    /// Resume the producer with `value` and request the next item.
    fn send(
        &mut self,
        value: Self::Resume,
    ) -> ResumeResult<Self::Yield, Self::Return, Self::Error> {
        self.resume(Resume::Send(value))
    }

    /// Raise `error` inside the producer at its suspension point.
    ///
    /// The producer may catch and recover, in which case the next item is
    /// returned; otherwise the error comes back as
    /// [`GenError::Producer`] and the generator is exhausted.
    fn throw(
        &mut self,
        error: Self::Error,
    ) -> ResumeResult<Self::Yield, Self::Return, Self::Error> {
        self.resume(Resume::Throw(error))
    }

    /// Request cooperative termination.
    ///
    /// Returns `Ok(())` when the producer stops, whether it unwinds
    /// cleanly, catches the request and returns (any final value is
    /// discarded), never started, or is already exhausted. The producer's
    /// error comes back if it raised one while unwinding, and
    /// [`GenError::IgnoredClose`] if it swallowed the request and emitted
    /// another item. Closing an exhausted generator is always a safe
    /// no-op.
    fn close(&mut self) -> Result<(), GenError<Self::Error>> {
        match self.resume(Resume::Close)? {
            Step::Yielded(_) => Err(GenError::IgnoredClose),
            Step::Complete(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal in-place implementation to exercise the provided methods.
    struct OneShot {
        yielded: bool,
        done: bool,
    }

    impl Generator for OneShot {
        type Yield = i32;
        type Resume = i32;
        type Return = i32;
        type Error = &'static str;

        fn resume(&mut self, cmd: Resume<i32, &'static str>) -> ResumeResult<i32, i32, &'static str> {
            if self.done {
                return match cmd {
                    Resume::Throw(error) => Err(GenError::Producer(error)),
                    _ => Ok(Step::Complete(None)),
                };
            }
            match cmd {
                Resume::Send(_) if !self.yielded => Err(GenError::NotStarted),
                Resume::Next | Resume::Send(_) if !self.yielded => {
                    self.yielded = true;
                    Ok(Step::Yielded(1))
                }
                Resume::Next | Resume::Send(_) => {
                    self.done = true;
                    Ok(Step::Complete(Some(10)))
                }
                Resume::Throw(error) => {
                    self.done = true;
                    Err(GenError::Producer(error))
                }
                Resume::Close => {
                    self.done = true;
                    Ok(Step::Complete(None))
                }
            }
        }
    }

    fn one_shot() -> OneShot {
        OneShot {
            yielded: false,
            done: false,
        }
    }

    #[test]
    fn test_provided_methods_delegate() {
        let mut g = one_shot();
        assert_eq!(g.send(3), Err(GenError::NotStarted));
        assert_eq!(g.advance(), Ok(Step::Yielded(1)));
        assert_eq!(g.send(3), Ok(Step::Complete(Some(10))));
        assert_eq!(g.advance(), Ok(Step::Complete(None)));
        assert_eq!(g.throw("late"), Err(GenError::Producer("late")));
    }

    #[test]
    fn test_close_maps_outcomes() {
        let mut fresh = one_shot();
        assert_eq!(fresh.close(), Ok(()));

        let mut started = one_shot();
        assert_eq!(started.advance(), Ok(Step::Yielded(1)));
        assert_eq!(started.close(), Ok(()));
        // closing again is a no-op
        assert_eq!(started.close(), Ok(()));
    }
}
