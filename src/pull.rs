//! Push-to-pull conversion: a generator backed by a producer thread.
//!
//! [`from_callback`] takes a producer function — one argument, the
//! [`Emitter`] — and exposes it as a [`CallbackGen`], a pull-style
//! [`Generator`]. The producer's call stack lives on a dedicated worker
//! thread that is parked on a channel receive at every `emit` call, so the
//! pair behaves like a coroutine: exactly one of the two threads executes
//! application code at any instant, and every operation on the generator
//! blocks the caller until the producer answers.
//!
//! The worker is started lazily on the first [`advance`](Generator::advance).
//! Sending, throwing, or closing before that point is answered locally and
//! never starts the thread. Once the generator reports exhaustion the
//! worker thread has already been joined.

use std::fmt;
use std::mem;
use std::panic;
use std::thread::{self, JoinHandle};

use tracing::{trace, warn};

use crate::emitter::{handoff, Emitter, Link, Unwind};
use crate::error::GenError;
use crate::generator::{Generator, Resume, ResumeResult};
use crate::step::Step;

type Producer<Y, I, R, E> =
    Box<dyn FnOnce(Emitter<Y, I, E>) -> Result<Option<R>, Unwind<E>> + Send>;

type Worker<R, E> = JoinHandle<Result<Option<R>, Unwind<E>>>;

enum State<Y, I, R, E> {
    /// Producer not yet started; holds it until the first `advance`.
    Created(Producer<Y, I, R, E>),
    /// Worker thread parked inside `emit`, waiting for a resume.
    Live {
        link: Link<Y, I, E>,
        worker: Worker<R, E>,
    },
    /// Worker thread has ended and been joined.
    Exhausted,
}

/// Convert a callback-invoking producer into a pull-style generator.
///
/// The producer runs once, on its own thread, started on the first
/// [`advance`](Generator::advance). It receives an [`Emitter`] and calls
/// [`emit`](Emitter::emit) once per item; the consumer's `send`, `throw`,
/// and `close` show up as `emit`'s return value. The producer finishes by
/// returning its final value (`Ok(Some(_))` or `Ok(None)`) or an error.
///
/// # Examples
///
/// ```rust
/// use genify::{CallbackGen, Generator, Step};
///
/// let mut numbers: CallbackGen<i32, (), i32, String> = genify::from_callback(|emit| {
///     emit.emit(1)?;
///     emit.emit(2)?;
///     Ok(Some(3))
/// });
///
/// assert_eq!(numbers.advance(), Ok(Step::Yielded(1)));
/// assert_eq!(numbers.advance(), Ok(Step::Yielded(2)));
/// assert_eq!(numbers.advance(), Ok(Step::Complete(Some(3))));
/// assert_eq!(numbers.advance(), Ok(Step::Complete(None)));
/// ```
///
/// Resumption values and injected errors are delivered at the emit site:
///
/// ```rust
/// use genify::{CallbackGen, Generator, Step, Unwind};
///
/// let mut echo: CallbackGen<String, i32, (), String> = genify::from_callback(|emit| {
///     let mut last = 0;
///     loop {
///         match emit.emit(format!("last was {last}")) {
///             Ok(Some(n)) => last = n,
///             Ok(None) => {}
///             Err(unwind) => return Err(unwind),
///         }
///     }
/// });
///
/// assert!(echo.advance().unwrap().is_yielded());
/// assert_eq!(echo.send(7), Ok(Step::Yielded("last was 7".to_string())));
/// assert_eq!(echo.close(), Ok(()));
/// ```
pub fn from_callback<Y, I, R, E, F>(producer: F) -> CallbackGen<Y, I, R, E>
where
    F: FnOnce(Emitter<Y, I, E>) -> Result<Option<R>, Unwind<E>> + Send + 'static,
{
    CallbackGen {
        state: State::Created(Box::new(producer)),
    }
}

/// A pull-style generator backed by a producer function on a worker thread.
///
/// Created by [`from_callback`]. Operations come from the [`Generator`]
/// trait; iteration (repeated `advance` until exhaustion) via [`Iterator`].
///
/// Exclusive access is enforced by `&mut self`, so re-entrant or concurrent
/// use of one generator is a compile-time error rather than a runtime one.
///
/// Dropping a live generator performs the equivalent of
/// [`close`](Generator::close): the producer is resumed with the close
/// signal and, once it unwinds, its thread is joined. A producer that
/// ignores the signal is detached instead, with its channels dropped so
/// its next `emit` observes the disconnect.
pub struct CallbackGen<Y, I, R, E> {
    state: State<Y, I, R, E>,
}

impl<Y, I, R, E> CallbackGen<Y, I, R, E>
where
    Y: Send + 'static,
    I: Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
{
    /// Park on the item channel until the worker yields or finishes.
    ///
    /// `self.state` is already `Exhausted` when this runs; it is restored
    /// to `Live` only when an item arrives. A disconnected item channel
    /// means the producer returned, and the real outcome is read from the
    /// join handle, so exhaustion is reported only after the thread ended.
    fn await_reply(&mut self, link: Link<Y, I, E>, worker: Worker<R, E>) -> ResumeResult<Y, R, E> {
        match link.items.recv() {
            Ok(item) => {
                self.state = State::Live { link, worker };
                Ok(Step::Yielded(item))
            }
            Err(_) => {
                trace!("producer finished, joining worker thread");
                match worker.join() {
                    Ok(Ok(value)) => Ok(Step::Complete(value)),
                    Ok(Err(Unwind::Error(error))) => Err(GenError::Producer(error)),
                    Ok(Err(Unwind::Closed)) => Ok(Step::Complete(None)),
                    Err(payload) => panic::resume_unwind(payload),
                }
            }
        }
    }
}

impl<Y, I, R, E> Generator for CallbackGen<Y, I, R, E>
where
    Y: Send + 'static,
    I: Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
{
    type Yield = Y;
    type Resume = I;
    type Return = R;
    type Error = E;

    fn resume(&mut self, cmd: Resume<I, E>) -> ResumeResult<Y, R, E> {
        match mem::replace(&mut self.state, State::Exhausted) {
            State::Created(producer) => match cmd {
                Resume::Next => {
                    trace!("starting producer thread");
                    let (link, emitter) = handoff();
                    let worker = thread::spawn(move || producer(emitter));
                    self.await_reply(link, worker)
                }
                Resume::Send(_) => {
                    self.state = State::Created(producer);
                    Err(GenError::NotStarted)
                }
                Resume::Throw(error) => Err(GenError::Producer(error)),
                Resume::Close => Ok(Step::Complete(None)),
            },
            State::Live { link, worker } => {
                // This send can only fail if the worker died without
                // reporting (it panicked mid-emit); the join in
                // await_reply then surfaces the panic.
                let _ = link.resumes.send(cmd);
                self.await_reply(link, worker)
            }
            State::Exhausted => match cmd {
                Resume::Throw(error) => Err(GenError::Producer(error)),
                _ => Ok(Step::Complete(None)),
            },
        }
    }
}

impl<Y, I, R, E> Iterator for CallbackGen<Y, I, R, E>
where
    Y: Send + 'static,
    I: Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
{
    type Item = Result<Y, GenError<E>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.advance() {
            Ok(Step::Yielded(item)) => Some(Ok(item)),
            Ok(Step::Complete(_)) => None,
            // the error exhausts the generator, so iteration ends next call
            Err(error) => Some(Err(error)),
        }
    }
}

impl<Y, I, R, E> Drop for CallbackGen<Y, I, R, E> {
    fn drop(&mut self) {
        let state = mem::replace(&mut self.state, State::Exhausted);
        if let State::Live { link, worker } = state {
            if link.resumes.send(Resume::Close).is_err() {
                // worker already gone mid-emit; reap it
                let _ = worker.join();
                return;
            }
            match link.items.recv() {
                Ok(_) => {
                    // Close was swallowed and the producer emitted again.
                    // Dropping the link makes its next emit observe the
                    // disconnect; the thread is left to finish on its own
                    // rather than blocking drop indefinitely.
                    warn!("producer ignored close request, detaching worker thread");
                }
                Err(_) => {
                    let _ = worker.join();
                }
            }
        }
    }
}

impl<Y, I, R, E> fmt::Debug for CallbackGen<Y, I, R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Created(_) => "Created",
            State::Live { .. } => "Live",
            State::Exhausted => "Exhausted",
        };
        f.debug_struct("CallbackGen").field("state", &state).finish()
    }
}
