//! Pull-to-push conversion: driving a generator from inside a producer.
//!
//! [`to_callback`] is the structural mirror of
//! [`from_callback`](crate::from_callback): it wraps a [`Generator`]
//! factory as a producer function, suitable as input to `from_callback`.
//! The returned producer obtains a fresh generator, pulls items from it,
//! and pushes each one through the caller-supplied emit operation,
//! forwarding whatever comes back — a resumption value, a thrown error,
//! or a close request — into the underlying generator.

use crate::emitter::{Emitter, Unwind};
use crate::error::GenError;
use crate::generator::{Generator, Resume};
use crate::step::Step;

/// Wrap a generator factory as a callback-invoking producer function.
///
/// Each `emit` outcome is forwarded into the generator: a plain resume as
/// [`advance`](Generator::advance), a value as [`send`](Generator::send),
/// an error as [`throw`](Generator::throw), and a close request as a raw
/// close resume. The close case deliberately bypasses
/// [`close`](Generator::close): a generator that answers the close request
/// with another item makes this producer emit again, so an enclosing
/// [`from_callback`](crate::from_callback) adapter still detects the
/// ignored close instead of having it masked here.
///
/// On exhaustion the producer returns the generator's final value; on a
/// propagated error it fails with that error.
///
/// # Panics
///
/// Panics if the generator answers `advance`/`send` with a usage error
/// such as [`GenError::NotStarted`], which a conforming [`Generator`]
/// never does for the operations this driver performs.
///
/// # Examples
///
/// Round-tripping an iterator-backed generator through a producer:
///
/// ```rust
/// use genify::{from_callback, from_iter, to_callback, CallbackGen, Generator, Step};
///
/// let mut copy: CallbackGen<i32, (), (), String> =
///     from_callback(to_callback(|| from_iter(vec![1, 2, 3])));
///
/// assert_eq!(copy.advance(), Ok(Step::Yielded(1)));
/// assert_eq!(copy.advance(), Ok(Step::Yielded(2)));
/// assert_eq!(copy.advance(), Ok(Step::Yielded(3)));
/// assert_eq!(copy.advance(), Ok(Step::Complete(None)));
/// ```
pub fn to_callback<G, F>(
    factory: F,
) -> impl FnOnce(
    Emitter<G::Yield, G::Resume, G::Error>,
) -> Result<Option<G::Return>, Unwind<G::Error>>
where
    G: Generator,
    F: FnOnce() -> G,
{
    move |emitter| {
        let mut generator = factory();
        let mut step = generator.advance();
        loop {
            let item = match step {
                Ok(Step::Yielded(item)) => item,
                Ok(Step::Complete(value)) => return Ok(value),
                Err(GenError::Producer(error)) => return Err(Unwind::Error(error)),
                Err(GenError::NotStarted | GenError::IgnoredClose) => {
                    panic!("generator answered a plain resume with a usage error")
                }
            };
            step = match emitter.emit(item) {
                Ok(None) => generator.advance(),
                Ok(Some(value)) => generator.send(value),
                Err(Unwind::Error(error)) => generator.throw(error),
                Err(Unwind::Closed) => generator.resume(Resume::Close),
            };
        }
    }
}
