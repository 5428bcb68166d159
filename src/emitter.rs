//! The producer's half of the handoff pair.
//!
//! A producer function receives an [`Emitter`] and calls
//! [`emit`](Emitter::emit) once per item. Each call parks the producer's
//! thread until the consumer resumes it, so exactly one side runs at any
//! instant. The consumer's answer comes back as the return value of
//! `emit`: a resumption value, an injected error, or a close request.
//!
//! [`Unwind`] is the producer-side unwinding carrier. `Unwind::Closed` is
//! the distinguished termination signal: producer code that catches "any
//! error" from `emit` can special-case it and re-raise it with `?`, which
//! is what keeps ignored-close detection possible.

use crossbeam_channel::{bounded, Receiver, Sender};

use crate::generator::Resume;

/// Why a producer is unwinding: its own error, or a cooperative close.
///
/// `From<E>` is implemented so `?` inside a producer propagates both plain
/// application errors and anything returned by [`Emitter::emit`]:
///
/// ```rust
/// use genify::CallbackGen;
///
/// fn parse(s: &str) -> Result<i32, String> {
///     s.parse().map_err(|_| format!("bad number: {s}"))
/// }
///
/// let numbers: CallbackGen<i32, (), (), String> = genify::from_callback(|emit| {
///     for raw in ["1", "2"] {
///         let n = parse(raw)?; // String lifts into Unwind::Error
///         emit.emit(n)?; // close requests and thrown errors propagate
///     }
///     Ok(None)
/// });
/// ```
///
/// A producer that unwinds with `Unwind::Closed` of its own accord, without
/// having been asked to close, is treated as cleanly exhausted with no
/// final value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unwind<E> {
    /// The producer failed with an application error.
    Error(E),
    /// The producer is unwinding because the consumer requested a close,
    /// or because the consumer side went away entirely.
    Closed,
}

impl<E> From<E> for Unwind<E> {
    fn from(error: E) -> Self {
        Unwind::Error(error)
    }
}

/// The emit operation handed to a producer function.
///
/// Owns the producer's ends of the two handoff channels and nothing else,
/// so no reference runs from the producer back to the consumer-side
/// adapter.
#[derive(Debug)]
pub struct Emitter<Y, I, E> {
    items: Sender<Y>,
    resumes: Receiver<Resume<I, E>>,
}

impl<Y, I, E> Emitter<Y, I, E> {
    /// Hand `value` to the consumer and park until the next resume.
    ///
    /// Returns `Ok(None)` when resumed by `advance`, `Ok(Some(v))` when
    /// resumed by `send(v)`, `Err(Unwind::Error(e))` when the consumer
    /// threw `e` in, and `Err(Unwind::Closed)` when the consumer requested
    /// termination or dropped the generator. On a close request the
    /// producer should stop emitting and unwind, normally via `?`.
    pub fn emit(&self, value: Y) -> Result<Option<I>, Unwind<E>> {
        if self.items.send(value).is_err() {
            // The adapter is gone; nothing will ever resume us.
            return Err(Unwind::Closed);
        }
        match self.resumes.recv() {
            Ok(Resume::Next) => Ok(None),
            Ok(Resume::Send(value)) => Ok(Some(value)),
            Ok(Resume::Throw(error)) => Err(Unwind::Error(error)),
            Ok(Resume::Close) | Err(_) => Err(Unwind::Closed),
        }
    }
}

/// The consumer's ends of the handoff pair.
pub(crate) struct Link<Y, I, E> {
    pub(crate) resumes: Sender<Resume<I, E>>,
    pub(crate) items: Receiver<Y>,
}

/// Build the two single-slot channels connecting a consumer to a worker.
///
/// One slot per direction is enough: the resume/item protocol strictly
/// alternates, so at most one message is ever pending on either channel.
pub(crate) fn handoff<Y, I, E>() -> (Link<Y, I, E>, Emitter<Y, I, E>) {
    let (item_tx, item_rx) = bounded(1);
    let (resume_tx, resume_rx) = bounded(1);
    (
        Link {
            resumes: resume_tx,
            items: item_rx,
        },
        Emitter {
            items: item_tx,
            resumes: resume_rx,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_maps_resume_commands() {
        let (link, emitter) = handoff::<i32, i32, &str>();

        link.resumes.send(Resume::Next).unwrap();
        assert_eq!(emitter.emit(1), Ok(None));
        assert_eq!(link.items.recv(), Ok(1));

        link.resumes.send(Resume::Send(7)).unwrap();
        assert_eq!(emitter.emit(2), Ok(Some(7)));
        assert_eq!(link.items.recv(), Ok(2));

        link.resumes.send(Resume::Throw("bang")).unwrap();
        assert_eq!(emitter.emit(3), Err(Unwind::Error("bang")));
        assert_eq!(link.items.recv(), Ok(3));

        link.resumes.send(Resume::Close).unwrap();
        assert_eq!(emitter.emit(4), Err(Unwind::Closed));
    }

    #[test]
    fn test_emit_observes_disconnect_as_close() {
        let (link, emitter) = handoff::<i32, i32, &str>();
        drop(link);
        assert_eq!(emitter.emit(1), Err(Unwind::Closed));
    }

    #[test]
    fn test_unwind_from_lifts_errors() {
        fn fails() -> Result<(), &'static str> {
            Err("boom")
        }
        fn producer_body() -> Result<(), Unwind<&'static str>> {
            fails()?;
            Ok(())
        }
        assert_eq!(producer_body(), Err(Unwind::Error("boom")));
    }
}
