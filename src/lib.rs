//! # Genify: pull-style generators from callback-style producers
//!
//! Convert between the two shapes of "a sequence of values with two-way
//! communication": push style, where a producer function is handed an
//! emit operation and calls it once per item, and pull style, where a
//! consumer asks a stateful [`Generator`] for one item at a time and may
//! send a value back, inject an error, or request early termination.
//!
//! ## Core Pieces
//!
//! - **[`from_callback`]**: producer function → [`CallbackGen`], a
//!   pull-style generator. The producer runs on a dedicated worker thread
//!   that parks at every [`Emitter::emit`] call, so the two sides run in
//!   strict alternation with full generator semantics: resumption values,
//!   injected errors, cooperative close, exhaustion, and teardown on drop.
//! - **[`to_callback`]**: [`Generator`] factory → producer function, the
//!   structural mirror, suitable as input to `from_callback`.
//! - **[`Generator`]**: the pull-side trait — `advance`, `send`, `throw`,
//!   `close`, all built on one `resume` method taking a [`Resume`]
//!   command and answering with a [`Step`] or a [`GenError`].
//!
//! ## Example
//!
//! ```rust
//! use genify::prelude::*;
//!
//! // A push-style producer: call `emit` once per item, return the final
//! // value. `?` propagates injected errors and close requests.
//! let mut letters: CallbackGen<char, (), usize, String> = from_callback(|emit| {
//!     let mut count = 0;
//!     for c in ['a', 'b', 'c'] {
//!         emit.emit(c)?;
//!         count += 1;
//!     }
//!     Ok(Some(count))
//! });
//!
//! // Pull items one at a time...
//! assert_eq!(letters.advance(), Ok(Step::Yielded('a')));
//! // ...or stop early; the producer is unwound cooperatively.
//! assert_eq!(letters.close(), Ok(()));
//! ```
//!
//! ## Semantics
//!
//! One worker thread per live [`CallbackGen`], started lazily on the first
//! `advance` — sending, throwing, or closing a generator that has not
//! started is answered without ever running the producer. Exactly one side
//! executes at any instant; every operation blocks the caller until the
//! producer yields, returns, or fails. Exhaustion carries the producer's
//! final value once and is absent thereafter, and once a generator reports
//! exhaustion its worker thread has already ended.

mod emitter;
mod error;
mod generator;
mod iter;
pub mod prelude;
mod pull;
mod push;
mod step;

pub use emitter::{Emitter, Unwind};
pub use error::GenError;
pub use generator::{Generator, Resume, ResumeResult};
pub use iter::{from_iter, IterGen};
pub use pull::{from_callback, CallbackGen};
pub use push::to_callback;
pub use step::Step;
