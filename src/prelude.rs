//! Commonly used imports
//!
//! Use `use genify::prelude::*;` for quick access to the most common types
//! and functions.

// Core types
pub use crate::{GenError, Generator, Resume, Step};

// Conversions
pub use crate::{from_callback, from_iter, to_callback};

// Producer side
pub use crate::{Emitter, Unwind};

// Concrete generators
pub use crate::{CallbackGen, IterGen};
