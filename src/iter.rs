//! Generator adapter for plain iterators.
//!
//! [`from_iter`] wraps any [`IntoIterator`] as a [`Generator`] with unit
//! resumption and return types, which makes ordinary sequences usable
//! wherever a pull-style generator is expected — most usefully as the
//! factory side of [`to_callback`](crate::to_callback), and as a simple
//! reference generator when testing drivers.
//!
//! # Examples
//!
//! ```rust
//! use genify::{from_iter, Generator, Step};
//!
//! let mut numbers = from_iter::<_, String>(vec![1, 2]);
//! assert_eq!(numbers.advance(), Ok(Step::Yielded(1)));
//! assert_eq!(numbers.advance(), Ok(Step::Yielded(2)));
//! assert_eq!(numbers.advance(), Ok(Step::Complete(None)));
//! ```

use std::marker::PhantomData;

use crate::error::GenError;
use crate::generator::{Generator, Resume, ResumeResult};
use crate::step::Step;

/// A [`Generator`] view over a plain iterator.
///
/// Created by [`from_iter`]. Items come one per
/// [`advance`](Generator::advance); resumption values carry no
/// information (`Resume = ()`), there is never a final value, a thrown
/// error is re-raised to the caller and exhausts the generator, and a
/// close request drops the remaining items.
#[derive(Debug)]
pub struct IterGen<T, E> {
    iter: Option<T>,
    started: bool,
    _error: PhantomData<E>,
}

/// Wrap an [`IntoIterator`] as a [`Generator`].
///
/// The error type is free because an iterator never fails on its own; tie
/// it down at the use site when inference needs help:
///
/// ```rust
/// use genify::{from_iter, GenError, Generator, Step};
///
/// let mut numbers = from_iter::<_, &str>(1..=2);
/// assert_eq!(numbers.advance(), Ok(Step::Yielded(1)));
/// assert_eq!(numbers.throw("stop"), Err(GenError::Producer("stop")));
/// assert_eq!(numbers.advance(), Ok(Step::Complete(None)));
/// ```
pub fn from_iter<T, E>(iter: T) -> IterGen<T::IntoIter, E>
where
    T: IntoIterator,
{
    IterGen {
        iter: Some(iter.into_iter()),
        started: false,
        _error: PhantomData,
    }
}

impl<T, E> Generator for IterGen<T, E>
where
    T: Iterator,
{
    type Yield = T::Item;
    type Resume = ();
    type Return = ();
    type Error = E;

    fn resume(&mut self, cmd: Resume<(), E>) -> ResumeResult<T::Item, (), E> {
        match cmd {
            Resume::Send(()) if !self.started => Err(GenError::NotStarted),
            Resume::Next | Resume::Send(()) => {
                self.started = true;
                match self.iter.as_mut().and_then(Iterator::next) {
                    Some(item) => Ok(Step::Yielded(item)),
                    None => {
                        self.iter = None;
                        Ok(Step::Complete(None))
                    }
                }
            }
            Resume::Throw(error) => {
                self.iter = None;
                Err(GenError::Producer(error))
            }
            Resume::Close => {
                self.iter = None;
                Ok(Step::Complete(None))
            }
        }
    }
}
