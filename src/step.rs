/// Result of resuming a generator, either yielding an item to continue or
/// completing with an optional final value.
///
/// `Step` is the answer type for every generator operation, similar to how
/// `Option` represents optional values and `Result` represents fallible
/// operations. A generator's final value is observed exactly once: the
/// resume that exhausts it answers `Complete(Some(value))` (when the
/// producer returned one), and every later resume answers `Complete(None)`.
///
/// # Examples
///
/// ```rust
/// use genify::Step;
///
/// let continuing: Step<i32, String> = Step::Yielded(42);
/// let finished: Step<i32, String> = Step::Complete(Some("done".to_string()));
///
/// assert!(continuing.is_yielded());
/// assert_eq!(finished.complete_value(), Some(Some("done".to_string())));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, R> {
    /// The generator produced an intermediate item and is suspended.
    Yielded(Y),
    /// The generator is exhausted, carrying its final value once.
    Complete(Option<R>),
}

impl<Y, R> Step<Y, R> {
    /// Returns `true` if the step is `Yielded`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use genify::Step;
    ///
    /// let x: Step<i32, &str> = Step::Yielded(42);
    /// assert!(x.is_yielded());
    ///
    /// let y: Step<i32, &str> = Step::Complete(None);
    /// assert!(!y.is_yielded());
    /// ```
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Complete`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use genify::Step;
    ///
    /// let x: Step<i32, &str> = Step::Complete(Some("done"));
    /// assert!(x.is_complete());
    ///
    /// let y: Step<i32, &str> = Step::Yielded(42);
    /// assert!(!y.is_complete());
    /// ```
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Converts from `Step<Y, R>` to `Option<Y>`, consuming `self` and
    /// discarding the final value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use genify::Step;
    ///
    /// let x: Step<i32, &str> = Step::Yielded(42);
    /// assert_eq!(x.yielded_value(), Some(42));
    ///
    /// let y: Step<i32, &str> = Step::Complete(None);
    /// assert_eq!(y.yielded_value(), None);
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<Y> {
        match self {
            Step::Yielded(item) => Some(item),
            Step::Complete(_) => None,
        }
    }

    /// Converts from `Step<Y, R>` to `Option<Option<R>>`, consuming `self`
    /// and discarding the yielded item, if any.
    ///
    /// The outer `Option` distinguishes "still yielding" from "complete";
    /// the inner one carries the final value when the producer returned
    /// one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use genify::Step;
    ///
    /// let x: Step<i32, &str> = Step::Complete(Some("done"));
    /// assert_eq!(x.complete_value(), Some(Some("done")));
    ///
    /// let y: Step<i32, &str> = Step::Yielded(42);
    /// assert_eq!(y.complete_value(), None);
    /// ```
    #[inline]
    pub fn complete_value(self) -> Option<Option<R>> {
        match self {
            Step::Yielded(_) => None,
            Step::Complete(value) => Some(value),
        }
    }

    /// Returns the yielded item, panicking if the step is `Complete`.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Complete`.
    #[inline]
    #[track_caller]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(item) => item,
            Step::Complete(_) => panic!("called `Step::unwrap_yielded()` on a `Complete` value"),
        }
    }

    /// Returns the final value, panicking if the step is `Yielded`.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Yielded`.
    #[inline]
    #[track_caller]
    pub fn unwrap_complete(self) -> Option<R> {
        match self {
            Step::Yielded(_) => panic!("called `Step::unwrap_complete()` on a `Yielded` value"),
            Step::Complete(value) => value,
        }
    }

    /// Maps a `Step<Y, R>` to `Step<Y2, R>` by applying a function to the
    /// yielded item, leaving a `Complete` untouched.
    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, R>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(item) => Step::Yielded(f(item)),
            Step::Complete(value) => Step::Complete(value),
        }
    }

    /// Maps a `Step<Y, R>` to `Step<Y, R2>` by applying a function to the
    /// final value, leaving a `Yielded` untouched.
    #[inline]
    pub fn map_complete<R2, F>(self, f: F) -> Step<Y, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Step::Yielded(item) => Step::Yielded(item),
            Step::Complete(value) => Step::Complete(value.map(f)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let yielded: Step<i32, &str> = Step::Yielded(1);
        assert!(yielded.is_yielded());
        assert_eq!(yielded.yielded_value(), Some(1));
        assert_eq!(yielded.complete_value(), None);

        let complete: Step<i32, &str> = Step::Complete(Some("done"));
        assert!(complete.is_complete());
        assert_eq!(complete.yielded_value(), None);
        assert_eq!(complete.complete_value(), Some(Some("done")));
    }

    #[test]
    fn test_map() {
        let yielded: Step<i32, i32> = Step::Yielded(2);
        assert_eq!(yielded.map_yielded(|x| x * 10), Step::Yielded(20));

        let complete: Step<i32, i32> = Step::Complete(Some(2));
        assert_eq!(complete.map_complete(|x| x * 10), Step::Complete(Some(20)));

        let absent: Step<i32, i32> = Step::Complete(None);
        assert_eq!(absent.map_complete(|x| x * 10), Step::Complete(None));
    }

    #[test]
    #[should_panic(expected = "unwrap_yielded")]
    fn test_unwrap_yielded_panics_on_complete() {
        let complete: Step<i32, &str> = Step::Complete(None);
        complete.unwrap_yielded();
    }
}
