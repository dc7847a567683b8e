// used to print out readable forms of a container
use std::fmt;
// used when moving a value out of a container held by mutable reference
use std::mem;

// our own stuff that we need
use crate::error::AbsentError;

// ------------- Optional -------------
/// A value that may or may not be present.
///
/// The container is always in exactly one of two states: [`Optional::Empty`]
/// or [`Optional::Holding`] a single value, which it exclusively owns. The
/// value is dropped together with the container, or earlier when it is
/// replaced by [`Optional::assign`] or released by [`Optional::reset`].
///
/// Presence-checked access goes through [`Optional::try_get`], which reports
/// absence as an [`AbsentError`]. [`Optional::must_get`] treats absence as a
/// caller bug and panics.
///
/// ```
/// use optional::Optional;
/// let mut o = Optional::empty();
/// assert!(!o.is_present());
/// o.assign(5);
/// assert_eq!(o.try_get(), Ok(&5));
/// let halved = o.flat_map(|x| if x == 0 { Optional::empty() } else { Optional::holding(10 / x) });
/// assert_eq!(halved, Optional::holding(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    Empty,
    Holding(T),
}

impl<T> Optional<T> {
    pub const fn empty() -> Self {
        Optional::Empty
    }
    pub const fn new() -> Self {
        Optional::Empty
    }
    pub const fn holding(value: T) -> Self {
        Optional::Holding(value)
    }

    /// Stores `value`, dropping whatever was held before.
    pub fn assign(&mut self, value: T) {
        *self = Optional::Holding(value);
    }
    /// Stores `value` and hands back the previous state.
    pub fn replace(&mut self, value: T) -> Optional<T> {
        mem::replace(self, Optional::Holding(value))
    }
    /// Drops any held value. Resetting an empty container does nothing.
    pub fn reset(&mut self) {
        *self = Optional::Empty;
    }
    /// Moves the held value out, leaving the container empty.
    pub fn take(&mut self) -> Optional<T> {
        mem::replace(self, Optional::Empty)
    }

    pub const fn is_present(&self) -> bool {
        matches!(self, Optional::Holding(_))
    }
    pub const fn is_empty(&self) -> bool {
        matches!(self, Optional::Empty)
    }

    pub fn try_get(&self) -> Result<&T, AbsentError> {
        match self {
            Optional::Holding(value) => Ok(value),
            Optional::Empty => Err(AbsentError),
        }
    }
    pub fn try_get_mut(&mut self) -> Result<&mut T, AbsentError> {
        match self {
            Optional::Holding(value) => Ok(value),
            Optional::Empty => Err(AbsentError),
        }
    }
    pub fn try_into_inner(self) -> Result<T, AbsentError> {
        match self {
            Optional::Holding(value) => Ok(value),
            Optional::Empty => Err(AbsentError),
        }
    }

    /// Returns a copy of the held value, or `fallback` when empty.
    pub fn get_or(&self, fallback: T) -> T
    where
        T: Clone,
    {
        match self {
            Optional::Holding(value) => value.clone(),
            Optional::Empty => fallback,
        }
    }
    /// Returns a copy of the held value, or `T::default()` when empty.
    pub fn get_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        match self {
            Optional::Holding(value) => value.clone(),
            Optional::Empty => T::default(),
        }
    }
    pub fn into_inner_or(self, fallback: T) -> T {
        match self {
            Optional::Holding(value) => value,
            Optional::Empty => fallback,
        }
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty. Only call this once presence has
    /// been established some other way.
    #[track_caller]
    pub fn must_get(&self) -> &T {
        match self {
            Optional::Holding(value) => value,
            Optional::Empty => panic!("{}", AbsentError),
        }
    }
    /// Consuming counterpart of [`Optional::must_get`].
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    #[track_caller]
    pub fn into_inner(self) -> T {
        match self {
            Optional::Holding(value) => value,
            Optional::Empty => panic!("{}", AbsentError),
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Optional::Holding(value) => Some(value),
            Optional::Empty => None,
        }
    }
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Holding(value) => Optional::Holding(value),
            Optional::Empty => Optional::Empty,
        }
    }
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Optional::Holding(value) => Optional::Holding(value),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Applies `f` to the held value. `f` is not called on an empty container.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Holding(value) => Optional::Holding(f(value)),
            Optional::Empty => Optional::Empty,
        }
    }
    /// Like [`Optional::map`], but `f` decides whether the result is present.
    pub fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Holding(value) => f(value),
            Optional::Empty => Optional::Empty,
        }
    }
    /// Like [`Optional::map`] for a fallible `f`; its error is returned as is.
    pub fn try_map<U, E, F>(self, f: F) -> Result<Optional<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Optional::Holding(value) => f(value).map(Optional::Holding),
            Optional::Empty => Ok(Optional::Empty),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Empty
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Optional::Holding(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Holding(value),
            None => Optional::Empty,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Holding(value) => Some(value),
            Optional::Empty => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Optional::Holding(value) => write!(f, "Holding({})", value),
            Optional::Empty => write!(f, "Empty"),
        }
    }
}
