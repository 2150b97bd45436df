// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Markable Values
//!
//! `Markable<P>` is an optional value that stores nothing but the value
//! itself. Emptiness is encoded by the marked value reserved by the marking
//! policy `P`, so the container has exactly the size and layout of
//! `P::Value`. `Option<i64>`, by contrast, needs an extra discriminant and
//! doubles in size.
//!
//! ## Trade-off
//!
//! The marked value can no longer be stored as a legitimate value. Passing it
//! to `new`, `assign` or `replace` is a caller error: it is caught by an
//! assertion in debug builds (and with the `checked` feature), and silently
//! produces an empty container otherwise. Choose a policy whose marked value
//! your data never produces, or use `Option<T>`.
//!
//! ## Highlights
//!
//! - `#[repr(transparent)]` over `P::Value`; no tag, no allocation.
//! - `value()` and `into_value()` return `InvalidAccessError` on empty
//!   containers instead of leaking the marked value.
//! - Equality, ordering and hashing agree with `Option<T>`: empty equals
//!   empty, empty sorts before any value, values compare by `T`.
//! - Lossless conversions to and from `Option<T>` (`From<Option<T>>` and
//!   `into_option`).
//!
//! ## Usage
//!
//! ```rust
//! use markable::markable::Markable;
//! use markable::policy::scalar::MarkMin;
//!
//! let mut counter: Markable<MarkMin<i64>> = Markable::empty();
//! assert!(!counter.has_value());
//! assert_eq!(counter.value_or(0), 0);
//!
//! counter.assign(42);
//! assert_eq!(counter.value(), Ok(&42));
//!
//! counter.reset();
//! assert!(counter.value().is_err());
//! ```

use crate::{error::InvalidAccessError, policy::MarkingPolicy};
use std::{cmp::Ordering, marker::PhantomData};

/// An optional value encoded through a marked value of `P::Value`.
///
/// # Examples
///
/// ```rust
/// # use markable::markable::Markable;
/// # use markable::policy::scalar::MarkI64;
///
/// type Opt = Markable<MarkI64<{ i64::MIN }>>;
///
/// assert_eq!(Opt::new(5), Opt::new(5));
/// assert_eq!(Opt::empty(), Opt::empty());
/// assert_ne!(Opt::new(5), Opt::empty());
/// ```
#[repr(transparent)]
pub struct Markable<P>
where
    P: MarkingPolicy,
{
    storage: P::Value,
    _policy: PhantomData<fn() -> P>,
}

impl<P> Markable<P>
where
    P: MarkingPolicy,
{
    #[inline]
    #[track_caller]
    fn check_not_marked(value: &P::Value, operation: &str) {
        if cfg!(any(debug_assertions, feature = "checked")) {
            assert!(
                !P::is_marked_value(value),
                "called `Markable::{}` with the marked value",
                operation
            );
        }
    }

    #[inline(always)]
    fn access_error() -> InvalidAccessError {
        InvalidAccessError::new(std::any::type_name::<P::Value>())
    }

    /// Creates an empty `Markable` holding the marked value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use markable::markable::Markable;
    /// # use markable::policy::scalar::MarkMax;
    ///
    /// let index: Markable<MarkMax<usize>> = Markable::empty();
    /// assert!(index.is_empty());
    /// assert_eq!(*index.representation(), usize::MAX);
    /// ```
    #[inline]
    pub fn empty() -> Self {
        Self::from_representation(P::marked_value())
    }

    /// Creates a `Markable` holding `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is the marked value and debug assertions or the
    /// `checked` feature are enabled. Otherwise the result is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use markable::markable::Markable;
    /// # use markable::policy::scalar::MarkMin;
    ///
    /// let m: Markable<MarkMin<i64>> = Markable::new(42);
    /// assert!(m.has_value());
    /// assert_eq!(m.value(), Ok(&42));
    /// ```
    #[inline]
    #[track_caller]
    pub fn new(value: P::Value) -> Self {
        Self::check_not_marked(&value, "new");
        Self::from_representation(value)
    }

    /// Creates a `Markable` from an `Option`.
    ///
    /// `Some` of the marked value is a caller error, as in [`Markable::new`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use markable::markable::Markable;
    /// # use markable::policy::scalar::MarkMin;
    ///
    /// let some: Markable<MarkMin<i32>> = Markable::from_option(Some(3));
    /// let none: Markable<MarkMin<i32>> = Markable::from_option(None);
    /// assert_eq!(some.into_option(), Some(3));
    /// assert_eq!(none.into_option(), None);
    /// ```
    #[inline]
    #[track_caller]
    pub fn from_option(value: Option<P::Value>) -> Self {
        match value {
            Some(v) => Self::new(v),
            None => Self::empty(),
        }
    }

    /// Creates a `Markable` from its raw storage without any check.
    ///
    /// Passing the marked value is allowed and yields an empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use markable::markable::Markable;
    /// # use markable::policy::scalar::MarkMin;
    ///
    /// let m: Markable<MarkMin<i64>> = Markable::from_representation(i64::MIN);
    /// assert!(m.is_empty());
    /// ```
    #[inline(always)]
    pub const fn from_representation(storage: P::Value) -> Self {
        Self {
            storage,
            _policy: PhantomData,
        }
    }

    /// Returns `true` if the container holds a value.
    #[inline(always)]
    pub fn has_value(&self) -> bool {
        !P::is_marked_value(&self.storage)
    }

    /// Returns `true` if the container holds the marked value.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        P::is_marked_value(&self.storage)
    }

    /// Returns a reference to the held value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAccessError` if the container is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use markable::markable::Markable;
    /// # use markable::policy::pattern::{DoubleNul, MarkString};
    ///
    /// let m: Markable<MarkString<DoubleNul>> = Markable::new("berth".to_string());
    /// assert_eq!(m.value().map(String::as_str), Ok("berth"));
    ///
    /// let e: Markable<MarkString<DoubleNul>> = Markable::empty();
    /// assert!(e.value().is_err());
    /// ```
    #[inline]
    pub fn value(&self) -> Result<&P::Value, InvalidAccessError> {
        if self.is_empty() {
            return Err(Self::access_error());
        }
        Ok(&self.storage)
    }

    /// Consumes the container and returns the held value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAccessError` if the container is empty.
    #[inline]
    pub fn into_value(self) -> Result<P::Value, InvalidAccessError> {
        if self.is_empty() {
            return Err(Self::access_error());
        }
        Ok(self.storage)
    }

    /// Returns the held value as `Some(&value)`, or `None` if empty.
    #[inline]
    pub fn get(&self) -> Option<&P::Value> {
        if self.is_empty() {
            None
        } else {
            Some(&self.storage)
        }
    }

    /// Converts the container into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<P::Value> {
        if self.is_empty() {
            None
        } else {
            Some(self.storage)
        }
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use markable::markable::Markable;
    /// # use markable::policy::scalar::MarkU32;
    ///
    /// let m: Markable<MarkU32<0>> = Markable::new(6);
    /// assert_eq!(m.unwrap(), 6);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> P::Value {
        if self.is_empty() {
            panic!("called `Markable::unwrap()` on an empty value")
        }
        self.storage
    }

    /// Returns the held value, or `default` if empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use markable::markable::Markable;
    /// # use markable::policy::scalar::MarkMin;
    ///
    /// let some: Markable<MarkMin<i64>> = Markable::new(8);
    /// assert_eq!(some.value_or(0), 8);
    ///
    /// let none: Markable<MarkMin<i64>> = Markable::empty();
    /// assert_eq!(none.value_or(0), 0);
    /// ```
    #[inline]
    pub fn value_or(self, default: P::Value) -> P::Value {
        if self.is_empty() { default } else { self.storage }
    }

    /// Returns the held value, or computes one from `f` if empty.
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> P::Value
    where
        F: FnOnce() -> P::Value,
    {
        if self.is_empty() { f() } else { self.storage }
    }

    /// Stores `value`, dropping the previously held value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is the marked value and debug assertions or the
    /// `checked` feature are enabled. Otherwise the container becomes empty.
    #[inline]
    #[track_caller]
    pub fn assign(&mut self, value: P::Value) {
        Self::check_not_marked(&value, "assign");
        self.storage = value;
    }

    /// Stores `value` and returns the previously held value, if any.
    ///
    /// # Panics
    ///
    /// Same as [`Markable::assign`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use markable::markable::Markable;
    /// # use markable::policy::scalar::MarkMin;
    ///
    /// let mut m: Markable<MarkMin<i64>> = Markable::empty();
    /// assert_eq!(m.replace(1), None);
    /// assert_eq!(m.replace(2), Some(1));
    /// assert_eq!(m.value(), Ok(&2));
    /// ```
    #[inline]
    #[track_caller]
    pub fn replace(&mut self, value: P::Value) -> Option<P::Value> {
        Self::check_not_marked(&value, "replace");
        let previous = std::mem::replace(&mut self.storage, value);
        if P::is_marked_value(&previous) {
            None
        } else {
            Some(previous)
        }
    }

    /// Takes the held value out, leaving the container empty.
    #[inline]
    pub fn take(&mut self) -> Option<P::Value> {
        let previous = std::mem::replace(&mut self.storage, P::marked_value());
        if P::is_marked_value(&previous) {
            None
        } else {
            Some(previous)
        }
    }

    /// Empties the container, dropping the previously held value.
    #[inline]
    pub fn reset(&mut self) {
        self.storage = P::marked_value();
    }

    /// Returns the raw storage, which is the marked value if empty.
    #[inline(always)]
    pub const fn representation(&self) -> &P::Value {
        &self.storage
    }

    /// Consumes the container and returns its raw storage.
    #[inline(always)]
    pub fn into_representation(self) -> P::Value {
        self.storage
    }
}

impl<P> Default for Markable<P>
where
    P: MarkingPolicy,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<P> Clone for Markable<P>
where
    P: MarkingPolicy,
    P::Value: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self::from_representation(self.storage.clone())
    }
}

impl<P> Copy for Markable<P>
where
    P: MarkingPolicy,
    P::Value: Copy,
{
}

impl<P> PartialEq for Markable<P>
where
    P: MarkingPolicy,
    P::Value: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<P> Eq for Markable<P>
where
    P: MarkingPolicy,
    P::Value: Eq,
{
}

impl<P> PartialOrd for Markable<P>
where
    P: MarkingPolicy,
    P::Value: PartialOrd,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.get().partial_cmp(&other.get())
    }
}

impl<P> Ord for Markable<P>
where
    P: MarkingPolicy,
    P::Value: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(&other.get())
    }
}

impl<P> std::hash::Hash for Markable<P>
where
    P: MarkingPolicy,
    P::Value: std::hash::Hash,
{
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.get().hash(state)
    }
}

impl<P> std::fmt::Debug for Markable<P>
where
    P: MarkingPolicy,
    P::Value: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.get() {
            Some(v) => write!(f, "Markable(Some({:?}))", v),
            None => write!(f, "Markable(None)"),
        }
    }
}

impl<P> std::fmt::Display for Markable<P>
where
    P: MarkingPolicy,
    P::Value: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.get() {
            Some(v) => write!(f, "Markable({})", v),
            None => write!(f, "Markable(None)"),
        }
    }
}

impl<P> From<Option<P::Value>> for Markable<P>
where
    P: MarkingPolicy,
{
    #[inline]
    #[track_caller]
    fn from(value: Option<P::Value>) -> Self {
        Self::from_option(value)
    }
}
