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

//! # Access Errors
//!
//! Error types reported by [`Markable`](crate::markable::Markable) accessors.

/// Error returned when the value of an empty `Markable` is requested.
///
/// An empty container stores the policy's marked value. Handing that value
/// out would make it indistinguishable from a legitimate one, so accessors
/// report this error instead.
///
/// # Examples
///
/// ```rust
/// # use markable::{error::InvalidAccessError, markable::Markable, policy::scalar::MarkMin};
///
/// let empty: Markable<MarkMin<i64>> = Markable::empty();
/// let err: InvalidAccessError = empty.value().unwrap_err();
/// assert!(err.to_string().contains("holds no value"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvalidAccessError {
    type_name: &'static str,
}

impl InvalidAccessError {
    /// Creates a new `InvalidAccessError` for a container over `type_name`.
    #[inline]
    pub const fn new(type_name: &'static str) -> Self {
        Self { type_name }
    }

    /// Returns the name of the value type the access was attempted on.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl std::fmt::Display for InvalidAccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid access: Markable<{}> holds no value",
            self.type_name
        )
    }
}

impl std::error::Error for InvalidAccessError {}
