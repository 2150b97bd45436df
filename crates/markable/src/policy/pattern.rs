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

//! # Byte-Pattern Marking Policies
//!
//! Policies for variable-length data. A short byte pattern that legitimate
//! values never equal is reserved as the marked value, for example two NUL
//! bytes for human-readable text.
//!
//! The pattern is named by a `MarkPattern` type, so the policy itself stays a
//! zero-sized marker. The marked value is a fresh owned copy of the pattern on
//! every call, and a value is marked exactly when its bytes equal the pattern.
//! Values that merely start with the pattern hold a value.
//!
//! ## Usage
//!
//! ```rust
//! use markable::markable::Markable;
//! use markable::policy::pattern::{DoubleNul, MarkString};
//!
//! type Name = Markable<MarkString<DoubleNul>>;
//!
//! let name = Name::new("Hello World".to_string());
//! assert_eq!(name.value().map(String::as_str), Ok("Hello World"));
//! assert!(Name::from_representation("\0\0".to_string()).is_empty());
//! ```

use super::MarkingPolicy;
use std::marker::PhantomData;

/// Names the byte pattern reserved by `MarkString` and `MarkBytes`.
///
/// # Examples
///
/// ```rust
/// # use markable::policy::pattern::MarkPattern;
///
/// struct Tombstone;
///
/// impl MarkPattern for Tombstone {
///     const PATTERN: &'static str = "\u{7f}deleted";
/// }
/// ```
pub trait MarkPattern {
    const PATTERN: &'static str;
}

/// Two NUL bytes, which never occur in human-readable text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DoubleNul;

impl MarkPattern for DoubleNul {
    const PATTERN: &'static str = "\0\0";
}

/// Reserves the string equal to `P::PATTERN`.
///
/// Checking a value is O(1) for values whose length differs from the
/// pattern, and O(pattern length) otherwise.
///
/// # Examples
///
/// ```rust
/// # use markable::policy::{MarkingPolicy, pattern::{DoubleNul, MarkString}};
///
/// assert_eq!(MarkString::<DoubleNul>::marked_value(), "\0\0");
/// assert!(!MarkString::<DoubleNul>::is_marked_value(&"\0\0\0".to_string()));
/// assert!(!MarkString::<DoubleNul>::is_marked_value(&String::new()));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkString<P>(PhantomData<fn() -> P>);

impl<P> MarkingPolicy for MarkString<P>
where
    P: MarkPattern,
{
    type Value = String;

    #[inline]
    fn marked_value() -> String {
        String::from(P::PATTERN)
    }

    #[inline]
    fn is_marked_value(value: &String) -> bool {
        value.as_bytes() == P::PATTERN.as_bytes()
    }
}

/// Reserves the byte vector equal to `P::PATTERN`.
///
/// # Examples
///
/// ```rust
/// # use markable::policy::{MarkingPolicy, pattern::{DoubleNul, MarkBytes}};
///
/// assert_eq!(MarkBytes::<DoubleNul>::marked_value(), vec![0u8, 0u8]);
/// assert!(!MarkBytes::<DoubleNul>::is_marked_value(&vec![0u8]));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkBytes<P>(PhantomData<fn() -> P>);

impl<P> MarkingPolicy for MarkBytes<P>
where
    P: MarkPattern,
{
    type Value = Vec<u8>;

    #[inline]
    fn marked_value() -> Vec<u8> {
        P::PATTERN.as_bytes().to_vec()
    }

    #[inline]
    fn is_marked_value(value: &Vec<u8>) -> bool {
        value.as_slice() == P::PATTERN.as_bytes()
    }
}
