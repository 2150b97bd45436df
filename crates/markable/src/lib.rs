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

//! # Markable
//!
//! Optional values without a discriminant. A `Markable<P>` stores a single
//! `P::Value` and treats one reserved value of that type, chosen by the
//! marking policy `P`, as "no value". The container therefore has exactly the
//! size of the value it wraps, whereas `Option<T>` adds a tag whenever `T` has
//! no niche (integers, floats, most structs).
//!
//! ## Modules
//!
//! - `policy`: The `MarkingPolicy` trait plus built-in policies for scalars
//!   (`MarkI64<MARK>`, `MarkMin`, `MarkMax`, `MarkNan`, `MarkDefault`, ...) and
//!   byte patterns (`MarkString<DoubleNul>`, `MarkBytes<P>`).
//! - `markable`: The `Markable<P>` container with optional-like construction,
//!   access, assignment, reset, comparison and hashing.
//! - `error`: `InvalidAccessError`, returned when reading an empty container.
//!
//! ## When to use
//!
//! Reach for `Markable` in dense collections and hot loops where a value type
//! has a value that correct data never produces, such as `i64::MIN` for a
//! counter or `usize::MAX` for an index. If no such value exists, use
//! `Option<T>`.
//!
//! ```rust
//! use markable::{Markable, policy::scalar::MarkMin};
//!
//! fn first_even(values: &[i64]) -> Markable<MarkMin<i64>> {
//!     values
//!         .iter()
//!         .copied()
//!         .find(|v| v % 2 == 0)
//!         .into()
//! }
//!
//! assert_eq!(first_even(&[1, 3, 4]).value(), Ok(&4));
//! assert!(first_even(&[1, 3]).is_empty());
//! ```

pub mod error;
pub mod markable;
pub mod policy;

pub use crate::error::InvalidAccessError;
pub use crate::markable::Markable;
pub use crate::policy::MarkingPolicy;
