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

//! # Marking Policies
//!
//! A marking policy reserves one value of a type to stand for "no value".
//! [`Markable`](crate::markable::Markable) stores nothing but the value itself
//! and asks its policy whether the stored value is the reserved one.
//!
//! ## Submodules
//!
//! - `scalar`: Policies for integers and floats. `MarkI64<MARK>` and friends
//!   reserve an arbitrary constant chosen through a const generic, `MarkMin`
//!   and `MarkMax` reserve the type extremes, `MarkNan` reserves NaN and
//!   `MarkDefault` reserves `T::default()`.
//! - `pattern`: Policies for variable-length data. `MarkString<P>` and
//!   `MarkBytes<P>` reserve the byte pattern named by a `MarkPattern` such as
//!   `DoubleNul`.
//!
//! ## Contract
//!
//! Policies are pure. `marked_value` must be deterministic, and
//! `is_marked_value(&marked_value())` must always hold. The policy must never
//! reserve a value that legitimate data can produce: a legitimate value equal
//! to the marked value is silently treated as empty.
//!
//! ## Custom Policies
//!
//! ```rust
//! use markable::{markable::Markable, policy::MarkingPolicy};
//!
//! /// Port numbers never use zero.
//! struct MarkZeroPort;
//!
//! impl MarkingPolicy for MarkZeroPort {
//!     type Value = u16;
//!
//!     fn marked_value() -> u16 {
//!         0
//!     }
//!
//!     fn is_marked_value(value: &u16) -> bool {
//!         *value == 0
//!     }
//! }
//!
//! let port: Markable<MarkZeroPort> = Markable::new(8080);
//! assert_eq!(port.value(), Ok(&8080));
//! assert!(Markable::<MarkZeroPort>::empty().is_empty());
//! ```

pub mod pattern;
pub mod scalar;

/// Describes which value of `Self::Value` is reserved to mean "empty".
///
/// Implementors are marker types that are never instantiated. Both functions
/// must be free of side effects so they can be called from any thread, any
/// number of times.
pub trait MarkingPolicy {
    /// The underlying value type.
    type Value;

    /// Returns the reserved value that encodes emptiness.
    fn marked_value() -> Self::Value;

    /// Returns `true` if `value` is the reserved value.
    fn is_marked_value(value: &Self::Value) -> bool;
}
