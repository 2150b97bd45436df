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

//! # Scalar Marking Policies
//!
//! Policies for trivially comparable scalars. Checking for the marked value is
//! a single comparison, so a `Markable` over these policies costs exactly as
//! much as the raw scalar.
//!
//! ## Highlights
//!
//! - `MarkI8<MARK>` .. `MarkI128<MARK>`, `MarkIsize<MARK>`, `MarkU8<MARK>` ..
//!   `MarkU128<MARK>`, `MarkUsize<MARK>`: reserve an arbitrary constant fixed
//!   at the type level.
//! - `MarkMin<T>` / `MarkMax<T>`: reserve the smallest or largest value of any
//!   `num_traits::Bounded` type.
//! - `MarkNan<T>`: reserves NaN for floating-point types.
//! - `MarkDefault<T>`: reserves `T::default()`.
//!
//! ## Usage
//!
//! ```rust
//! use markable::markable::Markable;
//! use markable::policy::scalar::{MarkI64, MarkMin};
//!
//! type Counter = Markable<MarkMin<i64>>;
//! type Score = Markable<MarkI64<-1>>;
//!
//! assert!(Counter::new(42).has_value());
//! assert!(Counter::from_representation(i64::MIN).is_empty());
//! assert_eq!(Score::new(7).value_or(0), 7);
//! assert_eq!(std::mem::size_of::<Counter>(), std::mem::size_of::<i64>());
//! ```

use super::MarkingPolicy;
use num_traits::{Bounded, Float};
use std::marker::PhantomData;

macro_rules! impl_mark_int_for {
    ($name:ident, $t:ty) => {
        #[doc = concat!("Reserves the `", stringify!($t), "` constant `MARK` as the marked value.")]
        ///
        /// The constant is part of the type, so distinct sentinels produce
        /// distinct `Markable` types.
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name<const MARK: $t>;

        impl<const MARK: $t> MarkingPolicy for $name<MARK> {
            type Value = $t;

            #[inline(always)]
            fn marked_value() -> $t {
                MARK
            }

            #[inline(always)]
            fn is_marked_value(value: &$t) -> bool {
                *value == MARK
            }
        }
    };
}

impl_mark_int_for!(MarkI8, i8);
impl_mark_int_for!(MarkI16, i16);
impl_mark_int_for!(MarkI32, i32);
impl_mark_int_for!(MarkI64, i64);
impl_mark_int_for!(MarkI128, i128);
impl_mark_int_for!(MarkIsize, isize);

impl_mark_int_for!(MarkU8, u8);
impl_mark_int_for!(MarkU16, u16);
impl_mark_int_for!(MarkU32, u32);
impl_mark_int_for!(MarkU64, u64);
impl_mark_int_for!(MarkU128, u128);
impl_mark_int_for!(MarkUsize, usize);

/// Reserves the smallest representable value of `T`.
///
/// # Examples
///
/// ```rust
/// # use markable::policy::{MarkingPolicy, scalar::MarkMin};
///
/// assert_eq!(MarkMin::<i64>::marked_value(), i64::MIN);
/// assert!(MarkMin::<i64>::is_marked_value(&i64::MIN));
/// assert!(!MarkMin::<i64>::is_marked_value(&0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkMin<T>(PhantomData<fn() -> T>);

impl<T> MarkingPolicy for MarkMin<T>
where
    T: Bounded + PartialEq,
{
    type Value = T;

    #[inline(always)]
    fn marked_value() -> T {
        T::min_value()
    }

    #[inline(always)]
    fn is_marked_value(value: &T) -> bool {
        *value == T::min_value()
    }
}

/// Reserves the largest representable value of `T`.
///
/// Useful for indices and sizes, which never reach `usize::MAX` in practice.
///
/// # Examples
///
/// ```rust
/// # use markable::policy::{MarkingPolicy, scalar::MarkMax};
///
/// assert_eq!(MarkMax::<usize>::marked_value(), usize::MAX);
/// assert!(!MarkMax::<usize>::is_marked_value(&0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkMax<T>(PhantomData<fn() -> T>);

impl<T> MarkingPolicy for MarkMax<T>
where
    T: Bounded + PartialEq,
{
    type Value = T;

    #[inline(always)]
    fn marked_value() -> T {
        T::max_value()
    }

    #[inline(always)]
    fn is_marked_value(value: &T) -> bool {
        *value == T::max_value()
    }
}

/// Reserves NaN for floating-point types.
///
/// NaN never compares equal to itself, so the predicate tests `is_nan`
/// rather than comparing against `marked_value`. Every NaN payload is
/// treated as empty.
///
/// # Examples
///
/// ```rust
/// # use markable::policy::{MarkingPolicy, scalar::MarkNan};
///
/// assert!(MarkNan::<f64>::is_marked_value(&MarkNan::<f64>::marked_value()));
/// assert!(!MarkNan::<f64>::is_marked_value(&f64::INFINITY));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkNan<T>(PhantomData<fn() -> T>);

impl<T> MarkingPolicy for MarkNan<T>
where
    T: Float,
{
    type Value = T;

    #[inline(always)]
    fn marked_value() -> T {
        T::nan()
    }

    #[inline(always)]
    fn is_marked_value(value: &T) -> bool {
        value.is_nan()
    }
}

/// Reserves the default value of `T`.
///
/// Fits types whose default never occurs in real data, such as identifiers
/// that start at one or names that are never empty.
///
/// # Examples
///
/// ```rust
/// # use markable::policy::{MarkingPolicy, scalar::MarkDefault};
///
/// assert!(MarkDefault::<u32>::is_marked_value(&0));
/// assert!(MarkDefault::<String>::is_marked_value(&String::new()));
/// assert!(!MarkDefault::<String>::is_marked_value(&"berth".to_string()));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkDefault<T>(PhantomData<fn() -> T>);

impl<T> MarkingPolicy for MarkDefault<T>
where
    T: Default + PartialEq,
{
    type Value = T;

    #[inline(always)]
    fn marked_value() -> T {
        T::default()
    }

    #[inline(always)]
    fn is_marked_value(value: &T) -> bool {
        *value == T::default()
    }
}
