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

//! Property-based tests for `Markable` over the built-in policies.

use markable::{
    Markable, MarkingPolicy,
    policy::{
        pattern::{DoubleNul, MarkBytes, MarkString},
        scalar::{MarkI64, MarkMax, MarkMin, MarkNan},
    },
};
use proptest::prelude::*;

type OptInt = Markable<MarkI64<{ i64::MIN }>>;
type OptIndex = Markable<MarkMax<usize>>;
type OptFloat = Markable<MarkNan<f64>>;
type OptStr = Markable<MarkString<DoubleNul>>;
type OptBytes = Markable<MarkBytes<DoubleNul>>;

// ============================================================================
//  Strategies
// ============================================================================

/// Any `i64` except the marked `i64::MIN`.
fn legit_int() -> impl Strategy<Value = i64> {
    (i64::MIN + 1)..=i64::MAX
}

/// Any string except the two-NUL pattern.
fn legit_string() -> impl Strategy<Value = String> {
    any::<String>().prop_filter("must not be the marked value", |s| s != "\0\0")
}

fn legit_bytes() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..32)
        .prop_filter("must not be the marked value", |b| b.as_slice() != b"\0\0")
}

fn maybe_int() -> impl Strategy<Value = Option<i64>> {
    proptest::option::of(legit_int())
}

// ============================================================================
//  Construction and Access
// ============================================================================

proptest! {
    /// A container built from a legitimate value holds exactly that value.
    #[test]
    fn new_holds_value(v in legit_int()) {
        let m = OptInt::new(v);
        prop_assert!(m.has_value());
        prop_assert_eq!(m.value(), Ok(&v));
        prop_assert_eq!(*m.representation(), v);
    }

    #[test]
    fn new_holds_string(s in legit_string()) {
        let m = OptStr::new(s.clone());
        prop_assert!(m.has_value());
        prop_assert_eq!(m.value(), Ok(&s));
    }

    #[test]
    fn new_holds_bytes(b in legit_bytes()) {
        let m = OptBytes::new(b.clone());
        prop_assert_eq!(m.into_value(), Ok(b));
    }

    #[test]
    fn new_holds_float(v in -1.0e300f64..1.0e300) {
        let m = OptFloat::new(v);
        prop_assert!(m.has_value());
        prop_assert_eq!(m.value().map(|x| x.to_bits()), Ok(v.to_bits()));
    }

    #[test]
    fn new_holds_index(i in 0usize..usize::MAX) {
        prop_assert_eq!(OptIndex::new(i).into_option(), Some(i));
    }

    /// `value_or` returns the value when present, regardless of the default.
    #[test]
    fn value_or_prefers_value(v in legit_int(), default in any::<i64>()) {
        prop_assert_eq!(OptInt::new(v).value_or(default), v);
        prop_assert_eq!(OptInt::empty().value_or(default), default);
    }

    #[test]
    fn option_round_trip(o in maybe_int()) {
        let m = OptInt::from(o);
        prop_assert_eq!(m.has_value(), o.is_some());
        prop_assert_eq!(m.into_option(), o);
    }
}

// ============================================================================
//  Mutation
// ============================================================================

proptest! {
    /// The last assignment wins.
    #[test]
    fn assign_twice_keeps_last(v1 in legit_int(), v2 in legit_int()) {
        let mut m = OptInt::empty();
        m.assign(v1);
        m.assign(v2);
        prop_assert!(m.has_value());
        prop_assert_eq!(m.value(), Ok(&v2));
    }

    #[test]
    fn assign_strings_keeps_last(s1 in legit_string(), s2 in legit_string()) {
        let mut m = OptStr::new(s1);
        m.assign(s2.clone());
        prop_assert_eq!(m.into_value(), Ok(s2));
    }

    /// `reset` always leaves the container empty.
    #[test]
    fn reset_always_empties(o in maybe_int()) {
        let mut m = OptInt::from(o);
        m.reset();
        prop_assert!(!m.has_value());
        prop_assert!(m.value().is_err());
        prop_assert_eq!(*m.representation(), MarkI64::<{ i64::MIN }>::marked_value());
    }

    #[test]
    fn take_empties_and_returns_previous(o in maybe_int()) {
        let mut m = OptInt::from(o);
        prop_assert_eq!(m.take(), o);
        prop_assert!(m.is_empty());
    }

    #[test]
    fn replace_returns_previous(o in maybe_int(), v in legit_int()) {
        let mut m = OptInt::from(o);
        prop_assert_eq!(m.replace(v), o);
        prop_assert_eq!(m.value(), Ok(&v));
    }
}

// ============================================================================
//  Comparison
// ============================================================================

proptest! {
    /// Equality and ordering agree with `Option<i64>`.
    #[test]
    fn comparison_matches_option(a in maybe_int(), b in maybe_int()) {
        let (ma, mb) = (OptInt::from(a), OptInt::from(b));
        prop_assert_eq!(ma == mb, a == b);
        prop_assert_eq!(mb == ma, b == a);
        prop_assert_eq!(ma.cmp(&mb), a.cmp(&b));
        prop_assert_eq!(ma.partial_cmp(&mb), a.partial_cmp(&b));
    }

    #[test]
    fn equality_is_reflexive(a in maybe_int()) {
        let m = OptInt::from(a);
        prop_assert_eq!(m, m);
    }

    #[test]
    fn string_comparison_matches_option(
        a in proptest::option::of(legit_string()),
        b in proptest::option::of(legit_string()),
    ) {
        let (ma, mb) = (OptStr::from(a.clone()), OptStr::from(b.clone()));
        prop_assert_eq!(ma == mb, a == b);
        prop_assert_eq!(ma.cmp(&mb), a.cmp(&b));
    }
}

// ============================================================================
//  Policies
// ============================================================================

proptest! {
    /// Only the reserved value is marked.
    #[test]
    fn min_policy_marks_only_min(v in legit_int()) {
        prop_assert!(MarkMin::<i64>::is_marked_value(&i64::MIN));
        prop_assert!(!MarkMin::<i64>::is_marked_value(&v));
    }

    #[test]
    fn double_nul_marks_only_pattern(s in legit_string()) {
        prop_assert!(MarkString::<DoubleNul>::is_marked_value(
            &MarkString::<DoubleNul>::marked_value()
        ));
        prop_assert!(!MarkString::<DoubleNul>::is_marked_value(&s));
    }
}
