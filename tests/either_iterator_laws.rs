//! Property-based tests for the zero-or-one iterators of `Either`.
//!
//! Every iterator view of an `Either` must agree with its option views:
//! `into_iter` with `right_option`, `iter` with `right_ref`, and `iter_mut`
//! with `right_mut`.

#![cfg(feature = "control")]

use proptest::prelude::*;
use sidewise::control::Either;

fn arb_either() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Either::right),
        "[a-z]{1,10}".prop_map(Either::left),
    ]
}

fn expected_len(either: &Either<String, i32>) -> usize {
    usize::from(either.is_right())
}

// =============================================================================
// Agreement with the Option views
// =============================================================================

proptest! {
    #[test]
    fn prop_into_iter_matches_right_option(either in arb_either()) {
        let mut iterator = either.clone().into_iter();
        prop_assert_eq!(iterator.next(), either.right_option());
        prop_assert_eq!(iterator.next(), None);
    }

    #[test]
    fn prop_iter_matches_right_ref(either in arb_either()) {
        let mut iterator = either.iter();
        prop_assert_eq!(iterator.next(), either.right_ref());
        prop_assert_eq!(iterator.next(), None);
    }

    #[test]
    fn prop_borrowed_into_iter_matches_iter(either in arb_either()) {
        let by_reference: Vec<&i32> = (&either).into_iter().collect();
        let by_method: Vec<&i32> = either.iter().collect();
        prop_assert_eq!(by_reference, by_method);
    }

    /// Mutation through iter_mut is visible on the right value only.
    #[test]
    fn prop_iter_mut_touches_right_value(either in arb_either()) {
        let mut updated = either.clone();
        for value in updated.iter_mut() {
            *value = value.wrapping_add(1);
        }

        prop_assert_eq!(updated, either.map(|value| value.wrapping_add(1)));
    }
}

// =============================================================================
// Exact size
// =============================================================================

proptest! {
    /// `size_hint` is exact and equals one for a right value, zero otherwise.
    #[test]
    fn prop_size_hint_is_exact_for_every_view(either in arb_either()) {
        let len = expected_len(&either);
        let exact = (len, Some(len));

        prop_assert_eq!(either.iter().size_hint(), exact);
        prop_assert_eq!(either.iter().len(), len);
        prop_assert_eq!(either.clone().iter_mut().size_hint(), exact);
        prop_assert_eq!(either.into_iter().size_hint(), exact);
    }

    /// Consuming the single item brings every view to length zero.
    #[test]
    fn prop_len_drops_to_zero_after_next(either in arb_either()) {
        let mut owned = either.clone().into_iter();
        let mut borrowed = either.iter();
        let _ = owned.next();
        let _ = borrowed.next();

        prop_assert_eq!(owned.len(), 0);
        prop_assert_eq!(borrowed.len(), 0);
    }
}

// =============================================================================
// Double-ended and fused behavior
// =============================================================================

proptest! {
    #[test]
    fn prop_next_back_on_all_views_matches_next(either in arb_either()) {
        let expected = either.right_ref().copied();

        prop_assert_eq!(either.clone().into_iter().next_back(), expected);
        prop_assert_eq!(either.iter().next_back().copied(), expected);

        let mut mutable = either.clone();
        prop_assert_eq!(mutable.iter_mut().next_back().map(|value| *value), expected);
    }

    /// Taking the item from the back leaves nothing at the front.
    #[test]
    fn prop_next_back_exhausts_front(either in arb_either()) {
        let mut iterator = either.iter();
        let _ = iterator.next_back();
        prop_assert_eq!(iterator.next(), None);
        prop_assert_eq!(iterator.next(), None);
    }

    /// Cloned borrowing iterators yield the same items independently.
    #[test]
    fn prop_cloned_iter_is_independent(either in arb_either()) {
        let mut iterator = either.iter();
        let copy = iterator.clone();
        let _ = iterator.next();

        prop_assert_eq!(copy.count(), expected_len(&either));
        prop_assert_eq!(iterator.next(), None);
    }
}

// =============================================================================
// Iterator adapters
// =============================================================================

proptest! {
    /// Flattening a sequence keeps exactly the right values in order.
    #[test]
    fn prop_flatten_keeps_right_values(values in prop::collection::vec(arb_either(), 0..16)) {
        let expected: Vec<i32> = values.iter().filter_map(Either::right_ref).copied().collect();
        let flattened: Vec<i32> = values.into_iter().flatten().collect();

        prop_assert_eq!(flattened, expected);
    }

    /// Summing through `flat_map` skips left values without short-circuiting.
    #[test]
    fn prop_flat_map_sum_skips_left_values(values in prop::collection::vec(arb_either(), 0..16)) {
        let expected: i64 = values
            .iter()
            .map(|either| either.right_ref().map_or(0, |value| i64::from(*value)))
            .sum();
        let total: i64 = values.iter().flat_map(Either::iter).map(|value| i64::from(*value)).sum();

        prop_assert_eq!(total, expected);
    }
}
