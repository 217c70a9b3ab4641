//! Unit tests for `TaggedUnion<L, R>` value semantics.
//!
//! Covers destructor accounting, clone and assignment behavior, the
//! moved-from state exposed by `take_*`, and unions whose two sides have the
//! same type.

#![cfg(feature = "union")]

use std::cell::Cell;
use std::rc::Rc;

use rstest::rstest;
use sidewise::union::{LeftSide, RightSide, Side, SideMismatch, TaggedUnion};

// =============================================================================
// Helpers
// =============================================================================

/// Counts how many times values sharing the same counter were dropped.
#[derive(Debug)]
struct DropCounter {
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    fn new(drops: &Rc<Cell<usize>>) -> Self {
        Self {
            drops: Rc::clone(drops),
        }
    }
}

impl Clone for DropCounter {
    fn clone(&self) -> Self {
        Self::new(&self.drops)
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// A payload that can only be moved.
#[derive(Debug, PartialEq, Eq)]
struct Resource {
    identifier: u32,
}

fn relay<T>(value: T) -> T {
    value
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn new_converts_argument_into_left_payload() {
    let union: TaggedUnion<String, i32> = TaggedUnion::new(LeftSide, "oops");
    assert_eq!(union.side(), Side::Left);
    assert_eq!(union.as_left(), "oops");
}

#[rstest]
fn new_widens_argument_into_right_payload() {
    let union: TaggedUnion<String, f64> = TaggedUnion::new(RightSide, 4.0_f32);
    assert_eq!(union.as_right(), &4.0);
}

#[rstest]
#[case(Side::Left)]
#[case(Side::Right)]
fn identical_payload_types_follow_the_selector(#[case] side: Side) {
    let union: TaggedUnion<i32, i32> = match side {
        Side::Left => TaggedUnion::new(LeftSide, 5),
        Side::Right => TaggedUnion::new(RightSide, 5),
    };
    assert_eq!(union.side(), side);
    assert_eq!(union.into_inner(), 5);
}

#[rstest]
fn new_with_runs_constructor_once() {
    let calls = Cell::new(0);
    let union: TaggedUnion<(), Vec<u8>> = TaggedUnion::new_with(RightSide, || {
        calls.set(calls.get() + 1);
        vec![0; 4]
    });
    assert_eq!(calls.get(), 1);
    assert_eq!(union.as_right().len(), 4);
}

#[rstest]
fn try_new_with_propagates_constructor_error() {
    let result: Result<TaggedUnion<String, i32>, &str> =
        TaggedUnion::try_new_with(LeftSide, || Err("no memory"));
    assert_eq!(result, Err("no memory"));
}

#[rstest]
fn move_only_payloads_are_supported() {
    let union: TaggedUnion<Box<Resource>, Resource> =
        TaggedUnion::left(Box::new(Resource { identifier: 1 }));
    let boxed = union.into_left().unwrap();
    assert_eq!(boxed.identifier, 1);
}

// =============================================================================
// Destruction
// =============================================================================

#[rstest]
#[case(Side::Left, 1)]
#[case(Side::Right, 1)]
#[case(Side::Left, 16)]
#[case(Side::Right, 16)]
fn each_union_drops_its_live_value_exactly_once(#[case] side: Side, #[case] count: usize) {
    let left_drops = Rc::new(Cell::new(0));
    let right_drops = Rc::new(Cell::new(0));

    {
        let unions: Vec<TaggedUnion<DropCounter, DropCounter>> = (0..count)
            .map(|_| match side {
                Side::Left => TaggedUnion::left(DropCounter::new(&left_drops)),
                Side::Right => TaggedUnion::right(DropCounter::new(&right_drops)),
            })
            .collect();
        assert_eq!(unions.len(), count);
        assert_eq!(left_drops.get() + right_drops.get(), 0);
    }

    let (live, idle) = match side {
        Side::Left => (left_drops.get(), right_drops.get()),
        Side::Right => (right_drops.get(), left_drops.get()),
    };
    assert_eq!(live, count);
    assert_eq!(idle, 0);
}

#[rstest]
fn moving_a_union_through_a_chain_drops_once() {
    let drops = Rc::new(Cell::new(0));
    let first: TaggedUnion<DropCounter, Resource> = TaggedUnion::left(DropCounter::new(&drops));
    let second = first;
    let third = relay(second);

    assert_eq!(drops.get(), 0);
    drop(third);
    assert_eq!(drops.get(), 1);
}

#[rstest]
fn emplace_drops_previous_value_once() {
    let drops = Rc::new(Cell::new(0));
    let mut union: TaggedUnion<DropCounter, i32> = TaggedUnion::left(DropCounter::new(&drops));

    union.emplace(RightSide, 7);

    assert_eq!(drops.get(), 1);
    assert_eq!(union.as_right(), &7);
}

#[rstest]
fn clone_then_drop_releases_both_copies() {
    let drops = Rc::new(Cell::new(0));
    let original: TaggedUnion<i32, DropCounter> = TaggedUnion::right(DropCounter::new(&drops));
    let copy = original.clone();

    drop(original);
    assert_eq!(drops.get(), 1);
    drop(copy);
    assert_eq!(drops.get(), 2);
}

// =============================================================================
// Clone and Assignment
// =============================================================================

#[rstest]
fn clone_is_independent_of_the_source() {
    let source: TaggedUnion<i32, Vec<i32>> = TaggedUnion::right(vec![1, 2]);
    let mut copy = source.clone();
    copy.as_right_mut().push(3);

    assert_eq!(source.as_right(), &vec![1, 2]);
    assert_eq!(copy.as_right(), &vec![1, 2, 3]);
}

#[rstest]
#[allow(clippy::redundant_clone, clippy::self_assignment)]
fn self_assignment_keeps_value() {
    let mut union: TaggedUnion<String, i32> = TaggedUnion::left("same".to_string());
    union = union.clone();
    assert_eq!(union.as_left(), "same");

    let snapshot = union.clone();
    union.clone_from(&snapshot);
    assert_eq!(union, snapshot);
}

#[rstest]
#[case(TaggedUnion::left(1), TaggedUnion::left(2))]
#[case(TaggedUnion::left(1), TaggedUnion::right("r".to_string()))]
#[case(TaggedUnion::right("r".to_string()), TaggedUnion::left(2))]
#[case(TaggedUnion::right("a".to_string()), TaggedUnion::right("b".to_string()))]
fn clone_from_makes_target_equal_to_source(
    #[case] mut target: TaggedUnion<i32, String>,
    #[case] source: TaggedUnion<i32, String>,
) {
    target.clone_from(&source);
    assert_eq!(target, source);
    assert_eq!(target.side(), source.side());
}

#[rstest]
fn replace_returns_previous_union() {
    let mut union: TaggedUnion<i32, String> = TaggedUnion::left(625);
    let previous = union.replace(TaggedUnion::new(RightSide, "oops"));

    assert_eq!(previous.as_left(), &625);
    assert_eq!(union.as_right(), "oops");
}

#[rstest]
fn emplace_switches_side_with_conversion() {
    let mut union: TaggedUnion<String, i32> = TaggedUnion::right(625);
    union.emplace(LeftSide, "oops");
    assert_eq!(union.as_left(), "oops");

    union.emplace(RightSide, 25_i16);
    assert_eq!(union.as_right(), &25);
}

#[rstest]
fn failed_try_emplace_leaves_union_untouched() {
    let drops = Rc::new(Cell::new(0));
    let mut union: TaggedUnion<DropCounter, String> = TaggedUnion::left(DropCounter::new(&drops));

    let outcome = union.try_emplace_with(RightSide, || Err::<String, _>("construction failed"));

    assert_eq!(outcome, Err("construction failed"));
    assert!(union.is_left());
    assert_eq!(drops.get(), 0);
}

#[rstest]
fn successful_try_emplace_replaces_value() {
    let drops = Rc::new(Cell::new(0));
    let mut union: TaggedUnion<DropCounter, String> = TaggedUnion::left(DropCounter::new(&drops));

    let outcome = union.try_emplace_with(RightSide, || Ok::<_, ()>("built".to_string()));

    assert_eq!(outcome, Ok(()));
    assert_eq!(union.as_right(), "built");
    assert_eq!(drops.get(), 1);
}

// =============================================================================
// Moved-from State
// =============================================================================

#[rstest]
fn take_leaves_default_on_same_side() {
    let mut union: TaggedUnion<String, Vec<i32>> = TaggedUnion::left("payload".to_string());

    let taken = union.take_left();

    assert_eq!(taken, Ok("payload".to_string()));
    assert!(union.is_left());
    assert_eq!(union.as_left(), "");
}

#[rstest]
fn take_on_wrong_side_is_an_error() {
    let mut union: TaggedUnion<String, Vec<i32>> = TaggedUnion::right(vec![1]);

    let error = union.take_left().unwrap_err();

    assert_eq!(error.expected, Side::Left);
    assert_eq!(error.found, Side::Right);
    assert_eq!(union.as_right(), &vec![1]);
}

#[rstest]
fn moved_from_union_can_be_assigned_again() {
    let mut union: TaggedUnion<String, i32> = TaggedUnion::left("first".to_string());
    let _ = union.take_left();

    union.emplace(LeftSide, "second");
    assert_eq!(union.as_left(), "second");
}

// =============================================================================
// Accessors
// =============================================================================

#[rstest]
fn try_as_reports_the_failed_operation() {
    let union: TaggedUnion<String, i32> = TaggedUnion::right(1);
    let error: SideMismatch = union.try_as_left().unwrap_err();

    assert_eq!(
        error.to_string(),
        "TaggedUnion::try_as_left: expected left value, found right"
    );
}

#[rstest]
fn mutable_accessor_updates_in_place() {
    let mut union: TaggedUnion<String, i32> = TaggedUnion::new(RightSide, 5);
    *union.as_right_mut() *= 5;
    *union.as_right_mut() *= 5;
    assert_eq!(union.as_right(), &125);
}

#[rstest]
#[should_panic(expected = "called `TaggedUnion::as_right()` on a `Left` value")]
fn as_right_on_left_panics() {
    let union: TaggedUnion<String, i32> = TaggedUnion::new(LeftSide, "oops");
    let _ = union.as_right();
}

#[rstest]
fn option_accessors_only_see_live_side() {
    let union: TaggedUnion<i32, char> = TaggedUnion::right('c');
    assert_eq!(union.left_ref(), None);
    assert_eq!(union.right_ref(), Some(&'c'));
}

// =============================================================================
// Transformations
// =============================================================================

#[rstest]
fn map_right_chain_squares_twice() {
    let square = |x: i32| x * x;

    let five: TaggedUnion<String, i32> = TaggedUnion::new(RightSide, 5);
    assert_eq!(five.map_right(square).map_right(square).as_right(), &625);

    let oops: TaggedUnion<String, i32> = TaggedUnion::new(LeftSide, "oops");
    assert_eq!(oops.map_right(square).map_right(square).as_left(), "oops");
}

#[rstest]
fn swap_moves_value_to_other_side() {
    let union: TaggedUnion<i32, i32> = TaggedUnion::left(3);
    let swapped = union.swap();
    assert_eq!(swapped.side(), Side::Right);
    assert_eq!(swapped.into_inner(), 3);
}

#[rstest]
fn result_conversion_keeps_side() {
    let union: TaggedUnion<String, i32> = Err::<i32, String>("bad".to_string()).into();
    assert!(union.is_left());
    assert_eq!(union.into_result(), Err("bad".to_string()));
}
