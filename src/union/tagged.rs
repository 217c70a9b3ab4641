//! The two-sided tagged union.
//!
//! [`TaggedUnion<L, R>`] holds exactly one value, either an `L` on the left
//! side or an `R` on the right side, in inline storage sized for the larger
//! of the two. The representation is private: the only way to reach the
//! payload is through an accessor that checks the side first.
//!
//! # Value semantics
//!
//! - **Construction** always names a side. There is no empty state and
//!   neither side is ever default-constructed.
//! - **Clone** is available iff both `L` and `R` are `Clone` (and `Copy` iff
//!   both are `Copy`).
//! - **Assignment** constructs the new value before the old one is dropped.
//!   [`TaggedUnion::try_emplace_with`] leaves the union untouched when the
//!   constructor fails.
//! - **Drop** runs the destructor of the live value exactly once.
//!
//! # Examples
//!
//! ```rust
//! use sidewise::union::{LeftSide, RightSide, TaggedUnion};
//!
//! let square = |x: i32| x * x;
//!
//! let five: TaggedUnion<String, i32> = TaggedUnion::new(RightSide, 5);
//! let squared = five.map_right(square).map_right(square);
//! assert_eq!(squared.as_right(), &625);
//!
//! let oops: TaggedUnion<String, i32> = TaggedUnion::new(LeftSide, "oops");
//! let untouched = oops.map_right(square).map_right(square);
//! assert_eq!(untouched.as_left(), "oops");
//! ```

use std::fmt;
use std::mem;

use super::error::SideMismatch;
use super::side::{Side, SideSelector};
use crate::diagnostics;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Slot<L, R> {
    Left(L),
    Right(R),
}

/// A closed union of a left `L` and a right `R`.
///
/// See the [module documentation](self) for the value-semantics contract.
///
/// # Type Parameters
///
/// * `L` - The type stored on the left side
/// * `R` - The type stored on the right side
///
/// `L` and `R` may be the same type; the side is then chosen with a
/// [`LeftSide`](super::LeftSide) / [`RightSide`](super::RightSide) selector.
///
/// # Examples
///
/// ```rust
/// use sidewise::union::{Side, TaggedUnion};
///
/// let mut union: TaggedUnion<i32, String> = TaggedUnion::left(42);
/// assert_eq!(union.side(), Side::Left);
///
/// union = TaggedUnion::right("hello".to_string());
/// assert_eq!(union.as_right(), "hello");
/// assert_eq!(union.left_ref(), None);
/// ```
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct TaggedUnion<L, R> {
    slot: Slot<L, R>,
}

#[cold]
#[inline(never)]
#[track_caller]
fn wrong_side(operation: &'static str, expected: Side) -> ! {
    diagnostics::wrong_side_access(operation, expected);
    let found = match expected {
        Side::Left => "Right",
        Side::Right => "Left",
    };
    panic!("called `{operation}()` on a `{found}` value")
}

#[cold]
fn mismatch(operation: &'static str, expected: Side) -> SideMismatch {
    diagnostics::side_mismatch(operation, expected);
    SideMismatch::new(operation, expected)
}

/// Generates the checked accessors of one side.
///
/// `$variant` is the live slot, `$other` the opposite one, `$side` the
/// lower-case name used in method names and `$payload` the stored type.
macro_rules! side_accessors {
    ($variant:ident, $other:ident, $side:ident, $payload:ident) => {
        paste::paste! {
            #[doc = "Returns a reference to the " $side " value."]
            ///
            /// # Panics
            ///
            #[doc = "Panics if the union holds a `" $other "` value."]
            #[inline]
            #[track_caller]
            pub fn [<as_ $side>](&self) -> &$payload {
                match &self.slot {
                    Slot::$variant(value) => value,
                    Slot::$other(_) => wrong_side(
                        concat!("TaggedUnion::as_", stringify!($side)),
                        Side::$variant,
                    ),
                }
            }

            #[doc = "Returns a mutable reference to the " $side " value."]
            ///
            /// # Panics
            ///
            #[doc = "Panics if the union holds a `" $other "` value."]
            #[inline]
            #[track_caller]
            pub fn [<as_ $side _mut>](&mut self) -> &mut $payload {
                match &mut self.slot {
                    Slot::$variant(value) => value,
                    Slot::$other(_) => wrong_side(
                        concat!("TaggedUnion::as_", stringify!($side), "_mut"),
                        Side::$variant,
                    ),
                }
            }

            #[doc = "Returns a reference to the " $side " value or a"]
            /// [`SideMismatch`] describing the failed access.
            ///
            /// # Errors
            ///
            #[doc = "Returns an error if the union holds a `" $other "` value."]
            #[inline]
            pub fn [<try_as_ $side>](&self) -> Result<&$payload, SideMismatch> {
                match &self.slot {
                    Slot::$variant(value) => Ok(value),
                    Slot::$other(_) => Err(mismatch(
                        concat!("TaggedUnion::try_as_", stringify!($side)),
                        Side::$variant,
                    )),
                }
            }

            #[doc = "Mutable counterpart of [`try_as_" $side "`](Self::try_as_" $side ")."]
            ///
            /// # Errors
            ///
            #[doc = "Returns an error if the union holds a `" $other "` value."]
            #[inline]
            pub fn [<try_as_ $side _mut>](&mut self) -> Result<&mut $payload, SideMismatch> {
                match &mut self.slot {
                    Slot::$variant(value) => Ok(value),
                    Slot::$other(_) => Err(mismatch(
                        concat!("TaggedUnion::try_as_", stringify!($side), "_mut"),
                        Side::$variant,
                    )),
                }
            }

            #[doc = "Returns `Some` reference to the " $side " value or `None`."]
            #[inline]
            pub const fn [<$side _ref>](&self) -> Option<&$payload> {
                match &self.slot {
                    Slot::$variant(value) => Some(value),
                    Slot::$other(_) => None,
                }
            }

            #[doc = "Returns `Some` mutable reference to the " $side " value or `None`."]
            #[inline]
            pub fn [<$side _mut>](&mut self) -> Option<&mut $payload> {
                match &mut self.slot {
                    Slot::$variant(value) => Some(value),
                    Slot::$other(_) => None,
                }
            }

            #[doc = "Consumes the union and returns the " $side " value."]
            ///
            /// # Errors
            ///
            /// Gives the union back unchanged when the other side is live.
            #[inline]
            pub fn [<into_ $side>](self) -> Result<$payload, Self> {
                match self.slot {
                    Slot::$variant(value) => Ok(value),
                    slot @ Slot::$other(_) => Err(Self { slot }),
                }
            }

            #[doc = "Moves the " $side " value out leaving its `Default` in place."]
            ///
            /// The union keeps its side and stays valid: this is the moved-from
            /// state of the payload made explicit.
            ///
            /// # Errors
            ///
            #[doc = "Returns an error if the union holds a `" $other "` value."]
            #[inline]
            pub fn [<take_ $side>](&mut self) -> Result<$payload, SideMismatch>
            where
                $payload: Default,
            {
                match &mut self.slot {
                    Slot::$variant(value) => Ok(mem::take(value)),
                    Slot::$other(_) => Err(mismatch(
                        concat!("TaggedUnion::take_", stringify!($side)),
                        Side::$variant,
                    )),
                }
            }
        }
    };
}

impl<L, R> TaggedUnion<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a union holding `value` on the left side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::union::TaggedUnion;
    ///
    /// let union: TaggedUnion<i32, String> = TaggedUnion::left(42);
    /// assert!(union.is_left());
    /// ```
    #[inline]
    pub const fn left(value: L) -> Self {
        Self {
            slot: Slot::Left(value),
        }
    }

    /// Creates a union holding `value` on the right side.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self {
            slot: Slot::Right(value),
        }
    }

    /// Creates a union on the selected side, converting `argument` into the
    /// payload type of that side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::union::{LeftSide, RightSide, TaggedUnion};
    ///
    /// // &str converts into the String on the left side.
    /// let left: TaggedUnion<String, i32> = TaggedUnion::new(LeftSide, "oops");
    /// assert_eq!(left.as_left(), "oops");
    ///
    /// // Identical payload types: the selector decides.
    /// let right: TaggedUnion<u8, u8> = TaggedUnion::new(RightSide, 7u8);
    /// assert_eq!(right.as_right(), &7);
    /// ```
    #[inline]
    pub fn new<S, A>(side: S, argument: A) -> Self
    where
        S: SideSelector<L, R>,
        S::Slot: From<A>,
    {
        side.install(<S::Slot as From<A>>::from(argument))
    }

    /// Creates a union on the selected side from the result of `constructor`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::union::{RightSide, TaggedUnion};
    ///
    /// let union: TaggedUnion<(), Vec<u8>> = TaggedUnion::new_with(RightSide, || vec![1, 2, 3]);
    /// assert_eq!(union.as_right().len(), 3);
    /// ```
    #[inline]
    pub fn new_with<S, F>(side: S, constructor: F) -> Self
    where
        S: SideSelector<L, R>,
        F: FnOnce() -> S::Slot,
    {
        side.install(constructor())
    }

    /// Creates a union on the selected side from a fallible constructor.
    ///
    /// # Errors
    ///
    /// Propagates the constructor's error unchanged; nothing is constructed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::union::{RightSide, TaggedUnion};
    ///
    /// let parsed: Result<TaggedUnion<String, i32>, _> =
    ///     TaggedUnion::try_new_with(RightSide, || "12".parse::<i32>());
    /// assert_eq!(parsed.unwrap().as_right(), &12);
    ///
    /// let failed: Result<TaggedUnion<String, i32>, _> =
    ///     TaggedUnion::try_new_with(RightSide, || "twelve".parse::<i32>());
    /// assert!(failed.is_err());
    /// ```
    #[inline]
    pub fn try_new_with<S, F, E>(side: S, constructor: F) -> Result<Self, E>
    where
        S: SideSelector<L, R>,
        F: FnOnce() -> Result<S::Slot, E>,
    {
        Self::construct("TaggedUnion::try_new_with", side, constructor)
    }

    fn construct<S, F, E>(operation: &'static str, side: S, constructor: F) -> Result<Self, E>
    where
        S: SideSelector<L, R>,
        F: FnOnce() -> Result<S::Slot, E>,
    {
        match constructor() {
            Ok(value) => Ok(side.install(value)),
            Err(error) => {
                diagnostics::construction_failed(operation, <S as SideSelector<L, R>>::SIDE);
                Err(error)
            }
        }
    }

    // =========================================================================
    // Side Queries
    // =========================================================================

    /// Returns the live side.
    #[inline]
    pub const fn side(&self) -> Side {
        match &self.slot {
            Slot::Left(_) => Side::Left,
            Slot::Right(_) => Side::Right,
        }
    }

    /// Returns `true` if the left side is live.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self.slot, Slot::Left(_))
    }

    /// Returns `true` if the right side is live.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self.slot, Slot::Right(_))
    }

    /// Returns `true` if `side` is the live side.
    #[inline]
    pub fn is(&self, side: Side) -> bool {
        self.side() == side
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    side_accessors!(Left, Right, left, L);
    side_accessors!(Right, Left, right, R);

    /// Borrows both sides, producing a union of references.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::union::TaggedUnion;
    ///
    /// let union: TaggedUnion<String, i32> = TaggedUnion::left("abc".to_string());
    /// let length = union.as_ref().fold(|s| s.len(), |_| 0);
    /// assert_eq!(length, 3);
    /// assert!(union.is_left());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> TaggedUnion<&L, &R> {
        match &self.slot {
            Slot::Left(value) => TaggedUnion::left(value),
            Slot::Right(value) => TaggedUnion::right(value),
        }
    }

    /// Mutably borrows both sides, producing a union of mutable references.
    #[inline]
    pub fn as_mut(&mut self) -> TaggedUnion<&mut L, &mut R> {
        match &mut self.slot {
            Slot::Left(value) => TaggedUnion::left(value),
            Slot::Right(value) => TaggedUnion::right(value),
        }
    }

    // =========================================================================
    // Assignment
    // =========================================================================

    /// Replaces the whole union with `source`, returning the previous one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::union::TaggedUnion;
    ///
    /// let mut union: TaggedUnion<i32, String> = TaggedUnion::left(1);
    /// let previous = union.replace(TaggedUnion::right("two".to_string()));
    ///
    /// assert_eq!(previous.as_left(), &1);
    /// assert_eq!(union.as_right(), "two");
    /// ```
    #[inline]
    pub const fn replace(&mut self, source: Self) -> Self {
        mem::replace(self, source)
    }

    /// Reconstructs the union on the selected side from `argument`.
    ///
    /// The new value is built first; the old value is dropped afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::union::{LeftSide, RightSide, TaggedUnion};
    ///
    /// let mut union: TaggedUnion<String, i32> = TaggedUnion::new(RightSide, 3);
    /// union.emplace(LeftSide, "now left");
    /// assert_eq!(union.as_left(), "now left");
    /// ```
    #[inline]
    pub fn emplace<S, A>(&mut self, side: S, argument: A)
    where
        S: SideSelector<L, R>,
        S::Slot: From<A>,
    {
        *self = Self::new(side, argument);
    }

    /// Reconstructs the union on the selected side from a fallible
    /// constructor.
    ///
    /// The constructor runs before anything is dropped, so on failure the
    /// union still holds its previous value.
    ///
    /// # Errors
    ///
    /// Propagates the constructor's error unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::union::{LeftSide, RightSide, TaggedUnion};
    ///
    /// let mut union: TaggedUnion<String, i32> = TaggedUnion::right(7);
    /// let outcome = union.try_emplace_with(LeftSide, || Err::<String, _>("refused"));
    ///
    /// assert_eq!(outcome, Err("refused"));
    /// assert_eq!(union.as_right(), &7);
    ///
    /// union.try_emplace_with(RightSide, || "8".parse::<i32>()).unwrap();
    /// assert_eq!(union.as_right(), &8);
    /// ```
    pub fn try_emplace_with<S, F, E>(&mut self, side: S, constructor: F) -> Result<(), E>
    where
        S: SideSelector<L, R>,
        F: FnOnce() -> Result<S::Slot, E>,
    {
        let next = Self::construct("TaggedUnion::try_emplace_with", side, constructor)?;
        *self = next;
        Ok(())
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies `function` to the left value; a right value is moved through.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> TaggedUnion<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self.slot {
            Slot::Left(value) => TaggedUnion::left(function(value)),
            Slot::Right(value) => TaggedUnion::right(value),
        }
    }

    /// Applies `function` to the right value; a left value is moved through.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> TaggedUnion<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self.slot {
            Slot::Left(value) => TaggedUnion::left(value),
            Slot::Right(value) => TaggedUnion::right(function(value)),
        }
    }

    /// Applies one of two functions depending on the live side.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> TaggedUnion<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self.slot {
            Slot::Left(value) => TaggedUnion::left(left_function(value)),
            Slot::Right(value) => TaggedUnion::right(right_function(value)),
        }
    }

    /// Eliminates the union by applying the function of the live side.
    ///
    /// Both functions must return the same type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::union::TaggedUnion;
    ///
    /// let union: TaggedUnion<String, usize> = TaggedUnion::left("There was a cat".to_string());
    /// assert_eq!(union.fold(|s| s.len(), |n| n), 15);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self.slot {
            Slot::Left(value) => left_function(value),
            Slot::Right(value) => right_function(value),
        }
    }

    /// Swaps the sides, keeping the value.
    #[inline]
    pub fn swap(self) -> TaggedUnion<R, L> {
        match self.slot {
            Slot::Left(value) => TaggedUnion::right(value),
            Slot::Right(value) => TaggedUnion::left(value),
        }
    }

    /// Converts into a `Result`, right being `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self.slot {
            Slot::Left(value) => Err(value),
            Slot::Right(value) => Ok(value),
        }
    }
}

impl<T> TaggedUnion<T, T> {
    /// Returns the value of whichever side is live.
    ///
    /// Only available when both sides store the same type.
    #[inline]
    pub fn into_inner(self) -> T {
        match self.slot {
            Slot::Left(value) | Slot::Right(value) => value,
        }
    }
}

// =============================================================================
// Clone
// =============================================================================

impl<L: Clone, R: Clone> Clone for TaggedUnion<L, R> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }

    /// Same side: the live value is updated in place with its own
    /// `clone_from`. Different side: the old value is replaced by a clone of
    /// `source`.
    fn clone_from(&mut self, source: &Self) {
        match (&mut self.slot, &source.slot) {
            (Slot::Left(target), Slot::Left(value)) => target.clone_from(value),
            (Slot::Right(target), Slot::Right(value)) => target.clone_from(value),
            _ => *self = source.clone(),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for TaggedUnion<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Slot::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for TaggedUnion<L, R> {
    /// `Ok(r)` becomes a right value, `Err(l)` a left value.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::right(value),
            Err(error) => Self::left(error),
        }
    }
}

impl<L, R> From<TaggedUnion<L, R>> for Result<R, L> {
    #[inline]
    fn from(union: TaggedUnion<L, R>) -> Self {
        union.into_result()
    }
}
