//! Side tags and construction selectors.
//!
//! A [`TaggedUnion`] always knows which of its two slots is live. That
//! knowledge is exposed at runtime as a [`Side`], and requested at compile
//! time through one of the zero-sized selectors [`LeftSide`] and
//! [`RightSide`].
//!
//! The selectors exist because the payload type alone cannot always decide
//! the side: a `TaggedUnion<i32, i32>` must be told explicitly where `5`
//! belongs.
//!
//! # Examples
//!
//! ```rust
//! use sidewise::union::{LeftSide, RightSide, Side, TaggedUnion};
//!
//! let left: TaggedUnion<i32, i32> = TaggedUnion::new(LeftSide, 5);
//! let right: TaggedUnion<i32, i32> = TaggedUnion::new(RightSide, 5);
//!
//! assert_eq!(left.side(), Side::Left);
//! assert_eq!(right.side(), Side::Right);
//! ```

use std::fmt;

use super::TaggedUnion;

/// The runtime discriminant of a [`TaggedUnion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    /// The left slot, conventionally the alternative or error channel.
    Left,
    /// The right slot, conventionally the primary or success channel.
    Right,
}

impl Side {
    /// Returns the other side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::union::Side;
    ///
    /// assert_eq!(Side::Left.opposite(), Side::Right);
    /// assert_eq!(Side::Right.opposite(), Side::Left);
    /// ```
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns `true` for [`Side::Left`].
    #[inline]
    pub const fn is_left(self) -> bool {
        matches!(self, Self::Left)
    }

    /// Returns `true` for [`Side::Right`].
    #[inline]
    pub const fn is_right(self) -> bool {
        matches!(self, Self::Right)
    }

    /// Lower-case name of the side, as used in diagnostics.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Selects the left slot when constructing a [`TaggedUnion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LeftSide;

/// Selects the right slot when constructing a [`TaggedUnion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RightSide;

mod private {
    pub trait Sealed {}

    impl Sealed for super::LeftSide {}
    impl Sealed for super::RightSide {}
}

/// A compile-time side selector.
///
/// Implemented only by [`LeftSide`] and [`RightSide`]. The associated
/// [`Slot`](SideSelector::Slot) type is the payload type of the selected
/// side, which lets the constructors of [`TaggedUnion`] check the argument
/// against the right type even when `L == R`.
pub trait SideSelector<L, R>: Copy + private::Sealed {
    /// Payload type stored on the selected side.
    type Slot;

    /// The runtime tag matching this selector.
    const SIDE: Side;

    /// Installs `value` on the selected side of a new union.
    fn install(self, value: Self::Slot) -> TaggedUnion<L, R>;
}

impl<L, R> SideSelector<L, R> for LeftSide {
    type Slot = L;

    const SIDE: Side = Side::Left;

    #[inline]
    fn install(self, value: L) -> TaggedUnion<L, R> {
        TaggedUnion::left(value)
    }
}

impl<L, R> SideSelector<L, R> for RightSide {
    type Slot = R;

    const SIDE: Side = Side::Right;

    #[inline]
    fn install(self, value: R) -> TaggedUnion<L, R> {
        TaggedUnion::right(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Side::Left, Side::Right)]
    #[case(Side::Right, Side::Left)]
    fn opposite_flips_the_side(#[case] side: Side, #[case] expected: Side) {
        assert_eq!(side.opposite(), expected);
        assert_eq!(side.opposite().opposite(), side);
    }

    #[rstest]
    fn display_uses_lower_case_names() {
        assert_eq!(Side::Left.to_string(), "left");
        assert_eq!(Side::Right.to_string(), "right");
    }

    #[rstest]
    fn selectors_report_their_side() {
        assert_eq!(<LeftSide as SideSelector<u8, u16>>::SIDE, Side::Left);
        assert_eq!(<RightSide as SideSelector<u8, u16>>::SIDE, Side::Right);
    }
}
