//! Error returned by the checked accessors of [`TaggedUnion`](super::TaggedUnion).

use super::Side;

/// A wrong-side access on a tagged union.
///
/// Produced by the `try_as_*` accessors when the requested side is not the
/// live one.
///
/// # Examples
///
/// ```rust
/// use sidewise::union::{Side, SideMismatch, TaggedUnion};
///
/// let union: TaggedUnion<String, i32> = TaggedUnion::right(5);
/// let error = union.try_as_left().unwrap_err();
///
/// assert_eq!(
///     error,
///     SideMismatch {
///         operation: "TaggedUnion::try_as_left",
///         expected: Side::Left,
///         found: Side::Right,
///     }
/// );
/// assert_eq!(
///     error.to_string(),
///     "TaggedUnion::try_as_left: expected left value, found right"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SideMismatch {
    /// The accessor that was called.
    pub operation: &'static str,
    /// The side the accessor reads.
    pub expected: Side,
    /// The side that is actually live.
    pub found: Side,
}

impl SideMismatch {
    pub(crate) const fn new(operation: &'static str, expected: Side) -> Self {
        Self {
            operation,
            expected,
            found: expected.opposite(),
        }
    }
}

impl std::fmt::Display for SideMismatch {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: expected {} value, found {}",
            self.operation, self.expected, self.found
        )
    }
}

impl std::error::Error for SideMismatch {}
