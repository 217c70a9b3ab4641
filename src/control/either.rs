//! Either type - a right-biased value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, a thin wrapper over
//! [`TaggedUnion<L, R>`] that adds the functional combinator surface. By
//! convention the right side is the primary (success) channel and the left
//! side the alternative (error) channel, so the combinators operate on a
//! right value and move a left value through unchanged.
//!
//! # Examples
//!
//! ```rust
//! use sidewise::control::Either;
//!
//! let square = |x: i32| Either::<String, i32>::right(x * x);
//!
//! let five: Either<String, i32> = Either::right(5);
//! let result = five.flat_map(square).flat_map(square);
//! assert_eq!(result, Either::right(625));
//!
//! let failed: Either<String, i32> = Either::left("RA RA RASPUTIN!".to_string());
//! let result = failed.flat_map(square).flat_map(square);
//! assert_eq!(result.as_left(), "RA RA RASPUTIN!");
//!
//! // Using fold to handle both cases
//! let described = Either::<i32, String>::right("hello".to_string()).fold(
//!     |n| format!("Number: {n}"),
//!     |s| format!("String: {s}"),
//! );
//! assert_eq!(described, "String: hello");
//! ```

use std::fmt;

use super::iter::{IntoIter, Iter, IterMut};
use crate::union::{Side, SideMismatch, SideSelector, TaggedUnion};

/// A value that is either a left `L` or a right `R`.
///
/// `Either<L, R>` stores its value in a [`TaggedUnion<L, R>`] and is
/// right-biased: [`map`](Either::map), [`flat_map`](Either::flat_map) and
/// iteration see only the right value.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use sidewise::control::Either;
///
/// let success: Either<String, i32> = Either::right(42);
/// let failure: Either<String, i32> = Either::left("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::right(84));
/// assert_eq!(failure.map(|x| x * 2), Either::left("error".to_string()));
/// ```
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Either<L, R> {
    union: TaggedUnion<L, R>,
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a left `Either`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    ///
    /// let value: Either<i32, String> = Either::left(42);
    /// assert!(value.is_left());
    /// ```
    #[inline]
    pub const fn left(value: L) -> Self {
        Self {
            union: TaggedUnion::left(value),
        }
    }

    /// Creates a right `Either`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    ///
    /// let value: Either<i32, String> = Either::right("hello".to_string());
    /// assert!(value.is_right());
    /// ```
    #[inline]
    pub const fn right(value: R) -> Self {
        Self {
            union: TaggedUnion::right(value),
        }
    }

    /// Creates an `Either` on the selected side, converting `argument` into
    /// that side's type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    /// use sidewise::union::{LeftSide, RightSide};
    ///
    /// let int_int: Either<i32, i32> = Either::new(LeftSide, 5);
    /// assert!(int_int.is_left());
    ///
    /// let greeting: Either<String, f64> = Either::new(LeftSide, "Hello");
    /// assert_eq!(greeting.as_left(), "Hello");
    ///
    /// let float: Either<String, f64> = Either::new(RightSide, 4.0_f32);
    /// assert_eq!(float.as_right(), &4.0);
    /// ```
    #[inline]
    pub fn new<S, A>(side: S, argument: A) -> Self
    where
        S: SideSelector<L, R>,
        S::Slot: From<A>,
    {
        Self {
            union: TaggedUnion::new(side, argument),
        }
    }

    /// Creates an `Either` on the selected side from the result of
    /// `constructor`.
    #[inline]
    pub fn new_with<S, F>(side: S, constructor: F) -> Self
    where
        S: SideSelector<L, R>,
        F: FnOnce() -> S::Slot,
    {
        Self {
            union: TaggedUnion::new_with(side, constructor),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a left value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        self.union.is_left()
    }

    /// Returns `true` if this is a right value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        self.union.is_right()
    }

    /// Returns the live side.
    #[inline]
    pub const fn side(&self) -> Side {
        self.union.side()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns a reference to the left value.
    ///
    /// # Panics
    ///
    /// Panics if this is a right value. Check with [`is_left`](Self::is_left)
    /// first, or use [`try_as_left`](Self::try_as_left).
    #[inline]
    #[track_caller]
    pub fn as_left(&self) -> &L {
        self.union.as_left()
    }

    /// Returns a reference to the right value.
    ///
    /// # Panics
    ///
    /// Panics if this is a left value.
    #[inline]
    #[track_caller]
    pub fn as_right(&self) -> &R {
        self.union.as_right()
    }

    /// Returns a mutable reference to the left value.
    ///
    /// # Panics
    ///
    /// Panics if this is a right value.
    #[inline]
    #[track_caller]
    pub fn as_left_mut(&mut self) -> &mut L {
        self.union.as_left_mut()
    }

    /// Returns a mutable reference to the right value.
    ///
    /// # Panics
    ///
    /// Panics if this is a left value.
    #[inline]
    #[track_caller]
    pub fn as_right_mut(&mut self) -> &mut R {
        self.union.as_right_mut()
    }

    /// Returns a reference to the left value or a [`SideMismatch`].
    ///
    /// # Errors
    ///
    /// Returns an error if this is a right value.
    #[inline]
    pub fn try_as_left(&self) -> Result<&L, SideMismatch> {
        self.union.try_as_left()
    }

    /// Returns a reference to the right value or a [`SideMismatch`].
    ///
    /// # Errors
    ///
    /// Returns an error if this is a left value.
    #[inline]
    pub fn try_as_right(&self) -> Result<&R, SideMismatch> {
        self.union.try_as_right()
    }

    /// Returns a reference to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.left_ref(), Some(&42));
    ///
    /// let right: Either<i32, String> = Either::right("hello".to_string());
    /// assert_eq!(right.left_ref(), None);
    /// ```
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        self.union.left_ref()
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        self.union.right_ref()
    }

    /// Returns a mutable reference to the left value if present.
    #[inline]
    pub fn left_mut(&mut self) -> Option<&mut L> {
        self.union.left_mut()
    }

    /// Returns a mutable reference to the right value if present.
    #[inline]
    pub fn right_mut(&mut self) -> Option<&mut R> {
        self.union.right_mut()
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Consumes the either and returns the left value.
    ///
    /// # Errors
    ///
    /// Gives the either back unchanged if it is a right value.
    #[inline]
    pub fn into_left(self) -> Result<L, Self> {
        self.union.into_left().map_err(Self::from)
    }

    /// Consumes the either and returns the right value.
    ///
    /// # Errors
    ///
    /// Gives the either back unchanged if it is a left value.
    #[inline]
    pub fn into_right(self) -> Result<R, Self> {
        self.union.into_right().map_err(Self::from)
    }

    /// Converts into an `Option<L>`, discarding a right value.
    #[inline]
    pub fn left_option(self) -> Option<L> {
        self.union.into_left().ok()
    }

    /// Converts into an `Option<R>`, discarding a left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    ///
    /// let right: Either<i32, String> = Either::right("hello".to_string());
    /// assert_eq!(right.right_option(), Some("hello".to_string()));
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.right_option(), None);
    /// ```
    #[inline]
    pub fn right_option(self) -> Option<R> {
        self.union.into_right().ok()
    }

    /// Returns a copy of the right value as an `Option`, keeping `self`.
    #[inline]
    pub fn to_option(&self) -> Option<R>
    where
        R: Clone,
    {
        self.right_ref().cloned()
    }

    /// Returns the right value, or `default` for a left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    ///
    /// let present: Either<i32, &str> = Either::right("test");
    /// let absent: Either<i32, &str> = Either::left(6);
    ///
    /// assert_eq!(present.get_or_else("foobar"), "test");
    /// assert_eq!(absent.get_or_else("foobar"), "foobar");
    /// ```
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        self.union.into_right().unwrap_or(default)
    }

    /// Returns the right value, or computes one from the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    ///
    /// let failed: Either<String, usize> = Either::left("deadbeef".to_string());
    /// assert_eq!(failed.recover(|s| s.len()), 8);
    ///
    /// let fine: Either<i32, String> = Either::right("deadbeef".to_string());
    /// assert_eq!(fine.recover(|n| n.to_string()), "deadbeef");
    /// ```
    #[inline]
    pub fn recover<F>(self, function: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        self.union.fold(function, |value| value)
    }

    /// Converts into a `Result`, right being `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.union.into_result()
    }

    /// Unwraps the underlying [`TaggedUnion`].
    #[inline]
    pub fn into_union(self) -> TaggedUnion<L, R> {
        self.union
    }

    /// Borrows the underlying [`TaggedUnion`].
    #[inline]
    pub const fn as_union(&self) -> &TaggedUnion<L, R> {
        &self.union
    }

    /// Mutably borrows the underlying [`TaggedUnion`], e.g. to
    /// [`emplace`](TaggedUnion::emplace) a new value.
    #[inline]
    pub const fn as_union_mut(&mut self) -> &mut TaggedUnion<L, R> {
        &mut self.union
    }

    /// Borrows both sides, producing an `Either` of references.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        Either {
            union: self.union.as_ref(),
        }
    }

    /// Mutably borrows both sides, producing an `Either` of mutable references.
    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        Either {
            union: self.union.as_mut(),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if this is a right value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    ///
    /// let left: Either<i32, i32> = Either::left(8);
    /// assert!(!left.contains(&8));
    ///
    /// let right: Either<i32, String> = Either::right("42".to_string());
    /// assert!(right.contains("42"));
    /// assert!(!right.contains("some other string"));
    /// ```
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        R: PartialEq<Q>,
        Q: ?Sized,
    {
        self.right_ref().is_some_and(|right| right == value)
    }

    /// Returns `true` if this is a right value satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    ///
    /// let right: Either<i32, &str> = Either::right("test");
    /// assert!(right.exists(|s| s.len() > 3));
    /// assert!(!right.exists(|s| s.is_empty()));
    ///
    /// let left: Either<i32, &str> = Either::left(5);
    /// assert!(!left.exists(|s| s.len() > 3));
    /// ```
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        self.right_ref().is_some_and(predicate)
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the right value if present.
    ///
    /// If this is a right `r`, returns right `function(r)`.
    /// If this is a left `l`, returns left `l` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    ///
    /// let right: Either<i32, String> = Either::right("hello".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::right(5));
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.map(|s: String| s.len()), Either::left(42));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        Either {
            union: self.union.map_right(function),
        }
    }

    /// Applies a function to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        Either {
            union: self.union.map_left(function),
        }
    }

    /// Applies one of two functions depending on whether this is left or right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.bimap(|x| x * 2, |s: String| s.len()), Either::left(84));
    ///
    /// let right: Either<i32, String> = Either::right("hello".to_string());
    /// assert_eq!(right.bimap(|x: i32| x * 2, |s| s.len()), Either::right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        Either {
            union: self.union.bimap(left_function, right_function),
        }
    }

    /// Applies a function returning an `Either` to the right value and
    /// flattens the result; a left value is propagated unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    ///
    /// fn half(n: i32) -> Either<String, i32> {
    ///     if n % 2 == 0 {
    ///         Either::right(n / 2)
    ///     } else {
    ///         Either::left(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Either::right(8).flat_map(half).flat_map(half), Either::right(2));
    /// assert_eq!(
    ///     Either::right(6).flat_map(half).flat_map(half),
    ///     Either::left("3 is odd".to_string())
    /// );
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.union.fold(Either::left, function)
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// Both functions must return the same type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    ///
    /// let sentence: Either<String, usize> = Either::left("There was a cat".to_string());
    /// let number: Either<String, usize> = Either::right(42);
    ///
    /// assert_eq!(sentence.fold(|s| s.len(), |n| n), 15);
    /// assert_eq!(number.fold(|s| s.len(), |n| n), 42);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        self.union.fold(left_function, right_function)
    }

    // =========================================================================
    // Mirror Operation
    // =========================================================================

    /// Swaps the left and right sides, preserving the stored value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    ///
    /// let left: Either<String, i32> = Either::left("Test".to_string());
    /// assert_eq!(left.mirror(), Either::right("Test".to_string()));
    ///
    /// let same: Either<i32, i32> = Either::right(5);
    /// assert_eq!(same.mirror().as_left(), &5);
    /// ```
    #[inline]
    pub fn mirror(self) -> Either<R, L> {
        Either {
            union: self.union.swap(),
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Iterates over the right value, yielding it once or not at all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    ///
    /// let letter: Either<i32, char> = Either::right('f');
    /// assert_eq!(letter.iter().collect::<Vec<_>>(), vec![&'f']);
    ///
    /// let hello: Either<String, char> = Either::left("Hello".to_string());
    /// assert_eq!(hello.iter().next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, R> {
        Iter {
            inner: self.right_ref().into_iter(),
        }
    }

    /// Iterates mutably over the right value.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, R> {
        IterMut {
            inner: self.right_mut().into_iter(),
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or default if this is a right value.
    #[inline]
    pub fn left_or_default(self) -> L {
        self.left_option().unwrap_or_default()
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or default if this is a left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.right_or_default(), String::new());
    /// ```
    #[inline]
    pub fn right_or_default(self) -> R {
        self.right_option().unwrap_or_default()
    }
}

// =============================================================================
// Same-type and Nested Operations
// =============================================================================

impl<T> Either<T, T> {
    /// Returns the value of whichever side is live.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    ///
    /// let left: Either<String, String> = Either::left("test".to_string());
    /// let right: Either<String, String> = Either::right("test2".to_string());
    ///
    /// assert_eq!(left.merge(), "test");
    /// assert_eq!(right.merge(), "test2");
    /// ```
    #[inline]
    pub fn merge(self) -> T {
        self.union.into_inner()
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Flattens a right-nested `Either`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    ///
    /// let nested: Either<i32, Either<i32, &str>> = Either::right(Either::right("hello"));
    /// assert_eq!(nested.right_join(), Either::right("hello"));
    ///
    /// let nested: Either<i32, Either<i32, &str>> = Either::right(Either::left(42));
    /// assert_eq!(nested.right_join(), Either::left(42));
    ///
    /// let outer: Either<i32, Either<i32, &str>> = Either::left(5);
    /// assert_eq!(outer.right_join(), Either::left(5));
    /// ```
    #[inline]
    pub fn right_join(self) -> Either<L, R> {
        self.flat_map(|inner| inner)
    }
}

impl<L, R> Either<Either<L, R>, R> {
    /// Flattens a left-nested `Either`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    ///
    /// let nested: Either<Either<&str, i32>, i32> = Either::left(Either::left("hello"));
    /// assert_eq!(nested.left_join(), Either::left("hello"));
    ///
    /// let nested: Either<Either<&str, i32>, i32> = Either::left(Either::right(5));
    /// assert_eq!(nested.left_join(), Either::right(5));
    ///
    /// let outer: Either<Either<&str, i32>, i32> = Either::right(42);
    /// assert_eq!(outer.left_join(), Either::right(42));
    /// ```
    #[inline]
    pub fn left_join(self) -> Either<L, R> {
        self.union.fold(|inner| inner, Either::right)
    }
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<L: Clone, R: Clone> Clone for Either<L, R> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            union: self.union.clone(),
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.union.clone_from(&source.union);
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.union, formatter)
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = IntoIter<R>;

    #[inline]
    fn into_iter(self) -> IntoIter<R> {
        IntoIter {
            inner: self.right_option().into_iter(),
        }
    }
}

impl<'a, L, R> IntoIterator for &'a Either<L, R> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R>;

    #[inline]
    fn into_iter(self) -> Iter<'a, R> {
        self.iter()
    }
}

impl<'a, L, R> IntoIterator for &'a mut Either<L, R> {
    type Item = &'a mut R;
    type IntoIter = IterMut<'a, R>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, R> {
        self.iter_mut()
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<TaggedUnion<L, R>> for Either<L, R> {
    #[inline]
    fn from(union: TaggedUnion<L, R>) -> Self {
        Self { union }
    }
}

impl<L, R> From<Either<L, R>> for TaggedUnion<L, R> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.union
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes a right value, and `Err(e)` becomes a left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let either: Either<String, i32> = ok.into();
    /// assert_eq!(either, Either::right(42));
    /// ```
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        Self {
            union: TaggedUnion::from(result),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// A right value becomes `Ok`, and a left value becomes `Err`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_either_left_construction() {
        let value: Either<i32, String> = Either::left(42);
        assert!(value.is_left());
        assert!(!value.is_right());
    }

    #[rstest]
    fn test_either_right_construction() {
        let value: Either<i32, String> = Either::right("hello".to_string());
        assert!(value.is_right());
        assert!(!value.is_left());
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Err("error".to_string()));
    }

    #[rstest]
    fn test_union_conversion_keeps_side() {
        let union: TaggedUnion<u8, char> = TaggedUnion::right('x');
        let either = Either::from(union);
        assert_eq!(either.side(), Side::Right);
        assert_eq!(TaggedUnion::from(either), TaggedUnion::right('x'));
    }

    #[rstest]
    fn test_into_right_gives_either_back() {
        let value: Either<i32, String> = Either::left(7);
        assert_eq!(value.into_right(), Err(Either::left(7)));
    }
}
