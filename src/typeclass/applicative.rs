//! Applicative type class - applying functions within a context.
//!
//! This module provides the `Applicative` trait, which extends `Functor`
//! with the ability to lift pure values and to combine independent
//! computations.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sidewise::control::Either;
//! use sidewise::typeclass::Applicative;
//!
//! let fizz: Either<String, &str> = Either::right("fizz");
//! let times: Either<String, usize> = Either::right(2);
//! assert_eq!(fizz.map2(times, |s, n| s.repeat(n)), Either::right("fizzfizz".to_string()));
//! ```

use super::functor::Functor;
use crate::control::Either;

/// A type class for functors that can lift values and combine independent
/// computations.
///
/// For `Either`, combining stops at the first left value (in argument
/// order), which is returned unchanged.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    /// use sidewise::typeclass::Applicative;
    ///
    /// let x: Either<String, i32> = <Either<String, ()>>::pure(42);
    /// assert_eq!(x, Either::right(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    /// use sidewise::typeclass::Applicative;
    ///
    /// let a: Either<&str, i32> = Either::right(1);
    /// let b: Either<&str, i32> = Either::left("missing");
    /// assert_eq!(a.map2(b, |x, y| x + y), Either::left("missing"));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates two applicatives and returns the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates two applicatives and returns the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    /// use sidewise::typeclass::Applicative;
    ///
    /// let function: Either<(), fn(i32) -> i32> = Either::right(|x| x + 1);
    /// assert_eq!(function.apply(Either::right(5)), Either::right(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        self.flat_map(|first| other.map(|second| function(first, second)))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Either<L, B>, third: Either<L, C>, function: F) -> Either<L, D>
    where
        F: FnOnce(R, B, C) -> D,
    {
        self.flat_map(|first| {
            second.flat_map(|second| third.map(|third| function(first, second, third)))
        })
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        self.flat_map(|function| other.map(function))
    }
}
