//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! the ability to sequence computations where each step can depend on the
//! result of the previous step.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sidewise::control::Either;
//! use sidewise::typeclass::Monad;
//!
//! fn checked_root(n: i32) -> Either<String, i32> {
//!     match n {
//!         n if n < 0 => Either::left(format!("{n} is negative")),
//!         n => Either::right(f64::from(n).sqrt() as i32),
//!     }
//! }
//!
//! let value: Either<String, i32> = Either::right(625);
//! assert_eq!(value.and_then(checked_root).and_then(checked_root), Either::right(5));
//!
//! let value: Either<String, i32> = Either::right(-4);
//! assert_eq!(
//!     value.and_then(checked_root).and_then(checked_root),
//!     Either::left("-4 is negative".to_string())
//! );
//! ```

use super::applicative::Applicative;
use crate::control::Either;

/// A type class for applicatives whose computations can be chained, each
/// step depending on the previous one's value.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    /// use sidewise::typeclass::Monad;
    ///
    /// let x: Either<&str, i32> = Either::right(5);
    /// assert_eq!(Monad::flat_map(x, |n| Either::right(n * 2)), Either::right(10));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// A left `self` propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    /// use sidewise::typeclass::Monad;
    ///
    /// let ready: Either<&str, ()> = Either::right(());
    /// assert_eq!(ready.then(Either::right("go")), Either::right("go"));
    ///
    /// let blocked: Either<&str, ()> = Either::left("blocked");
    /// assert_eq!(blocked.then(Either::right("go")), Either::left("blocked"));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        Either::flat_map(self, function)
    }
}
