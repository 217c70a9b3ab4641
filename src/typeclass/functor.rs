//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their inner value while preserving the
//! structure.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sidewise::control::Either;
//! use sidewise::typeclass::Functor;
//!
//! let five: Either<String, i32> = Either::right(5);
//! assert_eq!(five.fmap(|n| n.to_string()), Either::right("5".to_string()));
//!
//! // A left value is preserved
//! let failed: Either<String, i32> = Either::left("oops".to_string());
//! assert_eq!(failed.fmap(|n| n.to_string()), Either::left("oops".to_string()));
//! ```

use super::higher::TypeConstructor;
use crate::control::Either;

/// A type class for types that can have a function mapped over their contents.
///
/// See the module-level documentation for laws.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    /// use sidewise::typeclass::Functor;
    ///
    /// let x: Either<(), i32> = Either::right(5);
    /// assert_eq!(x.fmap(|n| n * 2), Either::right(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor,
    /// without consuming it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    /// use sidewise::typeclass::Functor;
    ///
    /// let x: Either<(), String> = Either::right("hello".to_string());
    /// assert_eq!(x.fmap_ref(|s| s.len()), Either::right(5));
    /// assert!(x.is_right());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        self.as_ref().bimap(L::clone, function)
    }
}
