//! Bifunctor type class - mapping over two type parameters.
//!
//! While `Functor` transforms `F<A>` to `F<B>`, `Bifunctor` transforms
//! `F<A, B>` to `F<C, D>`. Both [`TaggedUnion`] and [`Either`] are
//! bifunctors; only the function for the live side is called.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sidewise::typeclass::Bifunctor;
//! use sidewise::union::TaggedUnion;
//!
//! let base: TaggedUnion<i32, String> = TaggedUnion::left(42);
//! assert_eq!(base.first(|x| x * 2), TaggedUnion::left(84));
//!
//! let base: TaggedUnion<i32, String> = TaggedUnion::right("hello".to_string());
//! assert_eq!(base.second(|s| s.len()), TaggedUnion::right(5));
//! ```
//!
//! # Relationship with Functor
//!
//! For `Either`, `Bifunctor::second` is equivalent to `Functor::fmap`:
//!
//! ```rust
//! use sidewise::control::Either;
//! use sidewise::typeclass::{Bifunctor, Functor};
//!
//! let value: Either<String, i32> = Either::right(42);
//! assert_eq!(value.clone().fmap(|x| x * 2), value.second(|x| x * 2));
//! ```

use crate::control::Either;
use crate::union::TaggedUnion;

/// A type class for types with two type parameters that can have functions
/// mapped over both.
///
/// See module-level documentation for laws.
pub trait Bifunctor<A, B> {
    /// The resulting type constructor after applying the transformation.
    ///
    /// For `Either<L, R>`, `Target<C, D> = Either<C, D>`.
    type Target<C, D>;

    /// Applies two functions to both type parameters simultaneously.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    /// use sidewise::typeclass::Bifunctor;
    ///
    /// let either: Either<i32, String> = Either::left(42);
    /// assert_eq!(either.first(|x| x.to_string()), Either::left("42".to_string()));
    /// ```
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Applies two functions to references of both type parameters without
    /// consuming self.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;

    /// Applies a function to a reference of the first type parameter.
    ///
    /// Requires `B: Clone` because an untransformed second value is cloned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sidewise::control::Either;
    /// use sidewise::typeclass::Bifunctor;
    ///
    /// let either: Either<String, i32> = Either::left("hello".to_string());
    /// let result = either.first_ref(|s| s.len());
    /// assert!(either.is_left());
    /// assert_eq!(result, Either::left(5));
    /// ```
    #[inline]
    fn first_ref<C, F>(&self, function: F) -> Self::Target<C, B>
    where
        B: Clone,
        F: FnOnce(&A) -> C,
        Self: Sized,
    {
        self.bimap_ref(function, B::clone)
    }

    /// Applies a function to a reference of the second type parameter.
    ///
    /// Requires `A: Clone` because an untransformed first value is cloned.
    #[inline]
    fn second_ref<D, G>(&self, function: G) -> Self::Target<A, D>
    where
        A: Clone,
        G: FnOnce(&B) -> D,
        Self: Sized,
    {
        self.bimap_ref(A::clone, function)
    }
}

impl<L, R> Bifunctor<L, R> for TaggedUnion<L, R> {
    type Target<C, D> = TaggedUnion<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> TaggedUnion<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        TaggedUnion::bimap(self, first_function, second_function)
    }

    #[inline]
    fn first<C, F>(self, function: F) -> TaggedUnion<C, R>
    where
        F: FnOnce(L) -> C,
    {
        self.map_left(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> TaggedUnion<L, D>
    where
        G: FnOnce(R) -> D,
    {
        self.map_right(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> TaggedUnion<C, D>
    where
        F: FnOnce(&L) -> C,
        G: FnOnce(&R) -> D,
    {
        self.as_ref().bimap(first_function, second_function)
    }
}

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        Either::bimap(self, first_function, second_function)
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Either<C, R>
    where
        F: FnOnce(L) -> C,
    {
        self.map_left(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Either<L, D>
    where
        G: FnOnce(R) -> D,
    {
        self.map(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(&L) -> C,
        G: FnOnce(&R) -> D,
    {
        self.as_ref().bimap(first_function, second_function)
    }
}
