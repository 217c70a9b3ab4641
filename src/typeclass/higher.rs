//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust does not natively support Higher-Kinded Types, so a trait cannot
//! abstract over `Either<L, _>` as a type constructor directly. This module
//! uses a GAT to work around that limitation; the type class traits build on
//! it.
//!
//! # Example
//!
//! ```rust
//! use sidewise::control::Either;
//! use sidewise::typeclass::TypeConstructor;
//!
//! fn assert_constructor<T>()
//! where
//!     T: TypeConstructor<Inner = i32, WithType<String> = Either<char, String>>,
//! {
//! }
//!
//! assert_constructor::<Either<char, i32>>();
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Either<L, R>`, this is `R`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Either<L, R>`, `WithType<B>` is `Either<L, B>`: the left type is
    /// fixed.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<L, R> TypeConstructor for crate::control::Either<L, R> {
    type Inner = R;
    type WithType<B> = crate::control::Either<L, B>;
}
