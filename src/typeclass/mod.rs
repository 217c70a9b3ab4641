//! Type class traits over the two-sided types.
//!
//! - [`Functor`]: Mapping over the right value of an `Either`
//! - [`Applicative`]: Lifting values and combining independent `Either`s
//! - [`Monad`]: Sequencing computations where each depends on the last
//! - [`Bifunctor`]: Mapping over either side of an `Either` or `TaggedUnion`
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses a Generic Associated Type to let `Either<L, _>`
//! stand for a type constructor with the left type fixed.
//!
//! # Examples
//!
//! ```rust
//! use sidewise::control::Either;
//! use sidewise::typeclass::{Applicative, Functor, Monad};
//!
//! fn positive(n: i32) -> Either<String, i32> {
//!     if n > 0 {
//!         Either::right(n)
//!     } else {
//!         Either::left(format!("{n} is not positive"))
//!     }
//! }
//!
//! let sum = positive(2).map2(positive(3), |a, b| a + b).fmap(|n| n * 10);
//! assert_eq!(sum, Either::right(50));
//!
//! let chained = <Either<String, ()>>::pure(-1).and_then(positive);
//! assert_eq!(chained, Either::left("-1 is not positive".to_string()));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
