//! # sidewise
//!
//! A discriminated union of exactly two types, and a right-biased
//! composition algebra on top of it.
//!
//! ## Overview
//!
//! - **Tagged Union**: [`TaggedUnion<L, R>`](union::TaggedUnion) holds a
//!   value of `L` or a value of `R` together with a tag naming the live side.
//!   Construction selects a side explicitly, so it works even when `L` and
//!   `R` are the same type.
//! - **Either**: [`Either<L, R>`](control::Either) wraps the union and adds
//!   `map`, `flat_map`, `fold`, `recover` and friends. The right side is the
//!   value channel, the left side short-circuits.
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` and `Bifunctor`
//!   implementations for the two types.
//!
//! ## Feature Flags
//!
//! - `union`: The tagged union
//! - `control`: `Either` and its iterators
//! - `typeclass`: Type class traits
//! - `serde`: `Serialize`/`Deserialize` for both types
//! - `tracing`: Diagnostic events on side mismatches and failed construction
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sidewise::prelude::*;
//!
//! let square = |x: i32| Either::<String, i32>::right(x * x);
//!
//! let five: Either<String, i32> = Either::right(5);
//! assert_eq!(five.flat_map(square).flat_map(square).recover(|_| 0), 625);
//!
//! let same: TaggedUnion<i32, i32> = TaggedUnion::new(LeftSide, 5);
//! assert!(same.is_left());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use sidewise::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "union")]
    pub use crate::union::*;

    #[cfg(feature = "control")]
    pub use crate::control::Either;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

#[cfg(feature = "union")]
mod diagnostics;

#[cfg(feature = "union")]
pub mod union;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "typeclass")]
pub mod typeclass;
