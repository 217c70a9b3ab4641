//! Control structures built on the tagged union.
//!
//! - [`Either`]: a right-biased value that can be one of two types
//! - [`IntoIter`], [`Iter`], [`IterMut`]: the zero-or-one element view of an
//!   `Either`'s right value
//!
//! # Examples
//!
//! ```rust
//! use sidewise::control::Either;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input
//!         .parse::<i32>()
//!         .map_err(|error| format!("{input}: {error}"))
//!         .into()
//! }
//!
//! let total: i32 = ["1", "x", "3"].into_iter().flat_map(parse).sum();
//! assert_eq!(total, 4);
//! ```

mod either;
mod iter;

pub use either::Either;
pub use iter::{IntoIter, Iter, IterMut};

static_assertions::assert_impl_all!(Either<i32, String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Either<std::cell::Cell<i32>, i32>: Sync);
static_assertions::assert_eq_size!(Either<u64, u32>, Result<u32, u64>);
