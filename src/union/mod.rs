//! Two-sided tagged union.
//!
//! This module provides the substrate the higher-level wrappers are built on:
//!
//! - [`TaggedUnion`]: exactly one of two values, with full value semantics
//! - [`Side`]: the runtime tag of a union
//! - [`LeftSide`], [`RightSide`]: compile-time side selectors used at
//!   construction
//! - [`SideMismatch`]: the error of a checked wrong-side access
//!
//! # Examples
//!
//! ```rust
//! use sidewise::union::{LeftSide, RightSide, Side, TaggedUnion};
//!
//! let mut union: TaggedUnion<String, i32> = TaggedUnion::new(RightSide, 5);
//! assert_eq!(union.side(), Side::Right);
//! assert!(union.try_as_left().is_err());
//!
//! *union.as_right_mut() += 1;
//! assert_eq!(union.as_right(), &6);
//!
//! union.emplace(LeftSide, "switched");
//! assert_eq!(union.as_left(), "switched");
//! ```

mod error;
mod side;
mod tagged;

pub use error::SideMismatch;
pub use side::{LeftSide, RightSide, Side, SideSelector};
pub use tagged::TaggedUnion;

// Auto traits follow the payloads and the wrapper adds no space.
static_assertions::assert_impl_all!(TaggedUnion<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(TaggedUnion<u8, u64>: Copy);
static_assertions::assert_not_impl_any!(TaggedUnion<std::rc::Rc<i32>, i32>: Send, Sync);
static_assertions::assert_not_impl_any!(TaggedUnion<i32, i32>: Default);
static_assertions::assert_not_impl_any!(TaggedUnion<std::sync::Mutex<i32>, i32>: Clone, Copy);
static_assertions::assert_eq_size!(TaggedUnion<u64, u32>, Result<u32, u64>);
static_assertions::assert_eq_size!(TaggedUnion<String, Vec<u8>>, Result<Vec<u8>, String>);
