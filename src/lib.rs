#![no_std]

//! A wrapper asserting that a pointer-like value is never null.
//!
//! [`NotNull<P>`] states in a signature that a pointer cannot be null, so the callee never
//! checks it again. It works with any [`Nullable`] pointer type: raw pointers,
//! `Option<&T>`, `Option<NonNull<T>>`, `Option<Box<T>>`, `Option<Rc<T>>`, `Option<Arc<T>>`,
//! or a user-defined type implementing the trait.
//!
//! A wrapper is only ever created by one of two factories, so every call site chooses between
//! [`check_not_null`], which checks, and [`assume_not_null`], which does not.
//!
//! # Example
//! ```
//! use not_null::{check_not_null, NotNull, NullContractViolation};
//!
//! struct Widget {
//!     id: u32,
//! }
//!
//! fn consume_impl(widget: NotNull<Option<&Widget>>) -> u32 {
//!     widget.id
//! }
//!
//! // Adapting a legacy API that hands out nullable references
//! fn consume(widget: Option<&Widget>) -> Result<u32, NullContractViolation> {
//!     Ok(consume_impl(check_not_null(widget)?))
//! }
//!
//! assert_eq!(consume(Some(&Widget { id: 7 })), Ok(7));
//! ```
//!
//! # Features
//!
//! - `alloc` (default): support for `Option<Box<T>>`, `Option<Rc<T>>` and `Option<Arc<T>>`.
//! - `std`: links the standard library.
//! - `abort-on-violation`: a failed [`check_not_null`] writes its message to standard error and
//!   aborts the process instead of returning [`NullContractViolation`].
//!
//! To expose the crate under another name, rename the dependency in `Cargo.toml`.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod address;
mod cmp;
pub mod convert;
mod error;
mod factory;
mod not_null;
mod nullable;

pub use address::{to_address, ToAddress, ToAddressMut};
pub use cmp::{Null, NULL};
pub use convert::{ExplicitFrom, ImplicitFrom};
pub use error::{NullContractViolation, MESSAGE};
pub use factory::{assume_not_null, check_not_null};
pub use not_null::NotNull;
pub use nullable::{Nullable, SafePointer};
