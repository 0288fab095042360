//! scopetry-core: Option, Either and a Try type with composable deferred cleanup.
//!
//! `Option` is the std type, completed by [`OptionExt`]. [`Either`] is a
//! right-biased disjoint union. [`Try`] pairs an `Either<E, T>` with a
//! pending [`Finalizer`] that chains across `map`/`flat_map`/`finally` and
//! runs only when [`Try::end`] is called (or a [`TryGuard`] leaves scope).

pub mod either;
pub mod error;
pub mod finalizer;
pub mod guard;
#[cfg(test)]
mod log_capture;
pub mod option_ext;
pub mod prelude;
pub mod pure;
pub mod try_type;

pub use crate::either::Either;
pub use crate::error::{EmptyValueError, TryError};
pub use crate::finalizer::Finalizer;
pub use crate::guard::TryGuard;
pub use crate::option_ext::OptionExt;
pub use crate::pure::Pure;
pub use crate::try_type::Try;
