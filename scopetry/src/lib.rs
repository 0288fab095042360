//! scopetry: Option, Either and Try with stacked finalizers.
//!
//! This is the umbrella crate that re-exports all of `scopetry-core`.
//!
//! # Quick Start
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use scopetry::prelude::*;
//!
//! let closed = Rc::new(RefCell::new(Vec::new()));
//! let log = closed.clone();
//!
//! let parsed: Try<i32, String> = Try::from_result("21".parse::<i32>().map_err(|e| e.to_string()))
//!     .finally(move |v| log.borrow_mut().push(*v))
//!     .map(|v| v * 2)
//!     .end();
//!
//! assert_eq!(parsed.get_or_else(0), 42);
//! assert_eq!(*closed.borrow(), vec![21]);
//! ```

pub use scopetry_core::prelude;
pub use scopetry_core::*;
