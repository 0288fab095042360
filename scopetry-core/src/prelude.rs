pub use crate::either::Either;
pub use crate::error::{EmptyValueError, TryError};
pub use crate::finalizer::Finalizer;
pub use crate::guard::TryGuard;
pub use crate::option_ext::OptionExt;
pub use crate::pure::Pure;
pub use crate::try_type::Try;
