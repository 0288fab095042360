use std::any::Any;

use thiserror::Error;

/// Returned by [`OptionExt::get`](crate::option_ext::OptionExt::get) when the option holds no value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Default)]
#[error("empty value")]
pub struct EmptyValueError;

/// A panic captured by [`Try::catching`](crate::try_type::Try::catching).
#[derive(Debug, Error)]
#[error("panicked: {message}")]
pub struct TryError {
    message: String,
}

impl TryError {
    /// Builds a `TryError` from a panic payload, keeping its message when it has one.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        TryError { message }
    }

    /// Returns the panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
