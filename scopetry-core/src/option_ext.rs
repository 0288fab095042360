use crate::either::Either;
use crate::error::EmptyValueError;
use crate::try_type::Try;

/// Extension trait completing `Option<T>` as a nullable container.
///
/// `map` and `filter` are the inherent `Option` methods and keep their std meaning;
/// `pure` comes from [`Pure`](crate::pure::Pure). Everything here that
/// eliminates an option goes through [`OptionExt::fold`].
///
/// # Examples
/// ```
/// use scopetry_core::option_ext::OptionExt;
/// use scopetry_core::pure::Pure;
///
/// let present: Option<i32> = Option::pure(21);
/// assert_eq!(present.flat_map(|x| Some(x * 2)).get_or_else(0), 42);
///
/// let empty: Option<i32> = Option::empty();
/// assert!(empty.get().is_err());
/// ```
pub trait OptionExt<T>: Sized {
    /// Creates an empty option.
    fn empty() -> Self;

    /// Returns `true` if a value is present.
    fn is_present(&self) -> bool;

    /// Returns `true` if no value is present.
    fn is_empty(&self) -> bool;

    /// Returns the value, or [`EmptyValueError`] when there is none.
    fn get(self) -> Result<T, EmptyValueError>;

    /// Returns the value, or `default` when there is none.
    fn get_or_else(self, default: T) -> T;

    /// Returns this option if present, otherwise `other`.
    fn or_else_option(self, other: Option<T>) -> Option<T>;

    /// Eliminates the option: `on_empty` when empty, `on_present` with the value otherwise.
    fn fold<U, FE: FnOnce() -> U, FP: FnOnce(T) -> U>(self, on_empty: FE, on_present: FP) -> U;

    /// Binds the value to an option-producing function.
    fn flat_map<U, F: FnOnce(T) -> Option<U>>(self, f: F) -> Option<U>;

    /// Runs `f` on the value, if present.
    fn for_each<F: FnOnce(&T)>(&self, f: F);

    /// Runs `f` if the option is empty.
    fn if_empty<F: FnOnce()>(&self, f: F);

    /// Runs exactly one of the two callbacks.
    fn bi_for_each<FE: FnOnce(), FP: FnOnce(&T)>(&self, on_empty: FE, on_present: FP);

    /// Converts to `Either`, using `left` for the empty case.
    fn to_either<L>(self, left: impl FnOnce() -> L) -> Either<L, T>;

    /// Converts to `Try`, failing with `err` for the empty case.
    fn to_try<E>(self, err: impl FnOnce() -> E) -> Try<T, E>;
}

impl<T> OptionExt<T> for Option<T> {
    fn empty() -> Self {
        None
    }

    fn is_present(&self) -> bool {
        self.is_some()
    }

    fn is_empty(&self) -> bool {
        self.is_none()
    }

    fn get(self) -> Result<T, EmptyValueError> {
        self.fold(|| Err(EmptyValueError), Ok)
    }

    fn get_or_else(self, default: T) -> T {
        self.fold(|| default, |v| v)
    }

    fn or_else_option(self, other: Option<T>) -> Option<T> {
        self.fold(|| other, Some)
    }

    fn fold<U, FE: FnOnce() -> U, FP: FnOnce(T) -> U>(self, on_empty: FE, on_present: FP) -> U {
        match self {
            Some(v) => on_present(v),
            None => on_empty(),
        }
    }

    fn flat_map<U, F: FnOnce(T) -> Option<U>>(self, f: F) -> Option<U> {
        self.fold(|| None, f)
    }

    fn for_each<F: FnOnce(&T)>(&self, f: F) {
        self.as_ref().fold(|| (), f)
    }

    fn if_empty<F: FnOnce()>(&self, f: F) {
        self.as_ref().fold(f, |_| ())
    }

    fn bi_for_each<FE: FnOnce(), FP: FnOnce(&T)>(&self, on_empty: FE, on_present: FP) {
        self.as_ref().fold(on_empty, on_present)
    }

    fn to_either<L>(self, left: impl FnOnce() -> L) -> Either<L, T> {
        self.fold(|| Either::Left(left()), Either::Right)
    }

    fn to_try<E>(self, err: impl FnOnce() -> E) -> Try<T, E> {
        self.fold(|| Try::failure(err()), Try::success)
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn get_or_else_on_empty_returns_default(default in any::<i64>()) {
            prop_assert_eq!(None::<i64>.get_or_else(default), default);
        }

        #[test]
        fn flat_map_agrees_with_std_and_then(opt in proptest::option::of(any::<i32>())) {
            let f = |x: i32| if x % 2 == 0 { Some(x / 2) } else { None };
            prop_assert_eq!(opt.flat_map(f), opt.and_then(f));
        }

        #[test]
        fn present_and_empty_exclusive(opt in proptest::option::of(any::<i32>())) {
            prop_assert_ne!(opt.is_present(), opt.is_empty());
        }
    }
}
