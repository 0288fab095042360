use crate::either::Either;
use crate::try_type::Try;

/// Lifts a value into a container on its primary branch.
///
/// # Examples
/// ```
/// use scopetry_core::either::Either;
/// use scopetry_core::pure::Pure;
/// use scopetry_core::try_type::Try;
///
/// let opt: Option<i32> = Pure::pure(42);
/// assert_eq!(opt, Some(42));
///
/// let e: Either<String, i32> = Pure::pure(42);
/// assert_eq!(e, Either::Right(42));
///
/// let t: Try<i32, String> = Pure::pure(42);
/// assert!(t.is_success());
/// ```
pub trait Pure<A> {
    fn pure(a: A) -> Self;
}

impl<A> Pure<A> for Option<A> {
    fn pure(a: A) -> Self {
        Some(a)
    }
}

impl<L, A> Pure<A> for Either<L, A> {
    fn pure(a: A) -> Self {
        Either::Right(a)
    }
}

impl<A, E> Pure<A> for Try<A, E> {
    fn pure(a: A) -> Self {
        Try::success(a)
    }
}
