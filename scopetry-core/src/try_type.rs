use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::either::Either;
use crate::error::TryError;
use crate::finalizer::Finalizer;
use crate::guard::TryGuard;

/// The outcome of a fallible computation, paired with cleanup that has not run yet.
///
/// A `Try` is a `Failure(E)` or a `Success(T)` (stored as `Either<E, T>`) plus
/// a pending [`Finalizer`]. Chaining with [`Try::map`], [`Try::flat_map`],
/// [`Try::flat_map_fail`] and [`Try::finally`] never runs cleanup; it only
/// composes the pending actions into the returned value. Cleanup runs when
/// [`Try::end`] is called on a value, and it cascades to everything that
/// value was derived from.
///
/// Ordering rules:
/// - stacked `finally` registrations run last-registered first;
/// - after a bind, the cleanup of the Try produced by the callback runs
///   before the cleanup of the Try that was bound.
///
/// The error type defaults to `anyhow::Error`; the library never looks inside it.
///
/// # Examples
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use scopetry_core::try_type::Try;
///
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let (l1, l2) = (log.clone(), log.clone());
///
/// let t: Try<i32, String> = Try::success(1)
///     .finally(move |v| l1.borrow_mut().push(format!("close a {}", v)))
///     .finally(move |v| l2.borrow_mut().push(format!("close b {}", v)))
///     .map(|v| v * 10);
/// assert!(log.borrow().is_empty());
///
/// let t = t.end();
/// assert_eq!(t.get_or_else(0), 10);
/// assert_eq!(*log.borrow(), vec!["close b 1", "close a 1"]);
/// ```
pub struct Try<T, E = anyhow::Error> {
    result: Either<E, T>,
    pending: Finalizer,
}

impl<T, E> Try<T, E> {
    /// A successful result with nothing pending.
    pub fn success(value: T) -> Self {
        Try::from_either(Either::Right(value))
    }

    /// A failed result with nothing pending.
    pub fn failure(err: E) -> Self {
        Try::from_either(Either::Left(err))
    }

    /// Builds a Try from a value and an optional error; the error wins when present.
    pub fn from_parts(value: T, err: Option<E>) -> Self {
        match err {
            Some(err) => Try::failure(err),
            None => Try::success(value),
        }
    }

    pub fn from_result(result: Result<T, E>) -> Self {
        Try::from_either(Either::from_result(result))
    }

    pub fn from_either(result: Either<E, T>) -> Self {
        Try {
            result,
            pending: Finalizer::noop(),
        }
    }

    /// Runs `f`, turning a panic into a failure carrying a [`TryError`].
    ///
    /// ```
    /// use scopetry_core::try_type::Try;
    ///
    /// let t: Try<i32> = Try::catching(|| -> i32 { panic!("boom") });
    /// assert!(t.is_failure());
    /// ```
    pub fn catching(f: impl FnOnce() -> T) -> Self
    where
        E: From<TryError>,
    {
        match catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Try::success(value),
            Err(payload) => Try::failure(TryError::from_panic(payload).into()),
        }
    }

    fn into_parts(self) -> (Either<E, T>, Finalizer) {
        (self.result, self.pending)
    }

    pub fn is_success(&self) -> bool {
        self.result.is_right()
    }

    pub fn is_failure(&self) -> bool {
        self.result.is_left()
    }

    /// Returns `true` while this value still carries cleanup that `end` would run.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_noop()
    }

    /// Borrows the underlying result.
    pub fn as_either(&self) -> &Either<E, T> {
        &self.result
    }

    /// Eliminates the Try, applying `on_failure` or `on_success`.
    ///
    /// Consuming eliminators (`fold`, `get_or_else`, `recover`, `to_option`,
    /// `to_either`, `into_result`) drop pending cleanup without running it.
    /// Call [`Try::end`] first when the cleanup matters.
    pub fn fold<U, FF: FnOnce(E) -> U, FS: FnOnce(T) -> U>(self, on_failure: FF, on_success: FS) -> U {
        self.result.fold(on_failure, on_success)
    }

    /// Returns the success value, or `default` on failure.
    ///
    /// Pending cleanup is dropped without running; see [`Try::fold`].
    pub fn get_or_else(self, default: T) -> T {
        self.fold(|_| default, |value| value)
    }

    /// Returns the success value, or computes one from the error.
    ///
    /// Pending cleanup is dropped without running; see [`Try::fold`].
    pub fn recover<F: FnOnce(E) -> T>(self, f: F) -> T {
        self.fold(f, |value| value)
    }

    /// Runs `f` on the success value, if any.
    pub fn for_each<F: FnOnce(&T)>(&self, f: F) {
        self.result.for_each(f)
    }

    /// Runs `f` on the error, if any.
    pub fn if_fail<F: FnOnce(&E)>(&self, f: F) {
        self.result.if_left(f)
    }

    pub fn bi_for_each<FF: FnOnce(&E), FS: FnOnce(&T)>(&self, on_failure: FF, on_success: FS) {
        self.result.bi_for_each(on_failure, on_success)
    }

    /// The success value as an `Option`, discarding the error.
    ///
    /// Pending cleanup is dropped without running; see [`Try::fold`].
    pub fn to_option(self) -> Option<T> {
        self.fold(|_| None, Some)
    }

    /// The underlying `Either`: `Left` holds the error, `Right` the value.
    ///
    /// Pending cleanup is dropped without running; see [`Try::fold`].
    pub fn to_either(self) -> Either<E, T> {
        self.into_parts().0
    }

    /// Converts to a std `Result`. Pending cleanup is dropped without running.
    pub fn into_result(self) -> Result<T, E> {
        self.to_either().to_result()
    }

    /// Runs the pending cleanup and returns the same result with nothing pending.
    ///
    /// Ending an already-ended value runs nothing.
    pub fn end(self) -> Self {
        let (result, pending) = self.into_parts();
        if !pending.is_noop() {
            tracing::trace!(success = result.is_right(), "ending try");
        }
        pending.run();
        Try::from_either(result)
    }

    /// Registers `f` to run on the success value when this chain is ended.
    ///
    /// Nothing runs now. When `end` is later called on the returned value,
    /// `f` runs first (only if this is a success), then whatever was
    /// already pending here. Stacked registrations therefore unwind in
    /// reverse order, like nested scopes.
    ///
    /// The value is cloned at registration so `f` can still observe it after
    /// the chain has moved the original on.
    pub fn finally<F>(self, f: F) -> Self
    where
        T: Clone + 'static,
        F: FnOnce(&T) + 'static,
    {
        let (result, pending) = self.into_parts();
        let registered = match result.right_value() {
            Some(value) => {
                let value = value.clone();
                Finalizer::new(move || f(&value))
            }
            None => Finalizer::noop(),
        };
        Try {
            result,
            pending: registered.then(pending),
        }
    }

    /// Binds the success value to another fallible computation.
    ///
    /// On failure, `f` is not called and the error is carried over; the
    /// pending cleanup of `self` is always carried with it. On success, the
    /// returned value's cleanup ends the Try produced by `f` first, then
    /// `self`.
    pub fn flat_map<R, F: FnOnce(T) -> Try<R, E>>(self, f: F) -> Try<R, E> {
        let (result, outer) = self.into_parts();
        let (result, inner) = result.fold(
            |err| (Either::Left(err), Finalizer::noop()),
            |value| f(value).into_parts(),
        );
        Try {
            result,
            pending: inner.then(outer),
        }
    }

    /// Alias for [`Try::flat_map`].
    pub fn and_then<R, F: FnOnce(T) -> Try<R, E>>(self, f: F) -> Try<R, E> {
        self.flat_map(f)
    }

    pub fn map<R, F: FnOnce(T) -> R>(self, f: F) -> Try<R, E> {
        self.flat_map(|value| Try::success(f(value)))
    }

    /// Binds the error to a recovery computation.
    ///
    /// A success is returned as is, pending cleanup included. On failure the
    /// returned value's cleanup ends the Try produced by `f` first, then
    /// `self`. The recovery may change the error type.
    pub fn flat_map_fail<E2, F: FnOnce(E) -> Try<T, E2>>(self, f: F) -> Try<T, E2> {
        let (result, outer) = self.into_parts();
        let (result, inner) = result.fold(|err| f(err).into_parts(), |value| (Either::Right(value), Finalizer::noop()));
        Try {
            result,
            pending: inner.then(outer),
        }
    }

    /// Transforms the error; a success passes through.
    pub fn map_left<E2, F: FnOnce(E) -> E2>(self, f: F) -> Try<T, E2> {
        self.flat_map_fail(|err| Try::failure(f(err)))
    }

    /// Wraps this value in a guard that ends it when the guard goes out of scope.
    pub fn guard(self) -> TryGuard<T, E> {
        let (result, pending) = self.into_parts();
        TryGuard::new(result, pending)
    }

    /// Acquires a resource, uses it and releases it, then ends the whole chain.
    ///
    /// `release` runs only if `acquire` succeeded, and always after the
    /// cleanup of whatever `use_fn` produced. If `acquire` failed, `use_fn`
    /// is not called.
    ///
    /// ```
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use scopetry_core::try_type::Try;
    ///
    /// let released = Rc::new(Cell::new(false));
    /// let flag = released.clone();
    /// let len: Try<usize, String> = Try::bracket(
    ///     Try::success("handle".to_string()),
    ///     |h| Try::success(h.len()),
    ///     move |_| flag.set(true),
    /// );
    /// assert_eq!(len.get_or_else(0), 6);
    /// assert!(released.get());
    /// ```
    pub fn bracket<A, U, R>(acquire: Try<A, E>, use_fn: U, release: R) -> Self
    where
        A: Clone + 'static,
        U: FnOnce(A) -> Try<T, E>,
        R: FnOnce(&A) + 'static,
    {
        acquire.finally(release).flat_map(use_fn).end()
    }
}

impl<T, E> From<Result<T, E>> for Try<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Try::from_result(result)
    }
}

impl<T, E> From<Either<E, T>> for Try<T, E> {
    fn from(result: Either<E, T>) -> Self {
        Try::from_either(result)
    }
}

/// Equality looks at the results only; pending cleanup never takes part.
impl<T: PartialEq, E: PartialEq> PartialEq for Try<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.result == other.result
    }
}

impl<T: Eq, E: Eq> Eq for Try<T, E> {}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Try<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = match &self.result {
            Either::Left(err) => {
                let mut s = f.debug_struct("Failure");
                s.field("error", err);
                s
            }
            Either::Right(value) => {
                let mut s = f.debug_struct("Success");
                s.field("value", value);
                s
            }
        };
        s.field("pending", &self.has_pending()).finish()
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn arb_try() -> impl Strategy<Value = Try<i32, String>> {
        prop_oneof![any::<i32>().prop_map(Try::success), "[a-z]{1,8}".prop_map(Try::failure),]
    }

    proptest! {
        #[test]
        fn success_and_failure_exclusive(t in arb_try()) {
            prop_assert_ne!(t.is_success(), t.is_failure());
        }

        #[test]
        fn map_matches_success_of_f(v in any::<i32>()) {
            let f = |x: i32| x.wrapping_mul(3);
            prop_assert_eq!(Try::<i32, String>::success(v).map(f), Try::success(f(v)));
        }

        #[test]
        fn map_on_failure_is_identity(e in "[a-z]{1,8}") {
            prop_assert_eq!(Try::<i32, String>::failure(e.clone()).map(|x| x + 1), Try::failure(e));
        }

        #[test]
        fn flat_map_fail_on_success_is_identity(v in any::<i32>()) {
            prop_assert_eq!(
                Try::<i32, String>::success(v).flat_map_fail(|_| Try::<i32, String>::success(0)),
                Try::success(v)
            );
        }

        #[test]
        fn stacked_finalizers_run_in_reverse(n in 1usize..12) {
            let log = Rc::new(RefCell::new(Vec::new()));
            let mut t: Try<usize, String> = Try::success(0);
            for i in 0..n {
                let log = log.clone();
                t = t.finally(move |_| log.borrow_mut().push(i));
            }
            let _ = t.end();
            let expected: Vec<usize> = (0..n).rev().collect();
            prop_assert_eq!(log.borrow().clone(), expected);
        }

        #[test]
        fn get_or_else_on_failure_returns_default(e in "[a-z]{1,8}", d in any::<i32>()) {
            prop_assert_eq!(Try::<i32, String>::failure(e).get_or_else(d), d);
        }
    }
}
