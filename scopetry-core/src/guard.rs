use std::mem;
use std::ops::Deref;

use crate::either::Either;
use crate::finalizer::Finalizer;
use crate::try_type::Try;

/// Runs the held finalizer when dropped.
struct EndOnDrop(Finalizer);

impl Drop for EndOnDrop {
    fn drop(&mut self) {
        let pending = mem::take(&mut self.0);
        if !pending.is_noop() {
            tracing::trace!("guard ending try on scope exit");
        }
        pending.run();
    }
}

/// Scoped form of a [`Try`]: its pending cleanup runs when the guard leaves scope.
///
/// The cleanup runs on every exit path, including early returns through `?`
/// and panics. [`TryGuard::finish`] ends it explicitly and hands back the
/// ended `Try`. A finalizer that panics while the guard is dropped during
/// another panic aborts the process, as with any `Drop`.
///
/// # Examples
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use scopetry_core::try_type::Try;
///
/// let closed = Rc::new(Cell::new(false));
/// let flag = closed.clone();
/// {
///     let guard = Try::<i32, String>::success(3).finally(move |_| flag.set(true)).guard();
///     assert_eq!(guard.right_value(), Some(&3));
///     assert!(!closed.get());
/// }
/// assert!(closed.get());
/// ```
pub struct TryGuard<T, E = anyhow::Error> {
    result: Either<E, T>,
    end: EndOnDrop,
}

impl<T, E> TryGuard<T, E> {
    pub(crate) fn new(result: Either<E, T>, pending: Finalizer) -> Self {
        TryGuard {
            result,
            end: EndOnDrop(pending),
        }
    }

    /// Borrows the guarded result.
    pub fn get(&self) -> &Either<E, T> {
        &self.result
    }

    /// Runs the pending cleanup now and returns the ended `Try`.
    pub fn finish(self) -> Try<T, E> {
        let TryGuard { result, end } = self;
        drop(end);
        Try::from_either(result)
    }
}

impl<T, E> Deref for TryGuard<T, E> {
    type Target = Either<E, T>;

    fn deref(&self) -> &Self::Target {
        &self.result
    }
}
