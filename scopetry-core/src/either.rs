use std::fmt;

/// A right-biased disjoint union.
///
/// Exactly one of `Left(L)` or `Right(R)` is populated; the enum makes any
/// other state unrepresentable. Unqualified combinators (`map`, `flat_map`,
/// `for_each`) act on `Right`; the `Left` side has explicitly named variants.
///
/// Combinators take `self` by value so that non-`Clone` payloads such as
/// `anyhow::Error` pass through untouched. Use [`Either::as_ref`] to work on
/// borrows.
///
/// # Examples
/// ```
/// use scopetry_core::either::Either;
///
/// let right: Either<String, i32> = Either::right(21);
/// assert_eq!(right.map(|x| x * 2), Either::Right(42));
///
/// let left: Either<String, i32> = Either::left("nope".to_string());
/// assert_eq!(left.get_or_else(0), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Creates a `Left` value.
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Creates a `Right` value.
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Creates an `Either` from a `Result`: `Err` becomes `Left`, `Ok` becomes `Right`.
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Borrows the contents, yielding `Either<&L, &R>`.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Returns the `Left` value, if present.
    pub fn left_value(&self) -> Option<&L> {
        self.as_ref().fold(Some, |_| None)
    }

    /// Returns the `Right` value, if present.
    pub fn right_value(&self) -> Option<&R> {
        self.as_ref().fold(|_| None, Some)
    }

    /// Eliminates the union by applying the function for whichever side is present.
    ///
    /// Every other combinator on `Either` is written in terms of `fold`.
    pub fn fold<T, FL: FnOnce(L) -> T, FR: FnOnce(R) -> T>(self, on_left: FL, on_right: FR) -> T {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Transforms the `Right` value; a `Left` passes through untouched.
    pub fn map<U, F: FnOnce(R) -> U>(self, f: F) -> Either<L, U> {
        self.flat_map(|r| Either::Right(f(r)))
    }

    /// Binds the `Right` value to a new `Either`, short-circuiting on `Left`.
    pub fn flat_map<U, F: FnOnce(R) -> Either<L, U>>(self, f: F) -> Either<L, U> {
        self.fold(Either::Left, f)
    }

    /// Alias for [`Either::flat_map`], following the `Option`/`Result` naming.
    pub fn and_then<U, F: FnOnce(R) -> Either<L, U>>(self, f: F) -> Either<L, U> {
        self.flat_map(f)
    }

    /// Transforms the `Left` value; a `Right` passes through untouched.
    pub fn map_left<U, F: FnOnce(L) -> U>(self, f: F) -> Either<U, R> {
        self.flat_map_left(|l| Either::Left(f(l)))
    }

    /// Binds the `Left` value to a new `Either`, short-circuiting on `Right`.
    pub fn flat_map_left<U, F: FnOnce(L) -> Either<U, R>>(self, f: F) -> Either<U, R> {
        self.fold(f, Either::Right)
    }

    /// Transforms both sides at once.
    pub fn bimap<A, B, FL: FnOnce(L) -> A, FR: FnOnce(R) -> B>(self, on_left: FL, on_right: FR) -> Either<A, B> {
        self.fold(|l| Either::Left(on_left(l)), |r| Either::Right(on_right(r)))
    }

    pub fn swap(self) -> Either<R, L> {
        self.fold(Either::Right, Either::Left)
    }

    /// Returns the `Right` value, or `default` for a `Left`.
    pub fn get_or_else(self, default: R) -> R {
        self.fold(|_| default, |r| r)
    }

    /// Returns the `Right` value, or computes one from the `Left`.
    pub fn get_or_else_with<F: FnOnce(L) -> R>(self, f: F) -> R {
        self.fold(f, |r| r)
    }

    /// Runs `f` on the `Right` value, if present.
    pub fn for_each<F: FnOnce(&R)>(&self, f: F) {
        self.as_ref().fold(|_| (), f)
    }

    /// Runs `f` on the `Left` value, if present.
    pub fn if_left<F: FnOnce(&L)>(&self, f: F) {
        self.as_ref().fold(f, |_| ())
    }

    /// Runs exactly one of the two callbacks.
    pub fn bi_for_each<FL: FnOnce(&L), FR: FnOnce(&R)>(&self, on_left: FL, on_right: FR) {
        self.as_ref().fold(on_left, on_right)
    }

    /// Keeps the `Right` value as an `Option`, discarding any `Left`.
    pub fn to_option(self) -> Option<R> {
        self.fold(|_| None, Some)
    }

    pub fn to_result(self) -> Result<R, L> {
        self.fold(Err, Ok)
    }
}

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_option().into_iter()
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.to_result()
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => f.debug_tuple("Left").field(l).finish(),
            Either::Right(r) => f.debug_tuple("Right").field(r).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, "Left({})", l),
            Either::Right(r) => write!(f, "Right({})", r),
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_either() -> impl Strategy<Value = Either<String, i32>> {
        prop_oneof![any::<i32>().prop_map(Either::right), "[a-z]{1,10}".prop_map(Either::left),]
    }

    proptest! {
        #[test]
        fn map_identity(e in arb_either()) {
            prop_assert_eq!(e.clone().map(|x| x), e);
        }

        #[test]
        fn flat_map_associativity(e in arb_either()) {
            let f = |v: i32| -> Either<String, i32> { Either::right(v.wrapping_add(1)) };
            let g = |v: i32| -> Either<String, i32> {
                if v % 3 == 0 { Either::left("div3".to_string()) } else { Either::right(v.wrapping_mul(2)) }
            };
            prop_assert_eq!(e.clone().flat_map(f).flat_map(g), e.flat_map(|v| f(v).flat_map(g)));
        }

        #[test]
        fn exactly_one_side(e in arb_either()) {
            prop_assert_ne!(e.is_left(), e.is_right());
        }

        #[test]
        fn get_or_else_on_left_returns_default(l in "[a-z]{1,10}", default in any::<i32>()) {
            prop_assert_eq!(Either::<String, i32>::left(l).get_or_else(default), default);
        }
    }
}
