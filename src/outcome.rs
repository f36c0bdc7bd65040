use std::future::Future;

use crate::{disposition::Disposition, problem::Problem};

/// Common surface of [`Outcome`] and [`crate::UnitOutcome`] needed by
/// response producing code.
pub trait ApiOutcome {
    fn disposition(&self) -> Disposition;

    fn is_success(&self) -> bool;

    /// Problem facts of the outcome's disposition.
    ///
    /// # Panics
    ///
    /// Panics when the disposition is `Unknown`.
    #[track_caller]
    fn to_problem(&self) -> Problem {
        self.disposition().to_problem()
    }
}

/// Signals a read of the branch the outcome does not hold.
#[cold]
#[track_caller]
pub(crate) fn invalid_state(accessor: &str, branch: &str) -> ! {
    log::error!("{}() called on a {} outcome", accessor, branch);
    panic!("InvalidState: {}() called on a {} outcome", accessor, branch)
}

/// A value or an error, tagged with a [`Disposition`].
///
/// Outcomes are immutable. Combinators consume an outcome and return a new
/// one; [`Outcome::with_disposition`] is the only way to change the tag.
///
/// ```rust
/// use routcome::{Disposition, Outcome};
///
/// let outcome: Outcome<u32, String> = Outcome::success(20)
///     .map(|v| v + 1)
///     .bind(|v| Outcome::success_with(v * 2, Disposition::OkWithContent));
///
/// assert_eq!(*outcome.value(), 42);
/// assert_eq!(outcome.disposition(), Disposition::OkWithContent);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Outcome<T, E> {
    branch: Result<T, E>,
    disposition: Disposition,
}

impl<T, E> Outcome<T, E> {
    /// Success branch tagged [`Disposition::Ok`].
    pub fn success(value: T) -> Self {
        Self::success_with(value, Disposition::Ok)
    }

    pub fn success_with(value: T, disposition: Disposition) -> Self {
        Self {
            branch: Ok(value),
            disposition,
        }
    }

    /// Failure branch tagged [`Disposition::Error`].
    pub fn failure(error: E) -> Self {
        Self::failure_with(error, Disposition::Error)
    }

    pub fn failure_with(error: E, disposition: Disposition) -> Self {
        Self {
            branch: Err(error),
            disposition,
        }
    }

    pub fn is_success(&self) -> bool {
        self.branch.is_ok()
    }

    pub fn is_failure(&self) -> bool {
        self.branch.is_err()
    }

    pub fn disposition(&self) -> Disposition {
        self.disposition
    }

    /// Payload of the success branch.
    ///
    /// # Panics
    ///
    /// Panics with `InvalidState` on a failure branch.
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.branch {
            Ok(value) => value,
            Err(_) => invalid_state("value", "failure"),
        }
    }

    /// Error of the failure branch.
    ///
    /// # Panics
    ///
    /// Panics with `InvalidState` on a success branch.
    #[track_caller]
    pub fn error(&self) -> &E {
        match &self.branch {
            Ok(_) => invalid_state("error", "success"),
            Err(error) => error,
        }
    }

    /// Owned version of [`Outcome::value`].
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.branch {
            Ok(value) => value,
            Err(_) => invalid_state("value", "failure"),
        }
    }

    /// Owned version of [`Outcome::error`].
    #[track_caller]
    pub fn into_error(self) -> E {
        match self.branch {
            Ok(_) => invalid_state("error", "success"),
            Err(error) => error,
        }
    }

    pub fn as_result(&self) -> Result<&T, &E> {
        self.branch.as_ref()
    }

    /// Drops the disposition.
    pub fn into_result(self) -> Result<T, E> {
        self.branch
    }

    /// Same branch and payload, different tag.
    pub fn with_disposition(self, disposition: Disposition) -> Self {
        Self {
            branch: self.branch,
            disposition,
        }
    }

    /// Transforms the success payload. The disposition is kept and `f` is
    /// never called on a failure.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        Outcome {
            branch: self.branch.map(f),
            disposition: self.disposition,
        }
    }

    /// Chains an outcome producing step.
    ///
    /// On success the result is exactly what `f` returns, including its
    /// disposition. A failure keeps its error and disposition.
    pub fn bind<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self.branch {
            Ok(value) => f(value),
            Err(error) => Outcome::failure_with(error, self.disposition),
        }
    }

    /// Transforms the error. Successes pass through untouched.
    pub fn map_error<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        Outcome {
            branch: self.branch.map_err(f),
            disposition: self.disposition,
        }
    }

    /// Collapses both branches into one value, calling exactly one of the
    /// two functions.
    #[doc(alias = "match")]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self.branch {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }

    /// [`Outcome::map`] with an async transformation.
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.branch {
            Ok(value) => Outcome::success_with(f(value).await, self.disposition),
            Err(error) => Outcome::failure_with(error, self.disposition),
        }
    }

    /// [`Outcome::bind`] with an async step.
    pub async fn bind_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self.branch {
            Ok(value) => f(value).await,
            Err(error) => Outcome::failure_with(error, self.disposition),
        }
    }

    /// [`Outcome::map_error`] with an async transformation.
    pub async fn map_error_async<E2, F, Fut>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>,
    {
        match self.branch {
            Ok(value) => Outcome::success_with(value, self.disposition),
            Err(error) => Outcome::failure_with(f(error).await, self.disposition),
        }
    }

    /// [`Outcome::fold`] with async branch functions. Wrap a sync function
    /// in [`std::future::ready`] to mix the two.
    #[doc(alias = "match_async")]
    pub async fn fold_async<R, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(E) -> FFut,
        FFut: Future<Output = R>,
    {
        match self.branch {
            Ok(value) => on_success(value).await,
            Err(error) => on_failure(error).await,
        }
    }
}

impl<T, E> ApiOutcome for Outcome<T, E> {
    fn disposition(&self) -> Disposition {
        self.disposition
    }

    fn is_success(&self) -> bool {
        self.branch.is_ok()
    }
}

/// Tags `Ok(_)` with [`Disposition::Ok`] and `Err(_)` with [`Disposition::Error`].
impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.branch
    }
}
