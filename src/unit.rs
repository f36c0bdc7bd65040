use std::future::Future;

use crate::{
    disposition::Disposition,
    outcome::{invalid_state, ApiOutcome, Outcome},
};

/// An outcome whose success carries no payload.
///
/// Unlike `Outcome<(), E>` there is nothing to read out of a success, so
/// success functions of the combinators take no argument.
///
/// [`UnitOutcome::bind`] differs from [`Outcome::bind`]: the chained step is
/// treated as a continuation of the same operation, and its result is
/// retagged with the original disposition.
///
/// ```rust
/// use routcome::{Disposition, UnitOutcome};
///
/// let outcome: UnitOutcome<String> = UnitOutcome::success()
///     .bind(|| UnitOutcome::success_with(Disposition::Created));
///
/// assert_eq!(outcome.disposition(), Disposition::Ok);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitOutcome<E> {
    branch: Result<(), E>,
    disposition: Disposition,
}

impl<E> UnitOutcome<E> {
    /// Success tagged [`Disposition::Ok`].
    pub fn success() -> Self {
        Self::success_with(Disposition::Ok)
    }

    pub fn success_with(disposition: Disposition) -> Self {
        Self {
            branch: Ok(()),
            disposition,
        }
    }

    /// Failure tagged [`Disposition::Error`].
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

    /// Asserts the success branch. There is no payload to return.
    ///
    /// # Panics
    ///
    /// Panics with `InvalidState` on a failure branch.
    #[track_caller]
    pub fn value(&self) {
        if self.branch.is_err() {
            invalid_state("value", "failure")
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
            Ok(()) => invalid_state("error", "success"),
            Err(error) => error,
        }
    }

    #[track_caller]
    pub fn into_error(self) -> E {
        match self.branch {
            Ok(()) => invalid_state("error", "success"),
            Err(error) => error,
        }
    }

    pub fn into_result(self) -> Result<(), E> {
        self.branch
    }

    /// Same branch and error, different tag.
    pub fn with_disposition(self, disposition: Disposition) -> Self {
        Self {
            branch: self.branch,
            disposition,
        }
    }

    /// Produces a payload on success. The disposition is kept.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce() -> U,
    {
        match self.branch {
            Ok(()) => Outcome::success_with(f(), self.disposition),
            Err(error) => Outcome::failure_with(error, self.disposition),
        }
    }

    /// Continues the same operation with another step. The step's branch is
    /// taken, but the disposition stays the one of `self`.
    pub fn bind<F>(self, f: F) -> UnitOutcome<E>
    where
        F: FnOnce() -> UnitOutcome<E>,
    {
        match self.branch {
            Ok(()) => f().with_disposition(self.disposition),
            Err(error) => UnitOutcome::failure_with(error, self.disposition),
        }
    }

    pub fn map_error<E2, F>(self, f: F) -> UnitOutcome<E2>
    where
        F: FnOnce(E) -> E2,
    {
        UnitOutcome {
            branch: self.branch.map_err(f),
            disposition: self.disposition,
        }
    }

    #[doc(alias = "match")]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce() -> R,
        F: FnOnce(E) -> R,
    {
        match self.branch {
            Ok(()) => on_success(),
            Err(error) => on_failure(error),
        }
    }

    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = U>,
    {
        match self.branch {
            Ok(()) => Outcome::success_with(f().await, self.disposition),
            Err(error) => Outcome::failure_with(error, self.disposition),
        }
    }

    /// [`UnitOutcome::bind`] with an async step, retagging the same way.
    pub async fn bind_async<F, Fut>(self, f: F) -> UnitOutcome<E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = UnitOutcome<E>>,
    {
        match self.branch {
            Ok(()) => f().await.with_disposition(self.disposition),
            Err(error) => UnitOutcome::failure_with(error, self.disposition),
        }
    }

    pub async fn map_error_async<E2, F, Fut>(self, f: F) -> UnitOutcome<E2>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>,
    {
        match self.branch {
            Ok(()) => UnitOutcome::success_with(self.disposition),
            Err(error) => UnitOutcome::failure_with(f(error).await, self.disposition),
        }
    }

    #[doc(alias = "match_async")]
    pub async fn fold_async<R, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce() -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(E) -> FFut,
        FFut: Future<Output = R>,
    {
        match self.branch {
            Ok(()) => on_success().await,
            Err(error) => on_failure(error).await,
        }
    }
}

impl<E> ApiOutcome for UnitOutcome<E> {
    fn disposition(&self) -> Disposition {
        self.disposition
    }

    fn is_success(&self) -> bool {
        self.branch.is_ok()
    }
}

impl<E> From<UnitOutcome<E>> for Outcome<(), E> {
    fn from(outcome: UnitOutcome<E>) -> Self {
        let disposition = outcome.disposition;
        match outcome.branch {
            Ok(()) => Outcome::success_with((), disposition),
            Err(error) => Outcome::failure_with(error, disposition),
        }
    }
}
