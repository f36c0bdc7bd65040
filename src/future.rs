//! Combinators over pending outcomes.
//!
//! Each method awaits the outcome first and then applies the combinator of
//! the same name, so a chain runs stage by stage in the order it is written.
//! Nothing is spawned and nothing is retried. Dropping the returned future
//! drops the inner one, so cancellation reaches the pending computation
//! unchanged.
//!
//! ```rust
//! use routcome::{Disposition, Outcome, OutcomeFutureExt};
//!
//! async fn load(id: u32) -> Outcome<u32, String> {
//!     Outcome::success_with(id, Disposition::OkWithContent)
//! }
//!
//! let outcome = futures_executor::block_on(
//!     load(20)
//!         .map_outcome(|v| v + 1)
//!         .map_outcome_async(|v| async move { v * 2 }),
//! );
//!
//! assert_eq!(*outcome.value(), 42);
//! ```

use std::future::Future;

use crate::{outcome::Outcome, unit::UnitOutcome};

/// Combinators for any future resolving to an [`Outcome`].
pub trait OutcomeFutureExt<T, E>: Future<Output = Outcome<T, E>> + Sized {
    fn map_outcome<U, F>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> U;

    fn bind_outcome<U, F>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Outcome<U, E>;

    fn map_outcome_error<E2, F>(self, f: F) -> impl Future<Output = Outcome<T, E2>>
    where
        F: FnOnce(E) -> E2;

    fn fold_outcome<R, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R;

    fn map_outcome_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>;

    fn bind_outcome_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>;

    fn map_outcome_error_async<E2, F, Fut>(self, f: F) -> impl Future<Output = Outcome<T, E2>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>;

    fn fold_outcome_async<R, S, SFut, F, FFut>(
        self,
        on_success: S,
        on_failure: F,
    ) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(E) -> FFut,
        FFut: Future<Output = R>;
}

impl<T, E, P> OutcomeFutureExt<T, E> for P
where
    P: Future<Output = Outcome<T, E>>,
{
    fn map_outcome<U, F>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(f) }
    }

    fn bind_outcome<U, F>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        async move { self.await.bind(f) }
    }

    fn map_outcome_error<E2, F>(self, f: F) -> impl Future<Output = Outcome<T, E2>>
    where
        F: FnOnce(E) -> E2,
    {
        async move { self.await.map_error(f) }
    }

    fn fold_outcome<R, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        async move { self.await.fold(on_success, on_failure) }
    }

    fn map_outcome_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(f).await }
    }

    fn bind_outcome_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        async move { self.await.bind_async(f).await }
    }

    fn map_outcome_error_async<E2, F, Fut>(self, f: F) -> impl Future<Output = Outcome<T, E2>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>,
    {
        async move { self.await.map_error_async(f).await }
    }

    fn fold_outcome_async<R, S, SFut, F, FFut>(
        self,
        on_success: S,
        on_failure: F,
    ) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(E) -> FFut,
        FFut: Future<Output = R>,
    {
        async move { self.await.fold_async(on_success, on_failure).await }
    }
}

/// Combinators for any future resolving to a [`UnitOutcome`].
///
/// `bind_outcome` and `bind_outcome_async` retag the step's result with the
/// awaited outcome's disposition, like [`UnitOutcome::bind`].
pub trait UnitOutcomeFutureExt<E>: Future<Output = UnitOutcome<E>> + Sized {
    fn map_outcome<U, F>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce() -> U;

    fn bind_outcome<F>(self, f: F) -> impl Future<Output = UnitOutcome<E>>
    where
        F: FnOnce() -> UnitOutcome<E>;

    fn map_outcome_error<E2, F>(self, f: F) -> impl Future<Output = UnitOutcome<E2>>
    where
        F: FnOnce(E) -> E2;

    fn fold_outcome<R, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: FnOnce() -> R,
        F: FnOnce(E) -> R;

    fn map_outcome_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = U>;

    fn bind_outcome_async<F, Fut>(self, f: F) -> impl Future<Output = UnitOutcome<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = UnitOutcome<E>>;

    fn map_outcome_error_async<E2, F, Fut>(self, f: F) -> impl Future<Output = UnitOutcome<E2>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>;

    fn fold_outcome_async<R, S, SFut, F, FFut>(
        self,
        on_success: S,
        on_failure: F,
    ) -> impl Future<Output = R>
    where
        S: FnOnce() -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(E) -> FFut,
        FFut: Future<Output = R>;
}

impl<E, P> UnitOutcomeFutureExt<E> for P
where
    P: Future<Output = UnitOutcome<E>>,
{
    fn map_outcome<U, F>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce() -> U,
    {
        async move { self.await.map(f) }
    }

    fn bind_outcome<F>(self, f: F) -> impl Future<Output = UnitOutcome<E>>
    where
        F: FnOnce() -> UnitOutcome<E>,
    {
        async move { self.await.bind(f) }
    }

    fn map_outcome_error<E2, F>(self, f: F) -> impl Future<Output = UnitOutcome<E2>>
    where
        F: FnOnce(E) -> E2,
    {
        async move { self.await.map_error(f) }
    }

    fn fold_outcome<R, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: FnOnce() -> R,
        F: FnOnce(E) -> R,
    {
        async move { self.await.fold(on_success, on_failure) }
    }

    fn map_outcome_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(f).await }
    }

    fn bind_outcome_async<F, Fut>(self, f: F) -> impl Future<Output = UnitOutcome<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = UnitOutcome<E>>,
    {
        async move { self.await.bind_async(f).await }
    }

    fn map_outcome_error_async<E2, F, Fut>(self, f: F) -> impl Future<Output = UnitOutcome<E2>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>,
    {
        async move { self.await.map_error_async(f).await }
    }

    fn fold_outcome_async<R, S, SFut, F, FFut>(
        self,
        on_success: S,
        on_failure: F,
    ) -> impl Future<Output = R>
    where
        S: FnOnce() -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(E) -> FFut,
        FFut: Future<Output = R>,
    {
        async move { self.await.fold_async(on_success, on_failure).await }
    }
}

#[cfg(test)]
mod tests {
    use futures_executor::block_on;
    use std::{
        cell::{Cell, RefCell},
        future::{pending, ready},
    };

    use crate::Disposition;

    mod outcome {
        use super::*;
        use crate::{Outcome, OutcomeFutureExt};
        use futures_util::FutureExt as _;
        use std::{
            future::{Future, Pending},
            pin::Pin,
            task::{Context, Poll},
        };

        type TestOutcome = Outcome<i32, String>;

        fn pending_success(
            v: i32,
            disposition: Disposition,
        ) -> impl std::future::Future<Output = TestOutcome> {
            async move { TestOutcome::success_with(v, disposition) }
        }

        fn pending_failure(
            e: &str,
            disposition: Disposition,
        ) -> impl std::future::Future<Output = TestOutcome> {
            let e = e.to_string();
            async move { TestOutcome::failure_with(e, disposition) }
        }

        #[test]
        fn test_matches_sync_combinators() {
            let f = |v: i32| v * 3;
            let g = |v: i32| Outcome::<i32, String>::success_with(v + 1, Disposition::Created);

            for disposition in [Disposition::Ok, Disposition::OkWithContent] {
                let sync = TestOutcome::success_with(2, disposition).map(f).bind(g);
                let awaited =
                    block_on(pending_success(2, disposition).map_outcome(f).bind_outcome(g));
                let async_fns = block_on(
                    pending_success(2, disposition)
                        .map_outcome_async(|v| ready(f(v)))
                        .bind_outcome_async(|v| ready(g(v))),
                );
                let ready_outcome = block_on(async {
                    TestOutcome::success_with(2, disposition)
                        .map_async(|v| ready(f(v)))
                        .await
                        .bind_async(|v| ready(g(v)))
                        .await
                });

                assert_eq!(awaited, sync);
                assert_eq!(async_fns, sync);
                assert_eq!(ready_outcome, sync);
            }

            let sync = TestOutcome::failure("err".into()).map(f).bind(g);
            let awaited = block_on(
                pending_failure("err", Disposition::Error)
                    .map_outcome(f)
                    .bind_outcome(g),
            );
            assert_eq!(awaited, sync);
        }

        #[test]
        fn test_failure_skips_async_functions() {
            let called = Cell::new(false);

            let outcome = block_on(
                pending_failure("err", Disposition::NotFound)
                    .map_outcome_async(|v| {
                        called.set(true);
                        ready(v + 1)
                    })
                    .bind_outcome_async(|v| {
                        called.set(true);
                        ready(TestOutcome::success(v))
                    }),
            );

            assert!(!called.get());
            assert_eq!(outcome.error(), "err");
            assert_eq!(outcome.disposition(), Disposition::NotFound);
        }

        #[test]
        fn test_map_error() {
            let outcome = block_on(
                pending_failure("err", Disposition::Invalid).map_outcome_error(|e| e.len()),
            );
            assert_eq!(*outcome.error(), 3);
            assert_eq!(outcome.disposition(), Disposition::Invalid);

            let outcome = block_on(
                pending_failure("err", Disposition::Invalid)
                    .map_outcome_error_async(|e| ready(e.len())),
            );
            assert_eq!(*outcome.error(), 3);

            let outcome = block_on(TestOutcome::success(1).map_error_async(|e| ready(e.len())));
            assert_eq!(*outcome.value(), 1);
        }

        #[test]
        fn test_fold() {
            let on_success = |v: i32| format!("ok: {}", v);
            let on_failure = |e: String| format!("fail: {}", e);

            assert_eq!(
                block_on(pending_success(1, Disposition::Ok).fold_outcome(on_success, on_failure)),
                "ok: 1"
            );
            assert_eq!(
                block_on(
                    pending_failure("err", Disposition::Error)
                        .fold_outcome_async(|v| ready(on_success(v)), |e| ready(on_failure(e)))
                ),
                "fail: err"
            );

            // one async branch and one sync branch
            let output = block_on(TestOutcome::success(5).fold_async(
                |v| async move { v * 2 },
                |_| ready(0),
            ));
            assert_eq!(output, 10);
        }

        #[test]
        fn test_stages_run_in_order() {
            let log = RefCell::new(Vec::new());

            let outcome = block_on(
                async {
                    log.borrow_mut().push("load");
                    TestOutcome::success(1)
                }
                .map_outcome_async(|v| {
                    log.borrow_mut().push("first");
                    async move { v + 1 }
                })
                .bind_outcome_async(|v| {
                    log.borrow_mut().push("second");
                    ready(TestOutcome::success(v * 10))
                })
                .map_outcome(|v| {
                    log.borrow_mut().push("third");
                    v
                }),
            );

            assert_eq!(*outcome.value(), 20);
            assert_eq!(*log.borrow(), vec!["load", "first", "second", "third"]);
        }

        /// Pending future that records when it is dropped.
        struct DropFlag<'a> {
            dropped: &'a Cell<bool>,
            inner: Pending<TestOutcome>,
        }

        impl Future for DropFlag<'_> {
            type Output = TestOutcome;

            fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
                Pin::new(&mut self.inner).poll(cx)
            }
        }

        impl Drop for DropFlag<'_> {
            fn drop(&mut self) {
                self.dropped.set(true);
            }
        }

        #[test]
        fn test_cancellation_passes_through() {
            let called = Cell::new(false);
            let dropped = Cell::new(false);

            let inner = DropFlag {
                dropped: &dropped,
                inner: pending(),
            };
            let mut chained = Box::pin(
                inner
                    .map_outcome(|v| {
                        called.set(true);
                        v
                    })
                    .bind_outcome_async(|v| {
                        called.set(true);
                        ready(TestOutcome::success(v))
                    }),
            );

            assert!(chained.as_mut().now_or_never().is_none());
            assert!(!dropped.get());

            drop(chained);
            assert!(dropped.get());
            assert!(!called.get());
        }
    }

    mod unit {
        use super::*;
        use crate::{UnitOutcome, UnitOutcomeFutureExt};

        type TestOutcome = UnitOutcome<String>;

        #[test]
        fn test_map() {
            let mapped = block_on(ready(TestOutcome::success()).map_outcome(|| 42));
            assert_eq!(*mapped.value(), 42);
            assert_eq!(mapped.disposition(), Disposition::Ok);

            let mapped =
                block_on(ready(TestOutcome::failure("err".into())).map_outcome_async(|| ready(42)));
            assert_eq!(mapped.error(), "err");
        }

        #[test]
        fn test_bind_keeps_original_disposition() {
            let bound = block_on(
                ready(TestOutcome::success_with(Disposition::Ok))
                    .bind_outcome(|| TestOutcome::success_with(Disposition::Created)),
            );
            assert_eq!(bound.disposition(), Disposition::Ok);

            let bound = block_on(
                ready(TestOutcome::success_with(Disposition::Ok))
                    .bind_outcome_async(|| ready(TestOutcome::success_with(Disposition::Created))),
            );
            assert_eq!(bound.disposition(), Disposition::Ok);

            let bound = block_on(
                TestOutcome::success_with(Disposition::NoContent)
                    .bind_async(|| ready(TestOutcome::failure("late".into()))),
            );
            assert_eq!(bound.error(), "late");
            assert_eq!(bound.disposition(), Disposition::NoContent);
        }

        #[test]
        fn test_bind_on_failure() {
            let called = Cell::new(false);

            let bound = block_on(ready(TestOutcome::failure("err".into())).bind_outcome_async(|| {
                called.set(true);
                ready(TestOutcome::success())
            }));

            assert!(!called.get());
            assert_eq!(bound.error(), "err");
        }

        #[test]
        fn test_map_error_and_fold() {
            let mapped = block_on(
                ready(TestOutcome::failure("err".into()))
                    .map_outcome_error_async(|e| ready(e.len())),
            );
            assert_eq!(*mapped.error(), 3);

            let mapped = block_on(ready(TestOutcome::success()).map_outcome_error(|e| e.len()));
            assert!(mapped.is_success());

            let output = block_on(
                ready(TestOutcome::failure("err".into()))
                    .fold_outcome(|| "ok".to_string(), |e| format!("fail: {}", e)),
            );
            assert_eq!(output, "fail: err");

            let output = block_on(
                ready(TestOutcome::success())
                    .fold_outcome_async(
                        || ready("ok".to_string()),
                        |e| ready(format!("fail: {}", e)),
                    ),
            );
            assert_eq!(output, "ok");
        }
    }
}
