//! Cancellable delayed actions over an injectable clock.
//!
//! The contact form uses these to simulate message delivery and to hide the
//! success panel again. The browser supplies a timer-backed [`Clock`]; tests
//! use [`ImmediateClock`].

use futures_util::future::{self, AbortHandle, Abortable, FutureExt};
pub use futures_util::future::LocalBoxFuture;
use std::time::Duration;

pub trait Clock {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Clock whose sleeps complete at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateClock;

impl Clock for ImmediateClock {
    fn sleep(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
        future::ready(()).boxed_local()
    }
}

/// Keeps a [`delayed`] action alive. Dropping the guard cancels the action if
/// it has not run yet.
#[must_use = "dropping the guard cancels the delayed action"]
#[derive(Debug)]
pub struct DelayGuard {
    handle: AbortHandle,
}

impl DelayGuard {
    pub fn cancel(self) {}
}

impl Drop for DelayGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Runs `action` after `duration` on `clock`.
///
/// The returned future resolves to `Some(output)` once the action ran, or to
/// `None` when the guard was dropped first.
pub fn delayed<C, F, T>(
    clock: &C,
    duration: Duration,
    action: F,
) -> (LocalBoxFuture<'static, Option<T>>, DelayGuard)
where
    C: Clock + ?Sized,
    F: FnOnce() -> T + 'static,
    T: 'static,
{
    let sleep = clock.sleep(duration);
    let (handle, registration) = AbortHandle::new_pair();
    let task = Abortable::new(
        async move {
            sleep.await;
            action()
        },
        registration,
    );
    (task.map(Result::ok).boxed_local(), DelayGuard { handle })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct NeverClock;

    impl Clock for NeverClock {
        fn sleep(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
            future::pending().boxed_local()
        }
    }

    #[tokio::test]
    async fn action_runs_after_sleep() {
        let (task, _guard) = delayed(&ImmediateClock, Duration::from_millis(1500), || 42);
        assert_eq!(task.await, Some(42));
    }

    #[tokio::test]
    async fn dropping_guard_cancels_action() {
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        let (task, guard) = delayed(&ImmediateClock, Duration::from_millis(3000), move || {
            flag.set(true)
        });
        drop(guard);
        assert_eq!(task.await, None);
        assert!(!ran.get());
    }

    #[tokio::test]
    async fn cancel_stops_a_pending_sleep() {
        let (task, guard) = delayed(&NeverClock, Duration::from_secs(60), || ());
        guard.cancel();
        assert_eq!(task.await, None);
    }
}
