//! Browser-backed implementations of the flow capabilities.

use std::rc::Rc;
use std::time::Duration;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_timers::callback::Timeout;
use shared::{AuthRoute, Navigator, Notifier, Operation, OperationError, Scheduler, ToastKind};
use yew::functional::UseReducerDispatcher;
use yew_router::prelude::Navigator as RouterHandle;

use crate::components::toaster::{ToastAction, ToastState};
use crate::Route;

pub fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// Pushes toasts into the toaster. Without a toaster it only logs.
#[derive(Clone, Default, PartialEq)]
pub struct ToastNotifier {
    dispatcher: Option<UseReducerDispatcher<ToastState>>,
}

impl ToastNotifier {
    pub fn new(dispatcher: UseReducerDispatcher<ToastState>) -> Self {
        Self {
            dispatcher: Some(dispatcher),
        }
    }

    fn push(&self, kind: ToastKind, message: &str) {
        match &self.dispatcher {
            Some(dispatcher) => dispatcher.dispatch(ToastAction::Push(kind, message.to_string())),
            None => log::warn!("no toaster mounted, dropping {} toast: {}", kind.as_str(), message),
        }
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(ToastKind::Error, message);
    }
}

/// Client-side navigation through yew-router, falling back to a full page
/// load when rendered outside a router.
pub struct RouterNavigator(pub Option<RouterHandle>);

impl Navigator for RouterNavigator {
    fn navigate(&self, route: AuthRoute) {
        log::debug!("navigating to {}", route.path());
        match &self.0 {
            Some(router) => router.push(&Route::from(route)),
            None => {
                if let Some(w) = web_sys::window() {
                    if let Err(e) = w.location().set_href(route.path()) {
                        log::warn!("failed to navigate to {}: {:?}", route.path(), e);
                    }
                }
            }
        }
    }
}

pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        Timeout::new(millis(delay), task).forget();
    }
}

/// Placeholder for the remote authentication call: waits, then succeeds.
pub struct SimulatedOperation {
    latency: Duration,
}

impl SimulatedOperation {
    pub fn new(latency: Duration) -> Rc<Self> {
        Rc::new(Self { latency })
    }
}

impl Operation for SimulatedOperation {
    fn perform(&self) -> LocalBoxFuture<'_, Result<(), OperationError>> {
        let latency = self.latency;
        async move {
            gloo_timers::future::sleep(latency).await;
            Ok(())
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_saturates() {
        assert_eq!(millis(Duration::from_millis(2200)), 2200);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
