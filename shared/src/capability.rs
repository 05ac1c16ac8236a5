//! Side effects the submission flows depend on. The browser shell supplies
//! toast, router and timer backed implementations; tests supply recorders.

use std::time::Duration;

use futures::future::LocalBoxFuture;

use crate::error::OperationError;
use crate::routes::AuthRoute;

/// Transient user-facing notifications.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Client-side view transitions.
pub trait Navigator {
    fn navigate(&self, route: AuthRoute);
}

/// Fire-and-forget deferred execution. There is no cancellation hook.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// The asynchronous step behind a submission. Stands in for a remote call.
pub trait Operation {
    fn perform(&self) -> LocalBoxFuture<'_, Result<(), OperationError>>;
}
