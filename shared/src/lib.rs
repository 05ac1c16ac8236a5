//! Target-independent core of the comando.hub panel: form schemas, the form
//! controller, the sign-in/sign-up submission flows and the capabilities
//! those flows are written against.

pub mod capability;
pub mod config;
pub mod controller;
pub mod error;
pub mod flows;
pub mod forms;
pub mod notify;
pub mod routes;
pub mod visibility;

pub use capability::{Navigator, Notifier, Operation, Scheduler};
pub use config::FlowConfig;
pub use controller::{FormController, SubmitResult};
pub use error::{FieldErrors, OperationError};
pub use flows::{AuthFlows, SignInOutcome, SignUpOutcome};
pub use forms::{Department, FieldRef, FormSchema, SignInForm, SignUpForm};
pub use notify::{Toast, ToastKind, ToastQueue};
pub use routes::AuthRoute;
pub use visibility::PasswordVisibility;
