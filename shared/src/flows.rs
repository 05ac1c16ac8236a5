//! Sign-in and sign-up submission handlers.
//!
//! Both run after the form schema accepted the input. They report exactly one
//! outcome through the injected [`Notifier`] and never retry.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use log::{debug, info, warn};

use crate::capability::{Navigator, Notifier, Operation, Scheduler};
use crate::config::FlowConfig;
use crate::error::OperationError;
use crate::forms::{SignInForm, SignUpForm};
use crate::routes::AuthRoute;

pub mod messages {
    pub const SIGN_IN_SUCCESS: &str = "Login efetuado com sucesso!";
    pub const SIGN_IN_FAILURE: &str = "Erro ao efetuar login!";
    pub const PASSWORD_MISMATCH: &str = "As senhas não coincidem!";
    pub const SIGN_UP_SUCCESS: &str = "Solicitação enviada com sucesso!";
    pub const SIGN_UP_FAILURE: &str = "Erro ao enviar a solicitação!";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    SignedIn,
    Failed(OperationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// Request accepted; a redirect to sign-in is scheduled.
    Submitted,
    PasswordMismatch,
    Failed(OperationError),
}

/// The submission handlers with their collaborators injected.
#[derive(Clone)]
pub struct AuthFlows {
    notifier: Rc<dyn Notifier>,
    navigator: Rc<dyn Navigator>,
    scheduler: Rc<dyn Scheduler>,
    operation: Rc<dyn Operation>,
    redirect_delay: Duration,
}

impl fmt::Debug for AuthFlows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthFlows")
            .field("redirect_delay", &self.redirect_delay)
            .finish_non_exhaustive()
    }
}

impl AuthFlows {
    pub fn new(
        notifier: Rc<dyn Notifier>,
        navigator: Rc<dyn Navigator>,
        scheduler: Rc<dyn Scheduler>,
        operation: Rc<dyn Operation>,
        config: &FlowConfig,
    ) -> Self {
        Self {
            notifier,
            navigator,
            scheduler,
            operation,
            redirect_delay: config.redirect_delay(),
        }
    }

    pub async fn sign_in(&self, input: SignInForm) -> SignInOutcome {
        debug!("sign-in submitted for {}", input.email);

        match self.operation.perform().await {
            Ok(()) => {
                info!("sign-in accepted");
                self.notifier.success(messages::SIGN_IN_SUCCESS);
                SignInOutcome::SignedIn
            }
            Err(e) => {
                warn!("sign-in failed: {}", e);
                self.notifier.error(messages::SIGN_IN_FAILURE);
                SignInOutcome::Failed(e)
            }
        }
    }

    pub async fn sign_up(&self, input: SignUpForm) -> SignUpOutcome {
        if !input.passwords_match() {
            debug!("sign-up rejected for {}", input.email);
            warn!("sign-up rejected: passwords differ");
            self.notifier.error(messages::PASSWORD_MISMATCH);
            return SignUpOutcome::PasswordMismatch;
        }

        debug!(
            "sign-up submitted for {} ({})",
            input.email,
            input.department().map(|d| d.as_str()).unwrap_or("?")
        );

        match self.operation.perform().await {
            Ok(()) => {
                info!("sign-up request sent");
                self.notifier.success(messages::SIGN_UP_SUCCESS);

                let navigator = self.navigator.clone();
                self.scheduler.schedule(
                    self.redirect_delay,
                    Box::new(move || navigator.navigate(AuthRoute::SignIn)),
                );
                SignUpOutcome::Submitted
            }
            Err(e) => {
                warn!("sign-up failed: {}", e);
                self.notifier.error(messages::SIGN_UP_FAILURE);
                SignUpOutcome::Failed(e)
            }
        }
    }
}
