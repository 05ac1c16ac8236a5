use std::future::Future;
use std::rc::Rc;

use shared::{AuthFlows, FieldRef, FormController, FormSchema, SubmitResult};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::AppConfig;
use crate::services::{RouterNavigator, SimulatedOperation, TimeoutScheduler, ToastNotifier};

/// View-side handle to a [`FormController`]. Any change in the controller
/// re-renders the component that owns the hook.
pub struct UseFormHandle<F: FormSchema> {
    controller: Rc<FormController<F>>,
}

impl<F: FormSchema> Clone for UseFormHandle<F> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
        }
    }
}

impl<F: FormSchema> UseFormHandle<F> {
    pub fn value(&self, field: FieldRef<F>) -> String {
        self.controller.value(field)
    }

    pub fn error(&self, field: FieldRef<F>) -> Option<String> {
        self.controller.error(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.controller.is_submitting()
    }

    /// Input binding for one field.
    pub fn register(&self, field: FieldRef<F>) -> Callback<String> {
        let controller = self.controller.clone();
        Callback::from(move |value: String| controller.set(field, value))
    }

    /// Submit binding. `handler` only ever sees input the schema accepted.
    pub fn handle_submit<H, Fut>(&self, handler: H) -> Callback<SubmitEvent>
    where
        H: Fn(F) -> Fut + 'static,
        Fut: Future + 'static,
    {
        let controller = self.controller.clone();
        let handler = Rc::new(handler);
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let controller = controller.clone();
            let handler = handler.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match controller.submit(|values| handler(values)).await {
                    SubmitResult::Busy => log::debug!("submission already in flight"),
                    SubmitResult::Invalid(errors) => {
                        log::debug!("form has {} invalid field(s)", errors.len())
                    }
                    SubmitResult::Completed(_) => {}
                }
            });
        })
    }
}

#[hook]
pub fn use_form<F: FormSchema>() -> UseFormHandle<F> {
    let trigger = use_force_update();
    let controller = use_memo((), move |_| {
        let controller = FormController::<F>::default();
        controller.set_on_change(move || trigger.force_update());
        controller
    });
    UseFormHandle { controller }
}

#[hook]
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::from_env)
}

/// Sets the document title from the configured template.
#[hook]
pub fn use_title(page: &'static str) {
    let title = use_app_config().flow.title_for(page);
    use_effect_with(title, |title| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
        || ()
    });
}

/// The submission flows wired to the toaster, the router and browser timers.
#[hook]
pub fn use_auth_flows() -> AuthFlows {
    let config = use_app_config();
    let notifier = use_context::<ToastNotifier>().unwrap_or_default();
    let navigator = use_navigator();

    AuthFlows::new(
        Rc::new(notifier),
        Rc::new(RouterNavigator(navigator)),
        Rc::new(TimeoutScheduler),
        SimulatedOperation::new(config.flow.operation_latency()),
        &config.flow,
    )
}
