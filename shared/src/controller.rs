//! Form state shared between the input bindings and the submit handler.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use log::debug;

use crate::error::FieldErrors;
use crate::forms::{FieldRef, FormSchema};

/// Result of asking a [`FormController`] to submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitResult<T> {
    /// A previous submission is still in flight; the handler was not called.
    Busy,
    /// The schema rejected the current values; the handler was not called.
    Invalid(FieldErrors),
    /// The handler ran to completion.
    Completed(T),
}

impl<T> SubmitResult<T> {
    pub fn completed(self) -> Option<T> {
        match self {
            SubmitResult::Completed(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// Current values, field errors and the in-flight flag of one form.
///
/// All methods take `&self`; the controller is meant to be shared behind an
/// `Rc` between input callbacks and the submit task.
pub struct FormController<F: FormSchema> {
    values: RefCell<F>,
    errors: RefCell<FieldErrors>,
    submitting: Cell<bool>,
    on_change: RefCell<Option<Rc<dyn Fn()>>>,
}

impl<F: FormSchema> Default for FormController<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F: FormSchema> FormController<F> {
    pub fn new(values: F) -> Self {
        Self {
            values: RefCell::new(values),
            errors: RefCell::new(FieldErrors::new()),
            submitting: Cell::new(false),
            on_change: RefCell::new(None),
        }
    }

    /// Registers a listener called after every state change visible to a view.
    pub fn set_on_change(&self, listener: impl Fn() + 'static) {
        *self.on_change.borrow_mut() = Some(Rc::new(listener));
    }

    fn changed(&self) {
        let listener = self.on_change.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }

    pub fn values(&self) -> F {
        self.values.borrow().clone()
    }

    pub fn value(&self, field: FieldRef<F>) -> String {
        field.get(&self.values.borrow()).to_string()
    }

    /// Stores a keystroke. Clears any error shown for that field.
    pub fn set(&self, field: FieldRef<F>, value: impl Into<String>) {
        field.set(&mut self.values.borrow_mut(), value.into());
        self.errors.borrow_mut().remove(field.name);
        self.changed();
    }

    pub fn errors(&self) -> FieldErrors {
        self.errors.borrow().clone()
    }

    pub fn error(&self, field: FieldRef<F>) -> Option<String> {
        self.errors.borrow().get(field.name).map(str::to_string)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    /// Validates the current values and, if they pass, runs `handler` with a
    /// snapshot of them. The in-flight flag stays set until the handler's
    /// future completes or is dropped.
    pub async fn submit<H, Fut, T>(&self, handler: H) -> SubmitResult<T>
    where
        H: FnOnce(F) -> Fut,
        Fut: Future<Output = T>,
    {
        if self.submitting.get() {
            debug!("submit ignored: submission already in flight");
            return SubmitResult::Busy;
        }

        let values = self.values();
        if let Err(errors) = values.check() {
            debug!("submit rejected: {} invalid field(s)", errors.len());
            *self.errors.borrow_mut() = errors.clone();
            self.changed();
            return SubmitResult::Invalid(errors);
        }

        *self.errors.borrow_mut() = FieldErrors::new();
        let _in_flight = InFlight::begin(self);
        SubmitResult::Completed(handler(values).await)
    }
}

struct InFlight<'a, F: FormSchema> {
    form: &'a FormController<F>,
}

impl<'a, F: FormSchema> InFlight<'a, F> {
    fn begin(form: &'a FormController<F>) -> Self {
        form.submitting.set(true);
        form.changed();
        Self { form }
    }
}

impl<F: FormSchema> Drop for InFlight<'_, F> {
    fn drop(&mut self) {
        self.form.submitting.set(false);
        self.form.changed();
    }
}
