use std::collections::HashSet;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::{ToastKind, ToastQueue};
use yew::prelude::*;

use crate::hooks::use_app_config;
use crate::services::{millis, ToastNotifier};

#[derive(Clone, Default, PartialEq)]
pub struct ToastState(ToastQueue);

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u64),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = self.0.clone();
        match action {
            ToastAction::Push(kind, message) => {
                queue.push(kind, message);
            }
            ToastAction::Dismiss(id) => {
                if !queue.dismiss(id) {
                    return self;
                }
            }
        }
        Rc::new(ToastState(queue))
    }
}

/// Forgets ids no longer on screen and returns the ids that still need an
/// auto-dismiss timer, marking them as scheduled.
fn newly_scheduled(scheduled: &mut HashSet<u64>, ids: &[u64]) -> Vec<u64> {
    scheduled.retain(|id| ids.contains(id));
    ids.iter().copied().filter(|id| scheduled.insert(*id)).collect()
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    #[prop_or_default]
    pub children: Html,
}

/// Provides the [`ToastNotifier`] context and renders the toast stack.
#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    let config = use_app_config();
    let max_visible = config.flow.max_visible_toasts;
    let state = use_reducer(move || ToastState(ToastQueue::new(max_visible)));
    let scheduled = use_mut_ref(HashSet::<u64>::new);
    let notifier = ToastNotifier::new(state.dispatcher());

    // Each toast gets exactly one auto-dismiss timer.
    {
        let dispatcher = state.dispatcher();
        let ids: Vec<u64> = state.0.iter().map(|t| t.id).collect();
        let duration = millis(config.flow.toast_duration());
        use_effect_with(ids, move |ids| {
            for id in newly_scheduled(&mut scheduled.borrow_mut(), ids) {
                let dispatcher = dispatcher.clone();
                Timeout::new(duration, move || {
                    dispatcher.dispatch(ToastAction::Dismiss(id));
                })
                .forget();
            }
            || ()
        });
    }

    html! {
        <ContextProvider<ToastNotifier> context={notifier}>
            { props.children.clone() }
            <ol class="toaster">
                { for state.0.iter().map(|toast| {
                    let on_close = {
                        let dispatcher = state.dispatcher();
                        let id = toast.id;
                        Callback::from(move |_: MouseEvent| {
                            dispatcher.dispatch(ToastAction::Dismiss(id));
                        })
                    };
                    html! {
                        <li key={toast.id} class={classes!("toast", format!("toast-{}", toast.kind.as_str()))} role="status">
                            <span class="toast-message">{ &toast.message }</span>
                            <button type="button" class="toast-close" aria-label="Fechar" onclick={on_close}>
                                { "×" }
                            </button>
                        </li>
                    }
                })}
            </ol>
        </ContextProvider<ToastNotifier>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(max_visible: usize) -> Rc<ToastState> {
        Rc::new(ToastState(ToastQueue::new(max_visible)))
    }

    fn messages(state: &ToastState) -> Vec<String> {
        state.0.iter().map(|t| t.message.clone()).collect()
    }

    fn ids(state: &ToastState) -> Vec<u64> {
        state.0.iter().map(|t| t.id).collect()
    }

    #[test]
    fn push_past_the_limit_drops_the_oldest() {
        let mut current = state(2);
        for message in ["one", "two", "three"] {
            current = current.reduce(ToastAction::Push(ToastKind::Success, message.to_string()));
        }
        assert_eq!(messages(&current), vec!["two", "three"]);
    }

    #[test]
    fn dismissing_a_live_toast_removes_it() {
        let current = state(3).reduce(ToastAction::Push(ToastKind::Error, "boom".to_string()));
        let id = ids(&current)[0];

        let next = current.clone().reduce(ToastAction::Dismiss(id));
        assert!(!Rc::ptr_eq(&current, &next));
        assert!(next.0.is_empty());
    }

    #[test]
    fn dismissing_a_missing_toast_keeps_the_same_state() {
        let current = state(3).reduce(ToastAction::Push(ToastKind::Success, "ok".to_string()));

        let next = current.clone().reduce(ToastAction::Dismiss(999));
        assert!(Rc::ptr_eq(&current, &next));
    }

    #[test]
    fn each_toast_is_scheduled_once() {
        let mut scheduled = HashSet::new();
        assert_eq!(newly_scheduled(&mut scheduled, &[1, 2]), vec![1, 2]);

        // Re-render with the same toasts plus a new one.
        assert_eq!(newly_scheduled(&mut scheduled, &[1, 2, 3]), vec![3]);
        assert!(newly_scheduled(&mut scheduled, &[1, 2, 3]).is_empty());
    }

    #[test]
    fn dismissed_ids_are_forgotten() {
        let mut scheduled = HashSet::new();
        newly_scheduled(&mut scheduled, &[1, 2]);
        newly_scheduled(&mut scheduled, &[2]);
        assert!(!scheduled.contains(&1));
        assert!(scheduled.contains(&2));
    }
}
