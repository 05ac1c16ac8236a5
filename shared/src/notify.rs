use std::collections::VecDeque;

use crate::config::DEFAULT_MAX_VISIBLE_TOASTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toasts currently on screen, oldest first. Bounded: pushing past the
/// limit drops the oldest toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
    max_visible: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VISIBLE_TOASTS)
    }
}

impl ToastQueue {
    pub fn new(max_visible: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 1,
            max_visible: max_visible.max(1),
        }
    }

    /// Adds a toast and returns its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id,
            kind,
            message: message.into(),
        });
        while self.toasts.len() > self.max_visible {
            self.toasts.pop_front();
        }
        id
    }

    /// Removes the toast with `id`. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "one");
        let b = queue.push(ToastKind::Error, "two");
        assert!(b > a);
        let kinds: Vec<_> = queue.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![ToastKind::Success, ToastKind::Error]);
    }

    #[test]
    fn oldest_toast_is_dropped_past_the_limit() {
        let mut queue = ToastQueue::new(2);
        queue.push(ToastKind::Success, "one");
        queue.push(ToastKind::Success, "two");
        queue.push(ToastKind::Error, "three");
        let messages: Vec<_> = queue.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn dismiss_removes_once() {
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastKind::Error, "boom");
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }
}
