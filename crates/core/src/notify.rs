//! Toast notifications.
//!
//! The queue only tracks what is visible; the browser side schedules the
//! auto-dismiss timer for each pushed toast.

pub const TOAST_LIFETIME_MS: u32 = 4_000;
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    pub fn class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast success",
            ToastLevel::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    pub description: Option<String>,
}

/// A toast before it has been assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastSpec {
    pub level: ToastLevel,
    pub message: String,
    pub description: Option<String>,
}

impl ToastSpec {
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            description: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, message)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct ToastQueue {
    next_id: u64,
    max_visible: usize,
    toasts: Vec<Toast>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(MAX_VISIBLE)
    }
}

impl ToastQueue {
    pub fn new(max_visible: usize) -> Self {
        Self {
            next_id: 1,
            max_visible: max_visible.max(1),
            toasts: Vec::new(),
        }
    }

    /// Push a toast and return its id. The oldest toast is dropped once more
    /// than `max_visible` are showing.
    pub fn push(&mut self, spec: ToastSpec) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            level: spec.level,
            message: spec.message,
            description: spec.description,
        });
        if self.toasts.len() > self.max_visible {
            let excess = self.toasts.len() - self.max_visible;
            self.toasts.drain(..excess);
        }
        id
    }

    /// Returns whether a toast was removed.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_and_oldest_drops() {
        let mut q = ToastQueue::new(2);
        let a = q.push(ToastSpec::success("a"));
        let b = q.push(ToastSpec::success("b"));
        let c = q.push(ToastSpec::error("c"));
        assert!(a < b && b < c);

        let ids: Vec<u64> = q.visible().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![b, c]);
        assert_eq!(q.visible()[1].level, ToastLevel::Error);
    }

    #[test]
    fn dismiss_removes_only_matching() {
        let mut q = ToastQueue::default();
        let a = q.push(ToastSpec::success("a").with_description("details"));
        let b = q.push(ToastSpec::success("b"));
        assert!(q.dismiss(a));
        assert!(!q.dismiss(a));
        assert_eq!(q.visible().len(), 1);
        assert_eq!(q.visible()[0].id, b);
        assert!(q.dismiss(b));
        assert!(q.is_empty());

        // Ids are never reused.
        assert!(q.push(ToastSpec::success("c")) > b);
    }

    #[test]
    fn level_classes() {
        assert_eq!(ToastSpec::success("ok").level.class(), "toast success");
        assert_eq!(ToastSpec::error("no").level.class(), "toast error");
    }
}
