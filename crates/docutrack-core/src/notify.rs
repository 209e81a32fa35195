//! Notifications
//!
//! Toast queue. Each entry gets a monotonically increasing id so a timer can
//! dismiss exactly the toast it was started for.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast-success",
            NotificationKind::Error => "toast toast-error",
            NotificationKind::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications {
    next_id: u64,
    items: Vec<Notification>,
}

impl Notifications {
    /// Queue a notification and return its id
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut toasts = Notifications::default();
        let first = toasts.push(NotificationKind::Success, "Uploaded");
        let second = toasts.push(NotificationKind::Error, "Delete failed");
        assert_ne!(first, second);
        assert_eq!(toasts.items().len(), 2);

        toasts.dismiss(first);
        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.latest().map(|n| n.message.as_str()), Some("Delete failed"));

        // Dismissing twice is harmless
        toasts.dismiss(first);
        assert_eq!(toasts.items().len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut toasts = Notifications::default();
        let first = toasts.push(NotificationKind::Info, "a");
        toasts.clear();
        assert!(toasts.is_empty());
        let second = toasts.push(NotificationKind::Info, "b");
        assert!(second > first);
    }
}
