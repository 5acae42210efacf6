//! Transient toast notifications.
//!
//! Every failed or completed network operation pushes one notice here;
//! the toast host renders them and auto-dismisses after
//! [`TOAST_DISMISS_MS`]. Transport and server errors are not
//! distinguished to the user.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// How long a toast stays visible before auto-dismissing.
pub const TOAST_DISMISS_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One visible toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

/// Queue of visible toasts, newest last.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NotificationsState {
    /// Push a toast and return its id for dismissal scheduling.
    pub fn push(&mut self, kind: NoticeKind, title: &str, message: &str) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice {
            id,
            kind,
            title: title.to_owned(),
            message: message.to_owned(),
        });
        id
    }

    pub fn success(&mut self, title: &str, message: &str) -> u64 {
        self.push(NoticeKind::Success, title, message)
    }

    pub fn error(&mut self, title: &str, message: &str) -> u64 {
        self.push(NoticeKind::Error, title, message)
    }

    /// Remove one toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}
