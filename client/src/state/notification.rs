//! Toast notification queue with timed auto-dismiss.
//!
//! DESIGN
//! ======
//! The queue itself is plain data so tests can drive it directly. [`notify`]
//! is the reactive entry point: it pushes into the context signal and, in the
//! browser, arms a single timer per entry that removes it again.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use std::time::Duration;

use leptos::prelude::*;

/// How long a toast stays up unless told otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    /// CSS modifier used by the toast component.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
        }
    }
}

/// A single queued toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub message: String,
    /// `None` keeps the toast until dismissed.
    pub timeout: Option<Duration>,
}

/// Visible toasts in arrival order.
#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    pub items: Vec<Notification>,
}

impl NotificationState {
    /// Queue a toast and return its id. A zero timeout is treated as sticky.
    pub fn add(&mut self, kind: NotificationKind, message: impl Into<String>, timeout: Option<Duration>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        let timeout = timeout.filter(|t| !t.is_zero());
        self.items.push(Notification { id: id.clone(), kind, message: message.into(), timeout });
        id
    }

    /// Drop the toast with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|n| n.id != id);
    }

    pub fn success(&mut self, message: impl Into<String>) -> String {
        self.add(NotificationKind::Success, message, Some(DEFAULT_TIMEOUT))
    }

    pub fn error(&mut self, message: impl Into<String>) -> String {
        self.add(NotificationKind::Error, message, Some(DEFAULT_TIMEOUT))
    }

    pub fn info(&mut self, message: impl Into<String>) -> String {
        self.add(NotificationKind::Info, message, Some(DEFAULT_TIMEOUT))
    }

    pub fn warning(&mut self, message: impl Into<String>) -> String {
        self.add(NotificationKind::Warning, message, Some(DEFAULT_TIMEOUT))
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }
}

/// Push a toast with the default timeout and schedule its removal.
pub fn notify(state: RwSignal<NotificationState>, kind: NotificationKind, message: impl Into<String>) {
    notify_with_timeout(state, kind, message, Some(DEFAULT_TIMEOUT));
}

/// Push a toast and, when `timeout` is set, remove it once the timer fires.
pub fn notify_with_timeout(
    state: RwSignal<NotificationState>,
    kind: NotificationKind,
    message: impl Into<String>,
    timeout: Option<Duration>,
) {
    let mut id = String::new();
    let mut armed = None;
    state.update(|s| {
        id = s.add(kind, message, timeout);
        armed = s.get(&id).and_then(|n| n.timeout);
    });

    #[cfg(feature = "hydrate")]
    if let Some(delay) = armed {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            state.try_update(|s| s.remove(&id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, armed);
    }
}
