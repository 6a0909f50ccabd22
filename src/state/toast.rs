//! Toast notification queue.
//!
//! DESIGN
//! ======
//! Pure queue state only; raising toasts from async flows and the
//! auto-dismiss timer live in `util::notify`, the toast host renders.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of currently visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Append a toast and return its id for later dismissal.
    pub fn push(&mut self, kind: ToastKind, message: String) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            kind,
            message,
        });
        id
    }

    /// Remove the toast with `id`; no-op if already dismissed.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
