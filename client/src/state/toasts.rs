//! Toast stack state.
//!
//! DESIGN
//! ======
//! Notices from the workbench become toasts with a monotonically increasing
//! id. Dismissal is by id so a late auto-dismiss timer never removes a newer
//! toast.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use sitegen::{Notice, NoticeLevel};

/// How long a toast stays up before dismissing itself.
pub const TOAST_DISMISS_MS: u64 = 4_000;

/// Upper bound on visible toasts; the oldest is dropped first.
pub const MAX_TOASTS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

impl Toast {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Validation => "toast toast--warning",
            NoticeLevel::Failure => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastState {
    /// Show `notice`; returns the new toast's id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, level: notice.level, message: notice.message });
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..excess);
        }
        id
    }

    /// Remove the toast with `id`, if it is still showing.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}
