//! Local UI chrome state (theme, toasts).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the per-page list state so
//! any page can raise a toast without knowing who renders it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visual tone of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "toast toast--info",
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// UI chrome shared through context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub dark_mode: bool,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

/// Toasts beyond this many drop the oldest.
pub const MAX_TOASTS: usize = 4;

impl UiState {
    /// Queue a toast and return its id for later dismissal.
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.push(Toast { id, kind, message: message.into() });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
