//! Transient one-line messages ("Hamarosan", save confirmations, errors).

/// Ticks a status line stays visible (about three seconds at 16ms).
pub const STATUS_TTL_TICKS: u64 = 190;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub kind: StatusKind,
    /// Tick after which the line is dropped
    pub expires_at: u64,
}

impl StatusLine {
    pub fn new(text: impl Into<String>, kind: StatusKind, now_tick: u64) -> Self {
        Self {
            text: text.into(),
            kind,
            expires_at: now_tick + STATUS_TTL_TICKS,
        }
    }

    pub fn is_expired(&self, tick: u64) -> bool {
        tick >= self.expires_at
    }
}
