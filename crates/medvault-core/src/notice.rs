//! User-visible notices (the alert banner)

use crate::api::ApiError;

/// How long a notice stays on screen
pub const NOTICE_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NoticeKind::Success => "✓",
            NoticeKind::Error => "✗",
            NoticeKind::Info => "ℹ",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "alert alert-success show",
            NoticeKind::Error => "alert alert-error show",
            NoticeKind::Info => "alert alert-info show",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, message: message.into() }
    }

    /// `"{prefix}: {message}"`, e.g. `Error loading medicines: Database connection failed`
    pub fn from_error(prefix: &str, err: &ApiError) -> Self {
        Self::error(format!("{}: {}", prefix, err))
    }

    /// Success notice for a mutation, preferring the backend's own message
    pub fn from_message(message: Option<&str>, fallback: &str) -> Self {
        Self::success(message.filter(|m| !m.trim().is_empty()).unwrap_or(fallback))
    }
}
