//! Transient user-visible notifications
//!
//! Every recoverable failure (and every confirmed mutation) ends up here as
//! a short message. Notices expire after [`NOTICE_TTL`].

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a notice stays on screen
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Maximum number of notices kept at once
pub const MAX_NOTICES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub created_at: Instant,
}

/// Bounded queue of notices, newest last
#[derive(Debug, Default)]
pub struct Notifier {
    notices: VecDeque<Notice>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            NoticeLevel::Error => tracing::error!(notice = %message),
            NoticeLevel::Warning => tracing::warn!(notice = %message),
            NoticeLevel::Success | NoticeLevel::Info => tracing::info!(notice = %message),
        }

        if self.notices.len() == MAX_NOTICES {
            self.notices.pop_front();
        }
        self.notices.push_back(Notice {
            level,
            message,
            created_at: Instant::now(),
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Info, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message);
    }

    /// Drop notices older than the TTL
    pub fn expire(&mut self, now: Instant) {
        self.notices
            .retain(|n| now.saturating_duration_since(n.created_at) < NOTICE_TTL);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.back()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_bounded() {
        let mut notifier = Notifier::new();
        for i in 0..(MAX_NOTICES + 2) {
            notifier.info(format!("notice {i}"));
        }
        assert_eq!(notifier.len(), MAX_NOTICES);
        assert_eq!(notifier.iter().next().unwrap().message, "notice 2");
        assert_eq!(
            notifier.latest().unwrap().message,
            format!("notice {}", MAX_NOTICES + 1)
        );
    }

    #[test]
    fn test_expire() {
        let mut notifier = Notifier::new();
        notifier.error("Server error");
        notifier.expire(Instant::now());
        assert_eq!(notifier.len(), 1);

        notifier.expire(Instant::now() + NOTICE_TTL + Duration::from_millis(1));
        assert!(notifier.is_empty());
    }
}
