//! Alert and confirmation boundary.
//!
//! The controller never renders anything itself; it hands alerts and
//! confirmation requests to a [`NotificationPort`].

use async_trait::async_trait;
use std::fmt;

/// Severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AlertKind::Success => "success",
            AlertKind::Error => "error",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
        };
        f.write_str(label)
    }
}

/// The user's answer to a confirmation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
    /// Closed without picking either button
    Dismissed,
}

impl Confirmation {
    pub fn is_confirmed(self) -> bool {
        self == Confirmation::Confirmed
    }
}

#[async_trait]
pub trait NotificationPort: Send + Sync {
    async fn alert(&self, kind: AlertKind, title: &str, message: &str);

    /// Ask a two-choice question and wait for the answer.
    async fn confirm(&self, title: &str, message: &str) -> Confirmation;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_kind_display() {
        assert_eq!(AlertKind::Success.to_string(), "success");
        assert_eq!(AlertKind::Error.to_string(), "error");
        assert_eq!(AlertKind::Warning.to_string(), "warning");
        assert_eq!(AlertKind::Info.to_string(), "info");
    }

    #[test]
    fn test_only_confirmed_is_confirmed() {
        assert!(Confirmation::Confirmed.is_confirmed());
        assert!(!Confirmation::Cancelled.is_confirmed());
        assert!(!Confirmation::Dismissed.is_confirmed());
    }
}
