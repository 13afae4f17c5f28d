use std::time::Duration;
use tokio::time::Instant;

/// How long a success message stays visible.
pub const SUCCESS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// A success message that disappears on its own.
///
/// Showing a new message replaces the old one and restarts the window; the
/// windows never stack. Expiry is checked on read, so nothing has to run in
/// the background.
#[derive(Debug)]
pub struct FlashMessage {
    current: Option<(String, Instant)>,
    ttl: Duration,
}

impl FlashMessage {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    pub fn show(&mut self, message: impl Into<String>) {
        self.current = Some((message.into(), Instant::now() + self.ttl));
    }

    /// The message, if its window has not elapsed yet.
    pub fn current(&self) -> Option<&str> {
        match &self.current {
            Some((message, expires_at)) if Instant::now() < *expires_at => Some(message),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

impl Default for FlashMessage {
    fn default() -> Self {
        Self::new(SUCCESS_MESSAGE_TTL)
    }
}
