use crate::ports::notification_channel::{Notification, NotificationChannel, NotificationKind, Result};

/// Notification channel that forwards to the `tracing` subscriber
///
/// System errors are emitted at `error` level, everything else at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingChannel;

impl TracingChannel {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationChannel for TracingChannel {
    fn name(&self) -> &str {
        "tracing"
    }

    fn send(&mut self, notification: &Notification) -> Result<()> {
        let details = notification.details_line().unwrap_or_default();
        match notification.kind {
            NotificationKind::SystemError => tracing::error!(
                kind = notification.kind.as_str(),
                details = %details,
                "{}",
                notification.message
            ),
            _ => tracing::info!(
                kind = notification.kind.as_str(),
                details = %details,
                "{}",
                notification.message
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_accepts() {
        let mut channel = TracingChannel::new();
        let n = Notification::new(NotificationKind::SystemError, "System error: Persistence");
        assert!(channel.send(&n).is_ok());
        assert_eq!(channel.name(), "tracing");
    }
}
