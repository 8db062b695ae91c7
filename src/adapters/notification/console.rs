use crate::ports::notification_channel::{Notification, NotificationChannel, Result};
use chrono::{Local, NaiveTime};
use std::io::{self, Write};

/// Console notification channel
///
/// Writes one line per notification: `[HH:MM:SS] message | key: value | ...`.
/// Defaults to stdout; any writer can be supplied instead.
#[derive(Debug)]
pub struct ConsoleChannel<W = io::Stdout> {
    out: W,
}

impl ConsoleChannel<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ConsoleChannel<io::Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> ConsoleChannel<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Format a console line for the given wall-clock time
pub fn format_line(notification: &Notification, time: NaiveTime) -> String {
    let mut line = format!("[{}] {}", time.format("%H:%M:%S"), notification.message);
    if let Some(details) = notification.details_line() {
        line.push_str(" | ");
        line.push_str(&details);
    }
    line
}

impl<W: Write> NotificationChannel for ConsoleChannel<W> {
    fn name(&self) -> &str {
        "console"
    }

    fn send(&mut self, notification: &Notification) -> Result<()> {
        let line = format_line(notification, Local::now().time());
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }
}
