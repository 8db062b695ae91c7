use crate::ports::notification_channel::{Notification, NotificationChannel, Result};
use chrono::{DateTime, Local, SecondsFormat, TimeZone};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Log file notification channel
///
/// Appends `<timestamp> | <KIND> | message | details: {...}` lines.
/// The file is opened in append mode for each notification and closed again.
#[derive(Debug, Clone)]
pub struct LogFileChannel {
    path: PathBuf,
}

impl LogFileChannel {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Format a log line for the given timestamp
pub fn format_line<Tz: TimeZone>(notification: &Notification, at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut line = format!(
        "{} | {} | {}",
        at.to_rfc3339_opts(SecondsFormat::Secs, false),
        notification.kind.as_str().to_uppercase(),
        notification.message
    );
    if !notification.details.is_empty() {
        let pairs: Vec<String> = notification
            .details
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect();
        line.push_str(&format!(" | details: {{{}}}", pairs.join(", ")));
    }
    line
}

impl NotificationChannel for LogFileChannel {
    fn name(&self) -> &str {
        "log_file"
    }

    fn send(&mut self, notification: &Notification) -> Result<()> {
        let line = format_line(notification, &Local::now());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
