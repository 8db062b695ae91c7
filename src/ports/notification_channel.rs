use std::fmt;
use thiserror::Error;

/// 通知チャネルのエラー
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("Channel I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Channel rejected notification: {0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, ChannelError>;

/// 通知の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    LoanMade,
    BookReturned,
    BookAdded,
    BookAvailable,
    ReturnReminder,
    SystemError,
}

impl NotificationKind {
    /// 安定した文字列コード（ログ出力用）
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::LoanMade => "loan_made",
            NotificationKind::BookReturned => "book_returned",
            NotificationKind::BookAdded => "book_added",
            NotificationKind::BookAvailable => "book_available",
            NotificationKind::ReturnReminder => "return_reminder",
            NotificationKind::SystemError => "system_error",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// チャネルに配信される通知
///
/// `details` は挿入順を保持したキーと値の組。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub details: Vec<(&'static str, String)>,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn with_detail(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.details.push((key, value.into()));
        self
    }

    /// `key: value | key: value` 形式の詳細文字列
    pub fn details_line(&self) -> Option<String> {
        if self.details.is_empty() {
            return None;
        }
        let parts: Vec<String> = self
            .details
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect();
        Some(parts.join(" | "))
    }
}

/// 通知チャネルポート
///
/// コンソール、ログファイルなどの出力先を抽象化する。
pub trait NotificationChannel {
    /// チャネル名。`Notifier::remove_channel` で使われる
    fn name(&self) -> &str;

    /// 通知を送信する
    fn send(&mut self, notification: &Notification) -> Result<()>;
}
