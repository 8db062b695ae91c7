use crate::adapters::notification::{ConsoleChannel, LogFileChannel};
use crate::ports::{Notification, NotificationChannel, NotificationKind};
use std::fmt;
use std::path::PathBuf;

/// 通知の配信（ベストエフォートのファンアウト）
///
/// 所有するすべてのチャネルへ順に配信する。チャネルの失敗はログに残すだけで、
/// 呼び出し側にエラーを返すことはない。グローバルな登録先は持たず、
/// チャネルの追加・削除はこのインスタンスに対して明示的に行う。
pub struct Notifier {
    channels: Vec<Box<dyn NotificationChannel>>,
    enabled: bool,
}

impl Notifier {
    /// チャネルを持たない通知器
    pub fn new() -> Self {
        Self {
            channels: Vec::new(),
            enabled: true,
        }
    }

    /// 既定のチャネル構成（コンソール + ログファイル）
    pub fn with_default_channels(log_path: impl Into<PathBuf>) -> Self {
        let mut notifier = Self::new();
        notifier.add_channel(ConsoleChannel::stdout());
        notifier.add_channel(LogFileChannel::new(log_path));
        notifier
    }

    pub fn add_channel(&mut self, channel: impl NotificationChannel + 'static) {
        self.channels.push(Box::new(channel));
    }

    /// 名前が一致する最初のチャネルを取り除く
    pub fn remove_channel(&mut self, name: &str) -> bool {
        match self.channels.iter().position(|c| c.name() == name) {
            Some(index) => {
                self.channels.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn channel_names(&self) -> Vec<&str> {
        self.channels.iter().map(|c| c.name()).collect()
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// 無効化中の `notify` は何も配信せず `false` を返す
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// 通知を全チャネルへ配信する
    ///
    /// # 戻り値
    /// 少なくとも1つのチャネルが受け付けた場合は `true`
    pub fn notify(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        details: Vec<(&'static str, String)>,
    ) -> bool {
        let notification = Notification {
            kind,
            message: message.into(),
            details,
        };
        self.dispatch(&notification)
    }

    fn dispatch(&mut self, notification: &Notification) -> bool {
        if !self.enabled {
            return false;
        }

        let mut delivered = 0;
        for channel in &mut self.channels {
            match channel.send(notification) {
                Ok(()) => delivered += 1,
                Err(e) => tracing::warn!(
                    channel = channel.name(),
                    kind = notification.kind.as_str(),
                    "Notification delivery failed: {}",
                    e
                ),
            }
        }

        delivered > 0
    }

    // ------------------------------------------------------------------
    // 種類別の通知
    // ------------------------------------------------------------------

    pub fn notify_book_added(&mut self, title: &str, author: &str) -> bool {
        let notification = Notification::new(
            NotificationKind::BookAdded,
            format!("New book added: '{title}' by {author}"),
        )
        .with_detail("title", title)
        .with_detail("author", author)
        .with_detail("action", "add_book");
        self.dispatch(&notification)
    }

    pub fn notify_loan_made(&mut self, user: &str, book_title: &str, date: &str) -> bool {
        let notification =
            Notification::new(NotificationKind::LoanMade, format!("Loan made to {user}"))
                .with_detail("user", user)
                .with_detail("book", book_title)
                .with_detail("date", date)
                .with_detail("action", "loan");
        self.dispatch(&notification)
    }

    pub fn notify_book_returned(&mut self, user: &str, book_title: &str) -> bool {
        let notification = Notification::new(
            NotificationKind::BookReturned,
            format!("Book '{book_title}' returned by {user}"),
        )
        .with_detail("user", user)
        .with_detail("book", book_title)
        .with_detail("action", "return");
        self.dispatch(&notification)
    }

    pub fn notify_book_available(&mut self, title: &str) -> bool {
        let notification = Notification::new(
            NotificationKind::BookAvailable,
            format!("Book available: '{title}'"),
        )
        .with_detail("book", title)
        .with_detail("action", "available");
        self.dispatch(&notification)
    }

    /// 返却期限が近い貸出の利用者への催促
    pub fn notify_return_reminder(&mut self, user: &str, book_title: &str, loan_date: &str) -> bool {
        let notification = Notification::new(
            NotificationKind::ReturnReminder,
            format!("Reminder: please return '{book_title}'"),
        )
        .with_detail("user", user)
        .with_detail("book", book_title)
        .with_detail("date", loan_date)
        .with_detail("action", "reminder");
        self.dispatch(&notification)
    }

    pub fn notify_error(&mut self, error_type: &str, details: &str) -> bool {
        let notification = Notification::new(
            NotificationKind::SystemError,
            format!("System error: {error_type}"),
        )
        .with_detail("error_type", error_type)
        .with_detail("details", details)
        .with_detail("action", "error");
        self.dispatch(&notification)
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("channels", &self.channel_names())
            .field("enabled", &self.enabled)
            .finish()
    }
}
