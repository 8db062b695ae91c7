pub mod catalog_repository;
pub mod notification_channel;

pub use catalog_repository::{CatalogRepository, Counters, RepositoryError, Snapshot};
pub use notification_channel::{ChannelError, Notification, NotificationChannel, NotificationKind};
