#![allow(dead_code)]

use rusty_library_catalog::adapters::memory::InMemoryCatalogRepository;
use rusty_library_catalog::application::{
    CatalogDependencies, CatalogService, Notifier, SearchEngine,
};
use rusty_library_catalog::domain::Validator;
use rusty_library_catalog::ports::catalog_repository::Result as RepositoryResult;
use rusty_library_catalog::ports::notification_channel::Result as ChannelResult;
use rusty_library_catalog::ports::*;
use std::cell::RefCell;
use std::rc::Rc;

pub type Seen = Rc<RefCell<Vec<Notification>>>;

/// 受け取った通知を記録するチャネル
pub struct RecordingChannel {
    seen: Seen,
}

impl NotificationChannel for RecordingChannel {
    fn name(&self) -> &str {
        "recording"
    }

    fn send(&mut self, notification: &Notification) -> ChannelResult<()> {
        self.seen.borrow_mut().push(notification.clone());
        Ok(())
    }
}

/// 常に保存に失敗するリポジトリ
///
/// `initial` があれば読込時に返す。
pub struct FailingRepository {
    pub initial: Option<Snapshot>,
}

impl CatalogRepository for FailingRepository {
    fn save_all(&mut self, _snapshot: &Snapshot) -> RepositoryResult<()> {
        Err(RepositoryError::Io(std::io::Error::other("disk full")))
    }

    fn load_all(&self) -> Option<Snapshot> {
        self.initial.clone()
    }

    fn clear(&mut self) -> RepositoryResult<()> {
        Err(RepositoryError::Io(std::io::Error::other("disk full")))
    }
}

/// 記録用チャネルのみを持つ通知器と、その記録
pub fn recording_notifier() -> (Notifier, Seen) {
    let seen: Seen = Rc::new(RefCell::new(Vec::new()));
    let mut notifier = Notifier::new();
    notifier.add_channel(RecordingChannel {
        seen: Rc::clone(&seen),
    });
    (notifier, seen)
}

/// 任意のリポジトリでサービスを組み立てる
pub fn service_with(repository: Box<dyn CatalogRepository>) -> (CatalogService, Seen) {
    let (notifier, seen) = recording_notifier();
    let service = CatalogService::new(CatalogDependencies {
        search_engine: SearchEngine::new(),
        validator: Validator::new(),
        repository,
        notifier,
    });
    (service, seen)
}

/// インメモリリポジトリでサービスを組み立てる
pub fn memory_service() -> (CatalogService, Seen) {
    service_with(Box::new(InMemoryCatalogRepository::new()))
}

/// 授業用の3冊を登録する
pub fn add_sample_books(service: &mut CatalogService) {
    service
        .add_book("Cien Años de Soledad", "Gabriel Garcia Marquez", "9780060883287")
        .unwrap();
    service
        .add_book("El Principito", "Antoine de Saint-Exupery", "9780156012195")
        .unwrap();
    service
        .add_book("1984", "George Orwell", "9780451524935")
        .unwrap();
}

pub fn kinds(seen: &Seen) -> Vec<NotificationKind> {
    seen.borrow().iter().map(|n| n.kind).collect()
}
