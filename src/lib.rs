//! 書籍と貸出を管理する小さなカタログ
//!
//! - `domain`: エンティティ、値オブジェクト、イベント、入力検証
//! - `ports`: 永続化と通知チャネルの抽象
//! - `adapters`: メモリ / JSONファイルのリポジトリ、通知チャネル
//! - `application`: 検索エンジン、通知器、カタログサービス

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
