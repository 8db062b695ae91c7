use crate::domain::{Book, BookId, Loan, LoanId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 永続化層のエラー
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// 次に採番するID
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    #[serde(default)]
    pub book: BookId,
    #[serde(default)]
    pub loan: LoanId,
}

/// スナップショット - 永続化される状態全体
///
/// 書籍・貸出・両カウンタを一つの単位として読み書きする。
/// 欠けているフィールドは空リスト・初期カウンタとして扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub loans: Vec<Loan>,
    #[serde(default)]
    pub counters: Counters,
}

impl Snapshot {
    /// 空のスナップショット（両カウンタとも1）
    pub fn empty() -> Self {
        Self::default()
    }
}

/// カタログ永続化ポート
///
/// カタログサービスはこのトレイトにのみ依存し、具体的な保存先は知らない。
/// 実装はサービスのデータへの参照を保持してはならない。
/// 保存時は借用したスナップショットを書き出し、読込時は新しい値を返す。
pub trait CatalogRepository {
    /// スナップショット全体を保存する
    ///
    /// 呼び出し側から見て、以前のスナップショットは一度に置き換わる。
    /// 書きかけの状態が `load_all` で観測されることはない。
    fn save_all(&mut self, snapshot: &Snapshot) -> Result<()>;

    /// 最後に保存されたスナップショットを読み込む
    ///
    /// まだ存在しない場合や読めない場合は `None`。エラーは返さない。
    fn load_all(&self) -> Option<Snapshot>;

    /// 空のスナップショットに戻す
    fn clear(&mut self) -> Result<()>;
}
