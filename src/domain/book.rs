use serde::{Deserialize, Serialize};

use super::BookId;

/// 書籍エンティティ
///
/// 振る舞いを持たないデータ構造。`available` の更新は
/// カタログサービスの貸出・返却操作からのみ行われる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl Book {
    /// 新規登録された書籍は貸出可能な状態で作成される
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            available: true,
        }
    }
}
