use thiserror::Error;

use super::IdKind;

/// 検証対象のフィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Isbn,
    User,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Isbn => "ISBN",
            Field::User => "user name",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 入力検証のエラー
///
/// メッセージはそのまま利用者に返される。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 前後の空白を除いた文字数が下限に満たない（空文字列を含む）
    #[error("Invalid {field} - must have at least {min} characters")]
    TooShort { field: Field, min: usize },

    /// ISBNにハイフン・空白以外の記号が含まれる
    #[error("Invalid ISBN - must contain only digits, letters and hyphens")]
    InvalidIsbnCharacters,

    /// IDが0以下
    #[error("Invalid {kind} ID - must be greater than 0")]
    NonPositiveId { kind: IdKind, id: i64 },
}
