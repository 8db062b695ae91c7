use crate::domain::{BookId, IdKind, LoanId, ValidationError};
use thiserror::Error;

/// エラーの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 入力の形式が不正
    ValidationRejected,
    /// 書籍または貸出が存在しない
    NotFound,
    /// 現在の状態では実行できない
    ConflictOfState,
}

/// カタログ操作のエラー
///
/// いずれも想定内の失敗であり、状態は一切変更されていない。
/// 永続化の失敗はここには含まれない（操作自体は成功扱い）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Book not found (id {0})")]
    BookNotFound(BookId),

    #[error("Book not available (id {0})")]
    BookNotAvailable(BookId),

    #[error("Loan not found (id {0})")]
    LoanNotFound(LoanId),

    #[error("Book already returned (loan {0})")]
    AlreadyReturned(LoanId),

    #[error("No more {0} ids available")]
    IdsExhausted(IdKind),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Validation(_) => ErrorKind::ValidationRejected,
            CatalogError::BookNotFound(_) | CatalogError::LoanNotFound(_) => ErrorKind::NotFound,
            CatalogError::BookNotAvailable(_)
            | CatalogError::AlreadyReturned(_)
            | CatalogError::IdsExhausted(_) => ErrorKind::ConflictOfState,
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CatalogError>;
