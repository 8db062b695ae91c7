use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BookId, LoanId};

/// 貸出エンティティ - 1冊の書籍の1回の貸出
///
/// `returned` は返却時に一度だけ `true` になり、元に戻ることはない。
/// 貸出記録が削除されることもない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: LoanId,
    pub book_id: BookId,
    pub user: String,
    /// 貸出日（YYYY-MM-DD）。作成後は不変
    pub date: NaiveDate,
    #[serde(default)]
    pub returned: bool,
}

impl Loan {
    pub fn new(id: LoanId, book_id: BookId, user: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id,
            book_id,
            user: user.into(),
            date,
            returned: false,
        }
    }

    /// 未返却（貸出中）かどうか
    pub fn is_open(&self) -> bool {
        !self.returned
    }
}
