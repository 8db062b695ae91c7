use chrono::NaiveDate;
use std::fmt;

use super::{BookId, LoanId};

/// イベント：書籍が登録された
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookAdded {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
}

/// イベント：書籍が貸し出された
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookLoaned {
    pub loan_id: LoanId,
    pub book_id: BookId,
    pub user: String,
    pub title: String,
    pub date: NaiveDate,
}

/// イベント：書籍が返却された
///
/// 貸出が参照する書籍がカタログに存在しない場合、`title` は `None`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookReturned {
    pub loan_id: LoanId,
    pub book_id: BookId,
    pub user: String,
    pub title: Option<String>,
}

// Displayは利用者向けの成功メッセージ

impl fmt::Display for BookAdded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book '{}' added successfully", self.title)
    }
}

impl fmt::Display for BookLoaned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Loan made to {}", self.user)
    }
}

impl fmt::Display for BookReturned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Book returned successfully")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_messages() {
        let added = BookAdded {
            book_id: BookId::new(1),
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
        };
        assert_eq!(added.to_string(), "Book '1984' added successfully");

        let loaned = BookLoaned {
            loan_id: LoanId::new(1),
            book_id: BookId::new(1),
            user: "Juan Perez".to_string(),
            title: "1984".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
        };
        assert_eq!(loaned.to_string(), "Loan made to Juan Perez");

        let returned = BookReturned {
            loan_id: LoanId::new(1),
            book_id: BookId::new(1),
            user: "Juan Perez".to_string(),
            title: None,
        };
        assert_eq!(returned.to_string(), "Book returned successfully");
    }
}
