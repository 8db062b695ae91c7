use serde::{Deserialize, Serialize};
use std::fmt;

/// 操作の引数として指定できるIDの上限
///
/// 貸出・返却はIDを`i64`で受け取るため、これを超えるIDは参照できない。
pub const MAX_ID: u64 = i64::MAX as u64;

/// 書籍ID - カタログサービスが採番する正の整数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookId(u64);

impl BookId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// 次のID（採番カウンタ用）。u64の範囲を超える場合は`None`
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// 1以上`MAX_ID`以下なら採番・参照できる
    pub fn is_assignable(&self) -> bool {
        (1..=MAX_ID).contains(&self.0)
    }
}

impl Default for BookId {
    /// 採番は1から始まる
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 貸出ID - 書籍IDとは独立したカウンタで採番される
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LoanId(u64);

impl LoanId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    pub fn is_assignable(&self) -> bool {
        (1..=MAX_ID).contains(&self.0)
    }
}

impl Default for LoanId {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for LoanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ID検証時にエラーメッセージへ含める対象の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Book,
    Loan,
}

impl IdKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdKind::Book => "book",
            IdKind::Loan => "loan",
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_one() {
        assert_eq!(BookId::default().value(), 1);
        assert_eq!(LoanId::default().value(), 1);
    }

    #[test]
    fn test_next_increments() {
        let id = BookId::new(41);
        assert_eq!(id.next(), Some(BookId::new(42)));

        let id = LoanId::new(7);
        assert_eq!(id.next().map(|id| id.value()), Some(8));
    }

    #[test]
    fn test_next_does_not_overflow() {
        assert_eq!(BookId::new(u64::MAX).next(), None);
        assert_eq!(LoanId::new(u64::MAX).next(), None);
    }

    #[test]
    fn test_assignable_range() {
        assert!(BookId::new(1).is_assignable());
        assert!(BookId::new(MAX_ID).is_assignable());
        assert!(!BookId::new(0).is_assignable());
        assert!(!BookId::new(MAX_ID + 1).is_assignable());
        assert!(!LoanId::new(u64::MAX).is_assignable());
    }

    // JSONでは素の整数としてシリアライズされる
    #[test]
    fn test_ids_serialize_as_plain_integers() {
        assert_eq!(serde_json::to_string(&BookId::new(3)).unwrap(), "3");
        let id: LoanId = serde_json::from_str("12").unwrap();
        assert_eq!(id, LoanId::new(12));
    }

    #[test]
    fn test_id_kind_display() {
        assert_eq!(IdKind::Book.to_string(), "book");
        assert_eq!(IdKind::Loan.to_string(), "loan");
    }
}
