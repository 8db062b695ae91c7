use crate::domain::Book;

/// 検索戦略
///
/// 1冊の書籍が検索値に一致するかを判定する。
/// `Fn(&Book, &str) -> bool` のクロージャもそのまま戦略として登録できる。
pub trait SearchStrategy {
    fn matches(&self, book: &Book, value: &str) -> bool;
}

impl<F> SearchStrategy for F
where
    F: Fn(&Book, &str) -> bool,
{
    fn matches(&self, book: &Book, value: &str) -> bool {
        self(book, value)
    }
}

/// タイトルの部分一致（大文字小文字を区別しない）
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleSearch;

impl SearchStrategy for TitleSearch {
    fn matches(&self, book: &Book, value: &str) -> bool {
        contains_ignore_case(&book.title, value)
    }
}

/// 著者名の部分一致（大文字小文字を区別しない）
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorSearch;

impl SearchStrategy for AuthorSearch {
    fn matches(&self, book: &Book, value: &str) -> bool {
        contains_ignore_case(&book.author, value)
    }
}

/// ISBNの完全一致
#[derive(Debug, Clone, Copy, Default)]
pub struct IsbnSearch;

impl SearchStrategy for IsbnSearch {
    fn matches(&self, book: &Book, value: &str) -> bool {
        book.isbn == value
    }
}

/// 貸出可否による絞り込み
///
/// 値が "true"（大文字小文字を問わない）なら貸出可能な書籍、
/// それ以外はすべて貸出中の書籍に一致する。
#[derive(Debug, Clone, Copy, Default)]
pub struct AvailabilitySearch;

impl SearchStrategy for AvailabilitySearch {
    fn matches(&self, book: &Book, value: &str) -> bool {
        book.available == value.eq_ignore_ascii_case("true")
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
