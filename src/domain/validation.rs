use super::{Field, IdKind, ValidationError};

/// タイトルの最小文字数
pub const MIN_TITLE_CHARS: usize = 2;
/// 著者名の最小文字数
pub const MIN_AUTHOR_CHARS: usize = 3;
/// ISBNの最小文字数（ハイフン込み）
pub const MIN_ISBN_CHARS: usize = 10;
/// 利用者名の最小文字数
pub const MIN_USER_CHARS: usize = 3;

pub type Result<T> = std::result::Result<T, ValidationError>;

/// 入力値の検証（状態を持たない純粋な関数群）
///
/// 文字数は前後の空白を除いた Unicode スカラー値の数で数える。
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// 書籍登録時の検証
    ///
    /// タイトル → 著者 → ISBN の順に検査し、最初の違反を返す。
    pub fn validate_book(&self, title: &str, author: &str, isbn: &str) -> Result<()> {
        require_chars(title, Field::Title, MIN_TITLE_CHARS)?;
        require_chars(author, Field::Author, MIN_AUTHOR_CHARS)?;
        require_chars(isbn, Field::Isbn, MIN_ISBN_CHARS)?;

        let mut cleaned = isbn.chars().filter(|c| *c != '-' && *c != ' ').peekable();
        if cleaned.peek().is_none() || !cleaned.all(char::is_alphanumeric) {
            return Err(ValidationError::InvalidIsbnCharacters);
        }

        Ok(())
    }

    /// 貸出時の利用者名の検証
    pub fn validate_user(&self, user: &str) -> Result<()> {
        require_chars(user, Field::User, MIN_USER_CHARS)
    }

    /// IDの検証。正の整数であれば符号なしの値を返す
    pub fn validate_id(&self, id: i64, kind: IdKind) -> Result<u64> {
        u64::try_from(id)
            .ok()
            .filter(|value| *value > 0)
            .ok_or(ValidationError::NonPositiveId { kind, id })
    }
}

fn require_chars(value: &str, field: Field, min: usize) -> Result<()> {
    if value.trim().chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_book() {
        let v = Validator::new();
        assert!(v
            .validate_book("Cien Años de Soledad", "Gabriel Garcia Marquez", "978-0-06-088328-7")
            .is_ok());
    }

    #[test]
    fn test_empty_title_is_too_short() {
        let v = Validator::new();
        let err = v.validate_book("", "Author Name", "1234567890").unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooShort {
                field: Field::Title,
                min: MIN_TITLE_CHARS
            }
        );
    }

    #[test]
    fn test_whitespace_does_not_count() {
        let v = Validator::new();
        let err = v.validate_book("   A   ", "Author Name", "1234567890").unwrap_err();
        assert!(matches!(err, ValidationError::TooShort { field: Field::Title, .. }));

        let err = v.validate_user("  ab  ").unwrap_err();
        assert!(matches!(err, ValidationError::TooShort { field: Field::User, .. }));
    }

    #[test]
    fn test_author_checked_before_isbn() {
        let v = Validator::new();
        let err = v.validate_book("1984", "Al", "x").unwrap_err();
        assert!(matches!(err, ValidationError::TooShort { field: Field::Author, .. }));
    }

    #[test]
    fn test_short_isbn() {
        let v = Validator::new();
        let err = v.validate_book("1984", "George Orwell", "12345").unwrap_err();
        assert!(matches!(err, ValidationError::TooShort { field: Field::Isbn, .. }));
    }

    #[test]
    fn test_isbn_characters() {
        let v = Validator::new();
        assert!(v.validate_book("1984", "George Orwell", "0-452-28423-X").is_ok());
        assert!(v.validate_book("1984", "George Orwell", "0 452 28423 8").is_ok());
        assert_eq!(
            v.validate_book("1984", "George Orwell", "978#0451524935"),
            Err(ValidationError::InvalidIsbnCharacters)
        );
        // ハイフンだけのISBNは英数字を含まない
        assert_eq!(
            v.validate_book("1984", "George Orwell", "----------"),
            Err(ValidationError::InvalidIsbnCharacters)
        );
    }

    #[test]
    fn test_user_name_counts_characters_not_bytes() {
        let v = Validator::new();
        assert!(v.validate_user("Íñé").is_ok());
        assert!(v.validate_user("Jo").is_err());
    }

    #[test]
    fn test_validate_id() {
        let v = Validator::new();
        assert_eq!(v.validate_id(3, IdKind::Book), Ok(3));
        assert_eq!(
            v.validate_id(0, IdKind::Book),
            Err(ValidationError::NonPositiveId {
                kind: IdKind::Book,
                id: 0
            })
        );
        assert!(v.validate_id(-5, IdKind::Loan).is_err());
    }
}
