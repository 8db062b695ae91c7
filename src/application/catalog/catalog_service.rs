use crate::application::notifier::Notifier;
use crate::application::search::{SearchEngine, SearchStrategy};
use crate::domain::{
    Book, BookAdded, BookId, BookLoaned, BookReturned, IdKind, Loan, LoanId, MAX_ID, Validator,
};
use crate::ports::{CatalogRepository, Counters, Snapshot};
use chrono::{Local, NaiveDate};

use super::errors::{CatalogError, Result};

/// サービスの依存関係
///
/// サービスは協調オブジェクトを自分で生成しない。
/// 永続化はトレイトオブジェクトとして受け取り、具体的な保存先は知らない。
pub struct CatalogDependencies {
    pub search_engine: SearchEngine,
    pub validator: Validator,
    pub repository: Box<dyn CatalogRepository>,
    pub notifier: Notifier,
}

/// カタログサービス
///
/// 書籍・貸出の一覧と2つの採番カウンタを唯一所有する。
/// 更新系の操作はすべて「検証 → メモリ上の更新 → スナップショット保存 → 通知」
/// の順に進む。検証・存在確認・状態の不整合はエラーとして返し、その場合は
/// 何も変更しない。保存の失敗は通知とログに残すだけで、操作は成功として扱う。
///
/// 単一の呼び出し元を前提とし、内部で排他制御は行わない。
pub struct CatalogService {
    books: Vec<Book>,
    loans: Vec<Loan>,
    next_book_id: BookId,
    next_loan_id: LoanId,

    search_engine: SearchEngine,
    validator: Validator,
    repository: Box<dyn CatalogRepository>,
    notifier: Notifier,
}

impl CatalogService {
    /// 依存関係を受け取り、保存済みのスナップショットから状態を復元する
    ///
    /// スナップショットが無い、または読めない場合は空の状態から始める。
    pub fn new(deps: CatalogDependencies) -> Self {
        let mut service = Self {
            books: Vec::new(),
            loans: Vec::new(),
            next_book_id: BookId::default(),
            next_loan_id: LoanId::default(),
            search_engine: deps.search_engine,
            validator: deps.validator,
            repository: deps.repository,
            notifier: deps.notifier,
        };

        match service.repository.load_all() {
            Some(snapshot) => service.restore(snapshot),
            None => tracing::debug!("No stored catalog snapshot, starting empty"),
        }

        service
    }

    fn restore(&mut self, snapshot: Snapshot) {
        if let Some(field) = out_of_range_field(&snapshot) {
            tracing::warn!(field, "Stored catalog snapshot has unusable ids, starting empty");
            return;
        }

        let Snapshot {
            mut books,
            loans,
            counters,
        } = snapshot;

        // カウンタが既存IDより小さい場合はIDの再利用を避けるため繰り上げる
        let min_book = books
            .iter()
            .map(|b| b.id)
            .max()
            .and_then(BookId::next)
            .unwrap_or_default();
        let min_loan = loans
            .iter()
            .map(|l| l.id)
            .max()
            .and_then(LoanId::next)
            .unwrap_or_default();
        if counters.book < min_book || counters.loan < min_loan {
            tracing::warn!(
                book_counter = counters.book.value(),
                loan_counter = counters.loan.value(),
                "Stored counters are behind existing ids, advancing them"
            );
        }

        // 貸出可能フラグは未返却の貸出の有無に合わせる
        for book in &mut books {
            let on_loan = loans.iter().any(|l| l.is_open() && l.book_id == book.id);
            if book.available == on_loan {
                tracing::warn!(
                    book_id = book.id.value(),
                    available = book.available,
                    "Stored availability disagrees with open loans, correcting it"
                );
                book.available = !on_loan;
            }
        }

        self.next_book_id = counters.book.max(min_book);
        self.next_loan_id = counters.loan.max(min_loan);
        self.books = books;
        self.loans = loans;

        tracing::debug!(
            books = self.books.len(),
            loans = self.loans.len(),
            next_book_id = self.next_book_id.value(),
            next_loan_id = self.next_loan_id.value(),
            "Restored catalog from snapshot"
        );
    }

    // ------------------------------------------------------------------
    // 更新系
    // ------------------------------------------------------------------

    /// 書籍を登録する
    ///
    /// # エラー
    /// - Validation: タイトル・著者・ISBNの検証に失敗
    /// - IdsExhausted: 採番できる書籍IDが残っていない
    pub fn add_book(&mut self, title: &str, author: &str, isbn: &str) -> Result<BookAdded> {
        self.validator.validate_book(title, author, isbn)?;

        let book_id = self.next_book_id;
        let following = match book_id.next() {
            Some(next) if book_id.is_assignable() => next,
            _ => return Err(CatalogError::IdsExhausted(IdKind::Book)),
        };
        self.books.push(Book::new(book_id, title, author, isbn));
        self.next_book_id = following;

        self.persist();
        self.notifier.notify_book_added(title, author);

        tracing::debug!(book_id = book_id.value(), title, "Book added");
        Ok(BookAdded {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
        })
    }

    /// 書籍を貸し出す
    ///
    /// ビジネスルール：
    /// - 利用者名、書籍IDの順に検証し、最初の違反を返す
    /// - 書籍が存在すること
    /// - 書籍が貸出可能であること（1冊につき未返却の貸出は最大1件）
    ///
    /// # エラー
    /// - Validation / BookNotFound / BookNotAvailable / IdsExhausted
    pub fn loan_book(&mut self, book_id: i64, user: &str) -> Result<BookLoaned> {
        self.validator.validate_user(user)?;
        let book_id = BookId::new(self.validator.validate_id(book_id, IdKind::Book)?);

        let book = self
            .books
            .iter_mut()
            .find(|b| b.id == book_id)
            .ok_or(CatalogError::BookNotFound(book_id))?;
        if !book.available {
            return Err(CatalogError::BookNotAvailable(book_id));
        }

        let loan_id = self.next_loan_id;
        let following = match loan_id.next() {
            Some(next) if loan_id.is_assignable() => next,
            _ => return Err(CatalogError::IdsExhausted(IdKind::Loan)),
        };
        let date = today();
        book.available = false;
        let title = book.title.clone();

        self.loans.push(Loan::new(loan_id, book_id, user, date));
        self.next_loan_id = following;

        self.persist();
        self.notifier
            .notify_loan_made(user, &title, &date.format("%Y-%m-%d").to_string());

        tracing::debug!(loan_id = loan_id.value(), book_id = book_id.value(), user, "Loan made");
        Ok(BookLoaned {
            loan_id,
            book_id,
            user: user.to_string(),
            title,
            date,
        })
    }

    /// 書籍を返却する
    ///
    /// ビジネスルール：
    /// - 貸出が存在すること
    /// - 返却済みの貸出は再度返却できない
    /// - 参照先の書籍がカタログに無くても貸出は返却済みにする（通知は行わない）
    ///
    /// # エラー
    /// - Validation / LoanNotFound / AlreadyReturned
    pub fn return_book(&mut self, loan_id: i64) -> Result<BookReturned> {
        let loan_id = LoanId::new(self.validator.validate_id(loan_id, IdKind::Loan)?);

        let loan = self
            .loans
            .iter_mut()
            .find(|l| l.id == loan_id)
            .ok_or(CatalogError::LoanNotFound(loan_id))?;
        if loan.returned {
            return Err(CatalogError::AlreadyReturned(loan_id));
        }

        loan.returned = true;
        let book_id = loan.book_id;
        let user = loan.user.clone();

        let title = match self.books.iter_mut().find(|b| b.id == book_id) {
            Some(book) => {
                book.available = true;
                Some(book.title.clone())
            }
            None => {
                tracing::warn!(
                    loan_id = loan_id.value(),
                    book_id = book_id.value(),
                    "Returned loan references a missing book"
                );
                None
            }
        };

        self.persist();
        if let Some(title) = &title {
            self.notifier.notify_book_returned(&user, title);
            self.notifier.notify_book_available(title);
        }

        tracing::debug!(loan_id = loan_id.value(), book_id = book_id.value(), "Book returned");
        Ok(BookReturned {
            loan_id,
            book_id,
            user,
            title,
        })
    }

    /// 検索戦略を追加・上書きする
    pub fn register_search_strategy(
        &mut self,
        name: impl Into<String>,
        strategy: impl SearchStrategy + 'static,
    ) {
        self.search_engine.register(name, strategy);
    }

    // ------------------------------------------------------------------
    // 参照系（保存・通知なし）
    // ------------------------------------------------------------------

    /// 条件で書籍を検索する
    ///
    /// 未対応の条件はエラーをログに残し、空の結果を返す。
    pub fn search(&self, criterion: &str, value: &str) -> Vec<&Book> {
        match self.search_engine.search(criterion, &self.books, value) {
            Ok(found) => found,
            Err(e) => {
                tracing::error!("Search error: {}", e);
                Vec::new()
            }
        }
    }

    pub fn search_criteria(&self) -> Vec<&str> {
        self.search_engine.criteria()
    }

    pub fn list_all_books(&self) -> &[Book] {
        &self.books
    }

    pub fn list_available_books(&self) -> Vec<&Book> {
        self.books.iter().filter(|b| b.available).collect()
    }

    /// 未返却の貸出
    pub fn list_active_loans(&self) -> Vec<&Loan> {
        self.loans.iter().filter(|l| l.is_open()).collect()
    }

    pub fn list_all_loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn find_book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn find_loan(&self, id: LoanId) -> Option<&Loan> {
        self.loans.iter().find(|l| l.id == id)
    }

    pub fn next_book_id(&self) -> BookId {
        self.next_book_id
    }

    pub fn next_loan_id(&self) -> LoanId {
        self.next_loan_id
    }

    pub fn repository(&self) -> &dyn CatalogRepository {
        self.repository.as_ref()
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    // ------------------------------------------------------------------
    // 永続化
    // ------------------------------------------------------------------

    /// 現在の状態のスナップショット
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            books: self.books.clone(),
            loans: self.loans.clone(),
            counters: Counters {
                book: self.next_book_id,
                loan: self.next_loan_id,
            },
        }
    }

    /// スナップショット全体を保存する
    ///
    /// 失敗してもメモリ上の変更は巻き戻さない。次に保存が成功するまで
    /// 永続化されていない状態になる。
    fn persist(&mut self) {
        let snapshot = self.snapshot();
        if let Err(e) = self.repository.save_all(&snapshot) {
            tracing::error!("Failed to persist catalog snapshot: {}", e);
            self.notifier
                .notify_error("Persistence", &format!("Failed to save data: {e}"));
        }
    }
}

/// 採番・参照できない値を含むフィールド名
///
/// IDは1以上`MAX_ID`以下、カウンタは使い切った状態の`MAX_ID + 1`まで許す。
fn out_of_range_field(snapshot: &Snapshot) -> Option<&'static str> {
    let counter_ok = |value: u64| (1..=MAX_ID + 1).contains(&value);

    if snapshot.books.iter().any(|b| !b.id.is_assignable()) {
        Some("books.id")
    } else if snapshot.loans.iter().any(|l| !l.id.is_assignable()) {
        Some("loans.id")
    } else if !counter_ok(snapshot.counters.book.value()) {
        Some("counters.book")
    } else if !counter_ok(snapshot.counters.loan.value()) {
        Some("counters.loan")
    } else {
        None
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
