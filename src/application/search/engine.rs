use crate::domain::Book;
use indexmap::IndexMap;
use std::fmt;
use thiserror::Error;

use super::strategies::{AuthorSearch, AvailabilitySearch, IsbnSearch, SearchStrategy, TitleSearch};

/// 組み込みの検索条件名
pub mod criteria {
    pub const TITLE: &str = "title";
    pub const AUTHOR: &str = "author";
    pub const ISBN: &str = "isbn";
    pub const AVAILABLE: &str = "available";
    /// `available` の別名
    pub const DISPONIBLE: &str = "disponible";
}

/// 検索のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error(
        "Search criterion '{criterion}' is not supported. Available criteria: {}",
        .available.join(", ")
    )]
    UnsupportedCriterion {
        criterion: String,
        available: Vec<String>,
    },
}

/// 検索エンジン - 条件名から検索戦略へのレジストリ
///
/// 既存の戦略やエンジン自体を変更せずに、`register` で実行時に
/// 新しい条件を追加・上書きできる。条件は登録順に列挙される。
pub struct SearchEngine {
    strategies: IndexMap<String, Box<dyn SearchStrategy>>,
}

impl SearchEngine {
    /// 組み込み戦略（title, author, isbn, available, disponible）を登録済みのエンジン
    pub fn new() -> Self {
        let mut engine = Self::empty();
        engine.register(criteria::TITLE, TitleSearch);
        engine.register(criteria::AUTHOR, AuthorSearch);
        engine.register(criteria::ISBN, IsbnSearch);
        engine.register(criteria::AVAILABLE, AvailabilitySearch);
        engine.register(criteria::DISPONIBLE, AvailabilitySearch);
        engine
    }

    /// 戦略が一つも登録されていないエンジン
    pub fn empty() -> Self {
        Self {
            strategies: IndexMap::new(),
        }
    }

    /// 戦略を登録する。同名の条件があれば置き換える
    pub fn register(&mut self, name: impl Into<String>, strategy: impl SearchStrategy + 'static) {
        self.strategies.insert(name.into(), Box::new(strategy));
    }

    /// 登録済みの条件名（登録順）
    pub fn criteria(&self) -> Vec<&str> {
        self.strategies.keys().map(String::as_str).collect()
    }

    pub fn supports(&self, criterion: &str) -> bool {
        self.strategies.contains_key(criterion)
    }

    /// 条件に一致する書籍を入力順のまま返す
    pub fn search<'a>(
        &self,
        criterion: &str,
        books: &'a [Book],
        value: &str,
    ) -> Result<Vec<&'a Book>, SearchError> {
        let strategy = self
            .strategies
            .get(criterion)
            .ok_or_else(|| SearchError::UnsupportedCriterion {
                criterion: criterion.to_string(),
                available: self.strategies.keys().cloned().collect(),
            })?;

        Ok(books
            .iter()
            .filter(|book| strategy.matches(book, value))
            .collect())
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchEngine")
            .field("criteria", &self.criteria())
            .finish()
    }
}
