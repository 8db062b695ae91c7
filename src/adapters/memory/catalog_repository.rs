use crate::ports::catalog_repository::{CatalogRepository as CatalogRepositoryTrait, Result, Snapshot};

/// In-memory implementation of CatalogRepository
///
/// Keeps the latest snapshot for the lifetime of the process.
/// `load_all` hands out a deep copy, so callers cannot alter the stored state.
#[derive(Debug, Clone, Default)]
pub struct CatalogRepository {
    snapshot: Snapshot,
}

impl CatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a previously captured snapshot
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

impl CatalogRepositoryTrait for CatalogRepository {
    fn save_all(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.snapshot = snapshot.clone();
        Ok(())
    }

    fn load_all(&self) -> Option<Snapshot> {
        Some(self.snapshot.clone())
    }

    fn clear(&mut self) -> Result<()> {
        self.snapshot = Snapshot::empty();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Book, BookId, Loan, LoanId};
    use crate::ports::Counters;
    use chrono::NaiveDate;

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            books: vec![
                Book::new(BookId::new(1), "1984", "George Orwell", "9780451524935"),
                Book::new(BookId::new(2), "Dune", "Frank Herbert", "9780441013593"),
            ],
            loans: vec![Loan::new(
                LoanId::new(1),
                BookId::new(2),
                "Juan Perez",
                NaiveDate::from_ymd_opt(2024, 4, 10).unwrap(),
            )],
            counters: Counters {
                book: BookId::new(3),
                loan: LoanId::new(2),
            },
        }
    }

    #[test]
    fn test_new_repository_loads_empty_snapshot() {
        let repo = CatalogRepository::new();
        assert_eq!(repo.load_all(), Some(Snapshot::empty()));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let mut repo = CatalogRepository::new();
        let snapshot = sample_snapshot();

        repo.save_all(&snapshot).unwrap();

        assert_eq!(repo.load_all(), Some(snapshot));
    }

    #[test]
    fn test_loaded_snapshot_is_a_copy() {
        let mut repo = CatalogRepository::new();
        repo.save_all(&sample_snapshot()).unwrap();

        let mut loaded = repo.load_all().unwrap();
        loaded.books[0].available = false;
        loaded.books.clear();

        let reloaded = repo.load_all().unwrap();
        assert_eq!(reloaded.books.len(), 2);
        assert!(reloaded.books[0].available);
    }

    #[test]
    fn test_clear_resets_counters() {
        let mut repo = CatalogRepository::with_snapshot(sample_snapshot());

        repo.clear().unwrap();

        let loaded = repo.load_all().unwrap();
        assert!(loaded.books.is_empty());
        assert!(loaded.loans.is_empty());
        assert_eq!(loaded.counters, Counters::default());
    }
}
