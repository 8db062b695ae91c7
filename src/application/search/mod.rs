mod engine;
mod strategies;

pub use engine::{SearchEngine, SearchError, criteria};
pub use strategies::{AuthorSearch, AvailabilitySearch, IsbnSearch, SearchStrategy, TitleSearch};
