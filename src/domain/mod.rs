pub mod book;
pub mod errors;
pub mod events;
pub mod loan;
pub mod validation;
pub mod value_objects;

pub use book::Book;
pub use errors::*;
pub use events::*;
pub use loan::Loan;
pub use validation::Validator;
pub use value_objects::*;
