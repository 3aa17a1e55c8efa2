pub mod engine;
pub mod input;
pub mod subjects;

pub use engine::{apply_filter, FilterSubject};
pub use input::FilterInput;
pub use subjects::OrganisationSearchResult;
