pub mod comparison;
pub mod friendship;
pub mod merge;
pub mod profiles;
pub mod recommend;
pub mod similarity;
pub mod vocabulary;

pub use comparison::{compare, compare_with_limit, DEFAULT_MAX_RECOMMENDATIONS};
pub use profiles::{InMemoryProfileStore, ProfileProvider};
