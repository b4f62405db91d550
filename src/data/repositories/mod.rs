pub mod study_store;

pub use study_store::{SqliteStore, StudyStore};
