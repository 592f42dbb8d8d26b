pub mod schema;
pub mod person_repo;
pub mod experience_repo;
pub mod contact_repo;
pub mod sqlite_store;

pub use sqlite_store::SqliteStore;
