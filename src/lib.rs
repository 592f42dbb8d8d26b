pub mod error;
pub mod validation;
pub mod model;
pub mod store;
pub mod db;
pub mod queries;
pub mod service;
pub mod migrate;

pub use error::{ErrorKind, RelError, RelResult};
pub use service::PersonRelationshipService;
pub use store::RecordStore;
