pub mod experience_queries;
pub mod contact_queries;
pub mod report_queries;

pub use contact_queries::ContactGraphFinder;
pub use experience_queries::ExperienceOverlapFinder;
pub use report_queries::RelationshipAggregator;
