pub mod ids;
pub mod person;
pub mod experience;
pub mod contact;
pub mod report;

// Re-exports for convenience
pub use ids::Id;
pub use person::Person;
pub use experience::Experience;
pub use contact::{Contact, ContactWithPhones, Phone};
pub use report::{
    PersonProfile, RelatedByContact, RelatedByExperience, RelationshipOptions, RelationshipReport,
};
