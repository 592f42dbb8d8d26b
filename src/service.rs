use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::error::RelResult;
use crate::model::{Id, RelationshipOptions, RelationshipReport};
use crate::queries::RelationshipAggregator;
use crate::store::RecordStore;
use crate::validation;

/// Public entry point for relationship discovery.
pub struct PersonRelationshipService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> PersonRelationshipService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn get_relationships(
        &self,
        person_id: i64,
        options: &RelationshipOptions,
    ) -> RelResult<RelationshipReport> {
        self.get_relationships_as_of(person_id, options, Local::now().date_naive())
    }

    /// Input is validated before the store is touched.
    pub fn get_relationships_as_of(
        &self,
        person_id: i64,
        options: &RelationshipOptions,
        today: NaiveDate,
    ) -> RelResult<RelationshipReport> {
        let person_id = validation::positive(person_id, "person_id")?;
        let min_days = validation::non_negative(options.min_permanence_days, "min_permanence_days")?;
        debug!(person_id, min_days, require_contact_match = options.require_contact_match, %today, "get_relationships");

        RelationshipAggregator::new(&self.store).build_report_as_of(
            Id::new(person_id),
            min_days,
            options.require_contact_match,
            today,
        )
    }
}
