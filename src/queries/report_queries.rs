use chrono::{Local, NaiveDate};
use tracing::info;

use crate::error::{RelError, RelResult};
use crate::model::{Id, Person, PersonProfile, RelationshipReport};
use crate::queries::contact_queries::ContactGraphFinder;
use crate::queries::experience_queries::ExperienceOverlapFinder;
use crate::store::RecordStore;
use crate::validation;

/// Combines both finders into one report for a person.
pub struct RelationshipAggregator<'a, S: RecordStore> {
    store: &'a S,
    experiences: ExperienceOverlapFinder<'a, S>,
    contacts: ContactGraphFinder<'a, S>,
}

impl<'a, S: RecordStore> RelationshipAggregator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            experiences: ExperienceOverlapFinder::new(store),
            contacts: ContactGraphFinder::new(store),
        }
    }

    pub fn build_report(
        &self,
        person_id: Id<Person>,
        min_permanence_days: i64,
        require_contact_match: bool,
    ) -> RelResult<RelationshipReport> {
        self.build_report_as_of(
            person_id,
            min_permanence_days,
            require_contact_match,
            Local::now().date_naive(),
        )
    }

    /// Fails with `NotFound` before either finder runs when the subject is missing.
    pub fn build_report_as_of(
        &self,
        person_id: Id<Person>,
        min_permanence_days: i64,
        require_contact_match: bool,
        today: NaiveDate,
    ) -> RelResult<RelationshipReport> {
        validation::non_negative(min_permanence_days, "min_permanence_days")?;
        let subject = self
            .store
            .get_person(person_id)?
            .ok_or_else(|| RelError::person_not_found(person_id))?;

        let by_experience = self
            .experiences
            .related_to(&subject, min_permanence_days, today)?;
        let by_contact = self.contacts.related_to(&subject, require_contact_match)?;

        info!(
            person_id = %subject.id,
            by_experience = by_experience.len(),
            by_contact = by_contact.len(),
            "relationship report built"
        );

        Ok(RelationshipReport {
            person: PersonProfile::from(&subject),
            by_experience,
            by_contact,
        })
    }
}
