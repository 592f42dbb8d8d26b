use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::error::{RelError, RelResult};
use crate::model::{Experience, Id, Person, RelatedByExperience};
use crate::store::RecordStore;
use crate::validation;

/// Finds people whose stint at a matching company overlapped the subject's.
///
/// A candidate matches a subject stint when its company contains the
/// subject's company text, ignoring case, so "Google" catches "Google Inc.".
/// Results are grouped per related person and subject company, keeping the
/// longest overlap, then once more per related person and candidate company
/// so a person never appears twice under the same company name.
pub struct ExperienceOverlapFinder<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> ExperienceOverlapFinder<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Evaluates open-ended stints against the local date at call time.
    pub fn find_by_experience(
        &self,
        person_id: Id<Person>,
        min_permanence_days: i64,
    ) -> RelResult<Vec<RelatedByExperience>> {
        self.find_by_experience_as_of(person_id, min_permanence_days, Local::now().date_naive())
    }

    pub fn find_by_experience_as_of(
        &self,
        person_id: Id<Person>,
        min_permanence_days: i64,
        today: NaiveDate,
    ) -> RelResult<Vec<RelatedByExperience>> {
        validation::non_negative(min_permanence_days, "min_permanence_days")?;
        let subject = self
            .store
            .get_person(person_id)?
            .ok_or_else(|| RelError::person_not_found(person_id))?;
        self.related_to(&subject, min_permanence_days, today)
    }

    /// Runs the search for an already-fetched subject.
    pub(crate) fn related_to(
        &self,
        subject: &Person,
        min_permanence_days: i64,
        today: NaiveDate,
    ) -> RelResult<Vec<RelatedByExperience>> {
        let stints = self.store.list_experiences_of(subject.id)?;
        debug!(person_id = %subject.id, stints = stints.len(), "searching experience overlaps");

        let mut candidates_by_company: HashMap<String, Vec<Experience>> = HashMap::new();
        let mut best: HashMap<(Id<Person>, String), RelatedByExperience> = HashMap::new();

        for stint in &stints {
            let company_key = stint.company_key();
            if company_key.is_empty() {
                continue;
            }

            let candidates = match candidates_by_company.entry(company_key.clone()) {
                Entry::Occupied(o) => o.into_mut(),
                Entry::Vacant(v) => v.insert(
                    self.store
                        .list_experiences_by_company_substring(stint.company.trim())?,
                ),
            };

            for candidate in candidates.iter().filter(|c| c.person_id != subject.id) {
                let overlap = stint.overlap_days(candidate, today);
                if overlap == 0 || overlap < min_permanence_days {
                    continue;
                }

                let entry = RelatedByExperience::from_candidate(candidate, overlap);
                match best.entry((candidate.person_id, company_key.clone())) {
                    Entry::Vacant(v) => {
                        v.insert(entry);
                    }
                    Entry::Occupied(mut o) => {
                        if outranks(&entry, o.get()) {
                            o.insert(entry);
                        }
                    }
                }
            }
        }

        // Subject stints at "Acme" and "Acme Labs" can each pick a stint at the same candidate company.
        let mut by_candidate_company: HashMap<(Id<Person>, String), RelatedByExperience> =
            HashMap::new();
        for entry in best.into_values() {
            let key = (entry.related_person_id, entry.company.trim().to_lowercase());
            match by_candidate_company.entry(key) {
                Entry::Vacant(v) => {
                    v.insert(entry);
                }
                Entry::Occupied(mut o) => {
                    if outranks(&entry, o.get()) {
                        o.insert(entry);
                    }
                }
            }
        }

        let mut related: Vec<RelatedByExperience> = by_candidate_company.into_values().collect();
        related.sort_by_key(|r| (r.related_person_id, r.experience_id));

        debug!(person_id = %subject.id, related = related.len(), "experience overlaps found");
        Ok(related)
    }
}

fn outranks(a: &RelatedByExperience, b: &RelatedByExperience) -> bool {
    (a.overlap_days, Reverse(a.experience_id)) > (b.overlap_days, Reverse(b.experience_id))
}
