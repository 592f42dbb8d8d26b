use std::collections::HashMap;

use tracing::debug;

use crate::error::{RelError, RelResult};
use crate::model::{ContactWithPhones, Id, Person, RelatedByContact};
use crate::store::RecordStore;

/// Finds people whose canonical phone appears in the subject's contact book.
///
/// Only one hop is followed: the subject's own contacts against every other
/// person's canonical number.
pub struct ContactGraphFinder<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> ContactGraphFinder<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// With `require_match` only phones that resolved to a person are listed;
    /// otherwise every phone is listed and unmatched ones carry no person.
    pub fn find_by_contacts(
        &self,
        person_id: Id<Person>,
        require_match: bool,
    ) -> RelResult<Vec<RelatedByContact>> {
        let subject = self
            .store
            .get_person(person_id)?
            .ok_or_else(|| RelError::person_not_found(person_id))?;
        self.related_to(&subject, require_match)
    }

    pub(crate) fn related_to(
        &self,
        subject: &Person,
        require_match: bool,
    ) -> RelResult<Vec<RelatedByContact>> {
        let mut contacts = self.store.list_contacts_with_phones(subject.id)?;
        contacts.sort_by_key(|c| c.contact.id);
        debug!(person_id = %subject.id, contacts = contacts.len(), "searching contact graph");

        let mut lookups: HashMap<String, Option<Person>> = HashMap::new();
        let mut related = Vec::new();

        for ContactWithPhones { contact, mut phones } in contacts {
            phones.sort_by_key(|p| p.id);
            phones.dedup_by_key(|p| p.id);

            for phone in &phones {
                let matched = match lookups.get(&phone.number) {
                    Some(m) => m.clone(),
                    None => {
                        let m = self.match_phone(subject, &phone.number)?;
                        lookups.insert(phone.number.clone(), m.clone());
                        m
                    }
                };

                if require_match && matched.is_none() {
                    continue;
                }
                related.push(RelatedByContact::new(subject, &contact, phone, matched.as_ref()));
            }
        }

        debug!(person_id = %subject.id, related = related.len(), "contact graph entries found");
        Ok(related)
    }

    /// Resolves a number to another person. The subject never matches itself.
    fn match_phone(&self, subject: &Person, number: &str) -> RelResult<Option<Person>> {
        if number.is_empty() || subject.owns_phone(number) {
            return Ok(None);
        }
        Ok(self
            .store
            .find_person_by_phone(number)?
            .filter(|p| p.id != subject.id))
    }
}
