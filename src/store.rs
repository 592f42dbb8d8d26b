use crate::error::RelResult;
use crate::model::{ContactWithPhones, Experience, Id, Person};

/// Read-only access to the records relationship discovery runs over.
///
/// Each call either completes or fails as a whole. Implementations own any
/// retry, timeout or connection policy; callers never retry.
pub trait RecordStore {
    fn get_person(&self, id: Id<Person>) -> RelResult<Option<Person>>;

    fn list_experiences_of(&self, person_id: Id<Person>) -> RelResult<Vec<Experience>>;

    /// Experiences whose company contains `text`, ignoring case.
    fn list_experiences_by_company_substring(&self, text: &str) -> RelResult<Vec<Experience>>;

    fn list_contacts_with_phones(&self, owner_id: Id<Person>) -> RelResult<Vec<ContactWithPhones>>;

    /// A person whose canonical phone equals `number` exactly.
    fn find_person_by_phone(&self, number: &str) -> RelResult<Option<Person>>;
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn get_person(&self, id: Id<Person>) -> RelResult<Option<Person>> {
        (**self).get_person(id)
    }

    fn list_experiences_of(&self, person_id: Id<Person>) -> RelResult<Vec<Experience>> {
        (**self).list_experiences_of(person_id)
    }

    fn list_experiences_by_company_substring(&self, text: &str) -> RelResult<Vec<Experience>> {
        (**self).list_experiences_by_company_substring(text)
    }

    fn list_contacts_with_phones(&self, owner_id: Id<Person>) -> RelResult<Vec<ContactWithPhones>> {
        (**self).list_contacts_with_phones(owner_id)
    }

    fn find_person_by_phone(&self, number: &str) -> RelResult<Option<Person>> {
        (**self).find_person_by_phone(number)
    }
}
