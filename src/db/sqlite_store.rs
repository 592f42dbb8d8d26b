use rusqlite::Connection;

use crate::db::{contact_repo, experience_repo, person_repo};
use crate::error::RelResult;
use crate::model::{ContactWithPhones, Experience, Id, Person};
use crate::store::RecordStore;

/// `RecordStore` backed by a SQLite connection.
pub struct SqliteStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl RecordStore for SqliteStore<'_> {
    fn get_person(&self, id: Id<Person>) -> RelResult<Option<Person>> {
        person_repo::find_by_id(self.conn, id)
    }

    fn list_experiences_of(&self, person_id: Id<Person>) -> RelResult<Vec<Experience>> {
        experience_repo::find_by_person(self.conn, person_id)
    }

    fn list_experiences_by_company_substring(&self, text: &str) -> RelResult<Vec<Experience>> {
        experience_repo::find_by_company_substring(self.conn, text)
    }

    fn list_contacts_with_phones(&self, owner_id: Id<Person>) -> RelResult<Vec<ContactWithPhones>> {
        contact_repo::find_with_phones(self.conn, owner_id)
    }

    fn find_person_by_phone(&self, number: &str) -> RelResult<Option<Person>> {
        person_repo::find_by_phone(self.conn, number)
    }
}
