use std::path::Path;

use rusqlite::Connection;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::db::{contact_repo, experience_repo, person_repo, schema};
use crate::error::{RelError, RelResult};
use crate::model::{Id, Person};
use crate::validation::{self, normalize_phone};

/// One entry of `persons.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonRecord {
    pub first: String,
    pub last: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceRecord {
    pub company: String,
    pub title: String,
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
}

/// One entry of `contacts.json`. `owner_id` is the 1-based position of the
/// owner in `persons.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRecord {
    pub owner_id: i64,
    pub contact_nickname: String,
    #[serde(default)]
    pub phone: Vec<PhoneRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhoneRecord {
    #[serde(rename = "type")]
    pub phone_type: String,
    pub number: String,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub persons: usize,
    pub experiences: usize,
    pub contacts: usize,
    pub phones: usize,
}

/// Imports the person and contact JSON exports into a SQLite database.
pub fn import_files(persons_path: &Path, contacts_path: &Path, db_path: &Path) -> RelResult<ImportStats> {
    let persons: Vec<PersonRecord> = serde_json::from_str(&std::fs::read_to_string(persons_path)?)?;
    let contacts: Vec<ContactRecord> =
        serde_json::from_str(&std::fs::read_to_string(contacts_path)?)?;
    debug!(persons = persons.len(), contacts = contacts.len(), "loaded import files");

    let mut conn = Connection::open(db_path)?;
    schema::initialize(&conn)?;

    import_records(&mut conn, &persons, &contacts)
}

/// Writes all records in a single transaction. Phone numbers are reduced to
/// digits; nothing is written when any record is invalid.
pub fn import_records(
    conn: &mut Connection,
    persons: &[PersonRecord],
    contacts: &[ContactRecord],
) -> RelResult<ImportStats> {
    let tx = conn.transaction()?;
    let mut stats = ImportStats::default();

    let mut person_ids: Vec<Id<Person>> = Vec::with_capacity(persons.len());
    for record in persons {
        let first = validation::non_blank(&record.first, "first")?;
        let last = record.last.trim();
        let phone = record.phone.as_deref().and_then(normalize_phone);
        let person = person_repo::insert(&tx, &first, last, phone.as_deref())?;

        for exp in &record.experience {
            let start = validation::parse_date(&exp.start, "start")?;
            let end = validation::end_not_before(start, exp.end.as_deref(), "end")?;
            experience_repo::insert(&tx, person.id, exp.company.trim(), exp.title.trim(), start, end)?;
            stats.experiences += 1;
        }

        person_ids.push(person.id);
        stats.persons += 1;
    }

    for record in contacts {
        let owner_id = record
            .owner_id
            .checked_sub(1)
            .and_then(|idx| usize::try_from(idx).ok())
            .and_then(|idx| person_ids.get(idx).copied())
            .ok_or_else(|| RelError::person_not_found(record.owner_id))?;

        let contact = contact_repo::insert(&tx, owner_id, record.contact_nickname.trim())?;
        stats.contacts += 1;

        for phone in &record.phone {
            match normalize_phone(&phone.number) {
                Some(number) => {
                    contact_repo::insert_phone(&tx, contact.id, phone.phone_type.trim(), &number)?;
                    stats.phones += 1;
                }
                None => warn!(contact_id = %contact.id, raw = %phone.number, "skipping phone without digits"),
            }
        }
    }

    tx.commit()?;
    info!(
        persons = stats.persons,
        experiences = stats.experiences,
        contacts = stats.contacts,
        phones = stats.phones,
        "import complete"
    );
    Ok(stats)
}
