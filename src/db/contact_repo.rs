use rusqlite::{params, Connection};

use crate::error::RelResult;
use crate::model::{Contact, ContactWithPhones, Id, Person, Phone};

pub fn insert(conn: &Connection, owner_id: Id<Person>, nickname: &str) -> RelResult<Contact> {
    conn.execute(
        "INSERT INTO contact (owner_id, nickname) VALUES (?1, ?2)",
        params![owner_id.value, nickname],
    )?;
    Ok(Contact {
        id: Id::new(conn.last_insert_rowid()),
        owner_id,
        nickname: nickname.to_string(),
    })
}

pub fn insert_phone(
    conn: &Connection,
    contact_id: Id<Contact>,
    phone_type: &str,
    number: &str,
) -> RelResult<Phone> {
    conn.execute(
        "INSERT INTO phone (contact_id, type, number) VALUES (?1, ?2, ?3)",
        params![contact_id.value, phone_type, number],
    )?;
    Ok(Phone {
        id: Id::new(conn.last_insert_rowid()),
        contact_id,
        phone_type: phone_type.to_string(),
        number: number.to_string(),
    })
}

pub fn find_by_owner(conn: &Connection, owner_id: Id<Person>) -> RelResult<Vec<Contact>> {
    let mut stmt = conn.prepare(
        "SELECT id, owner_id, nickname FROM contact WHERE owner_id = ?1 ORDER BY id",
    )?;

    let contacts = stmt
        .query_map(params![owner_id.value], |row| {
            Ok(Contact {
                id: Id::new(row.get(0)?),
                owner_id: Id::new(row.get(1)?),
                nickname: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(contacts)
}

pub fn find_phones(conn: &Connection, contact_id: Id<Contact>) -> RelResult<Vec<Phone>> {
    let mut stmt = conn.prepare(
        "SELECT id, contact_id, type, number FROM phone WHERE contact_id = ?1 ORDER BY id",
    )?;

    let phones = stmt
        .query_map(params![contact_id.value], |row| {
            Ok(Phone {
                id: Id::new(row.get(0)?),
                contact_id: Id::new(row.get(1)?),
                phone_type: row.get(2)?,
                number: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(phones)
}

/// Every contact owned by `owner_id` with its phones, ordered by contact id.
pub fn find_with_phones(
    conn: &Connection,
    owner_id: Id<Person>,
) -> RelResult<Vec<ContactWithPhones>> {
    let contacts = find_by_owner(conn, owner_id)?;

    let mut result = Vec::with_capacity(contacts.len());
    for contact in contacts {
        let phones = find_phones(conn, contact.id)?;
        result.push(ContactWithPhones { contact, phones });
    }

    Ok(result)
}

pub fn count(conn: &Connection) -> RelResult<(i64, i64)> {
    let contacts = conn.query_row("SELECT COUNT(*) FROM contact", [], |row| row.get(0))?;
    let phones = conn.query_row("SELECT COUNT(*) FROM phone", [], |row| row.get(0))?;
    Ok((contacts, phones))
}
