use rusqlite::{params, Connection};

use crate::error::RelResult;
use crate::model::{Id, Person};

/// Inserts a person and returns it with its assigned id.
pub fn insert(
    conn: &Connection,
    first_name: &str,
    last_name: &str,
    phone: Option<&str>,
) -> RelResult<Person> {
    conn.execute(
        "INSERT INTO person (first_name, last_name, phone) VALUES (?1, ?2, ?3)",
        params![first_name, last_name, phone],
    )?;
    Ok(Person::new(conn.last_insert_rowid(), first_name, last_name, phone))
}

pub fn find_by_id(conn: &Connection, id: Id<Person>) -> RelResult<Option<Person>> {
    let mut stmt =
        conn.prepare("SELECT id, first_name, last_name, phone FROM person WHERE id = ?1")?;

    let result = stmt.query_row(params![id.value], row_to_person);

    match result {
        Ok(person) => Ok(Some(person)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// The lowest-id person whose canonical phone equals `number`.
pub fn find_by_phone(conn: &Connection, number: &str) -> RelResult<Option<Person>> {
    let mut stmt = conn.prepare(
        "SELECT id, first_name, last_name, phone FROM person
         WHERE phone = ?1 ORDER BY id LIMIT 1",
    )?;

    let result = stmt.query_row(params![number], row_to_person);

    match result {
        Ok(person) => Ok(Some(person)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn count(conn: &Connection) -> RelResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM person", [], |row| row.get(0))?)
}

fn row_to_person(row: &rusqlite::Row) -> rusqlite::Result<Person> {
    Ok(Person {
        id: Id::new(row.get(0)?),
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        phone: row.get(3)?,
    })
}
