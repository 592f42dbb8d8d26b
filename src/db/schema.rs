use rusqlite::Connection;

use crate::error::RelResult;

/// Initialize the database schema. Creates all tables if they don't exist.
pub fn initialize(conn: &Connection) -> RelResult<()> {
    conn.execute_batch(
        "
        PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS person (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            phone TEXT
        );

        CREATE TABLE IF NOT EXISTS experience (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            person_id INTEGER NOT NULL REFERENCES person(id) ON DELETE CASCADE,
            company TEXT NOT NULL,
            title TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT,
            CHECK (end_date IS NULL OR end_date >= start_date)
        );

        CREATE TABLE IF NOT EXISTS contact (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            owner_id INTEGER NOT NULL REFERENCES person(id) ON DELETE CASCADE,
            nickname TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS phone (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            contact_id INTEGER NOT NULL REFERENCES contact(id) ON DELETE CASCADE,
            type TEXT NOT NULL,
            number TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_person_phone ON person(phone);
        CREATE INDEX IF NOT EXISTS idx_experience_person ON experience(person_id);
        CREATE INDEX IF NOT EXISTS idx_experience_company ON experience(company COLLATE NOCASE);
        CREATE INDEX IF NOT EXISTS idx_contact_owner ON contact(owner_id);
        CREATE INDEX IF NOT EXISTS idx_phone_contact ON phone(contact_id);
        ",
    )?;
    Ok(())
}

/// Create an in-memory connection for testing.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
