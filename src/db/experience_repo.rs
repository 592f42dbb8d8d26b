use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::error::RelResult;
use crate::model::experience::company_contains;
use crate::model::{Experience, Id, Person};
use crate::validation::{self, DATE_FORMAT};

pub fn insert(
    conn: &Connection,
    person_id: Id<Person>,
    company: &str,
    title: &str,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
) -> RelResult<Experience> {
    conn.execute(
        "INSERT INTO experience (person_id, company, title, start_date, end_date)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            person_id.value,
            company,
            title,
            start_date.format(DATE_FORMAT).to_string(),
            end_date.map(|d| d.format(DATE_FORMAT).to_string()),
        ],
    )?;
    Ok(Experience {
        id: Id::new(conn.last_insert_rowid()),
        person_id,
        company: company.to_string(),
        title: title.to_string(),
        start_date,
        end_date,
    })
}

pub fn find_by_person(conn: &Connection, person_id: Id<Person>) -> RelResult<Vec<Experience>> {
    let mut stmt = conn.prepare(
        "SELECT id, person_id, company, title, start_date, end_date
         FROM experience WHERE person_id = ?1 ORDER BY id",
    )?;

    let experiences = stmt
        .query_map(params![person_id.value], |row| Ok(row_to_experience(row)))?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(experiences)
}

/// Experiences whose company contains `text`, ignoring case.
///
/// LIKE only folds ASCII, so it narrows the rows: companies with any
/// non-ASCII character, or every row for a non-ASCII `text`, are fetched and
/// the final check runs in Rust.
pub fn find_by_company_substring(conn: &Connection, text: &str) -> RelResult<Vec<Experience>> {
    let pattern = if text.is_ascii() {
        contains_pattern(text)
    } else {
        "%".to_string()
    };
    let mut stmt = conn.prepare(
        "SELECT id, person_id, company, title, start_date, end_date
         FROM experience
         WHERE company LIKE ?1 ESCAPE '\\' OR company GLOB '*[^ -~]*'
         ORDER BY id",
    )?;

    let experiences: Vec<Experience> = stmt
        .query_map(params![pattern], |row| Ok(row_to_experience(row)))?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .filter(|e| company_contains(&e.company, text))
        .collect();

    Ok(experiences)
}

pub fn count(conn: &Connection) -> RelResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM experience", [], |row| row.get(0))?)
}

/// LIKE pattern matching any value that contains `text`, with wildcards escaped.
pub fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn row_to_experience(row: &rusqlite::Row) -> RelResult<Experience> {
    let start_str: String = row.get(4)?;
    let end_str: Option<String> = row.get(5)?;

    Ok(Experience {
        id: Id::new(row.get(0)?),
        person_id: Id::new(row.get(1)?),
        company: row.get(2)?,
        title: row.get(3)?,
        start_date: validation::parse_date(&start_str, "start_date")?,
        end_date: end_str
            .map(|s| validation::parse_date(&s, "end_date"))
            .transpose()?,
    })
}
