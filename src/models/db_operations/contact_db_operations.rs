use crate::models::ContactEntry;
use rusqlite::{params, Connection, Error as RusqliteError};

pub fn read_all_contact_entries(conn: &Connection) -> Result<Vec<ContactEntry>, RusqliteError> {
    let mut stmt = conn.prepare("SELECT id, name, email, message FROM contact_entries ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(ContactEntry {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            message: row.get(3)?,
        })
    })?;

    let mut entries = Vec::new();
    for entry in rows {
        entries.push(entry?);
    }
    Ok(entries)
}

pub fn create_contact_entry(conn: &Connection, name: &str, email: &str, message: &str) -> Result<(), RusqliteError> {
    conn.execute(
        "INSERT INTO contact_entries (name, email, message) VALUES (?1, ?2, ?3)",
        params![name, email, message],
    )?;
    Ok(())
}
