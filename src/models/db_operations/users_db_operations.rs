use crate::models::User;
use rusqlite::{params, Connection, OptionalExtension, Error as RusqliteError, Row};

fn user_from_row(row: &Row) -> Result<User, RusqliteError> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        username: row.get(3)?,
        password: row.get(4)?,
        role: row.get(5)?,
    })
}

/// Inserts a user row. The password is stored exactly as given.
pub fn create_user(
    conn: &Connection,
    name: &str,
    email: &str,
    username: &str,
    password: &str,
    role: &str,
) -> Result<(), RusqliteError> {
    conn.execute(
        "INSERT INTO users (name, username, email, password, role) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![name, username, email, password, role],
    )?;
    Ok(())
}

pub fn read_user_by_username(conn: &Connection, username: &str) -> Result<Option<User>, RusqliteError> {
    conn.query_row(
        "SELECT id, name, email, username, password, role FROM users WHERE username = ?1",
        [username],
        user_from_row,
    )
    .optional()
}

pub fn read_users_by_role(conn: &Connection, role: &str) -> Result<Vec<User>, RusqliteError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, username, password, role FROM users WHERE role = ?1 ORDER BY username",
    )?;
    let rows = stmt.query_map([role], user_from_row)?;

    let mut users = Vec::new();
    for user in rows {
        users.push(user?);
    }
    Ok(users)
}
