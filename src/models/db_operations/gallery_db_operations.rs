use rusqlite::{Connection, Error as RusqliteError};

pub fn read_all_image_urls(conn: &Connection) -> Result<Vec<String>, RusqliteError> {
    let mut stmt = conn.prepare("SELECT imageURL FROM gallery ORDER BY rowid")?;
    let rows = stmt.query_map([], |row| row.get(0))?;

    let mut urls = Vec::new();
    for url in rows {
        urls.push(url?);
    }
    Ok(urls)
}

pub fn add_image(conn: &Connection, image_url: &str) -> Result<(), RusqliteError> {
    conn.execute("INSERT INTO gallery (imageURL) VALUES (?1)", [image_url])?;
    Ok(())
}

/// Removes every row carrying this locator. Duplicate uploads share a locator, so all go together.
pub fn delete_image(conn: &Connection, image_url: &str) -> Result<usize, RusqliteError> {
    conn.execute("DELETE FROM gallery WHERE imageURL = ?1", [image_url])
}
