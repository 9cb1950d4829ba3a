use crate::models::Post;
use rusqlite::{params, Connection, Error as RusqliteError, Row};

fn post_from_row(row: &Row) -> Result<Post, RusqliteError> {
    Ok(Post {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
    })
}

pub fn read_all_posts(conn: &Connection) -> Result<Vec<Post>, RusqliteError> {
    let mut stmt = conn.prepare("SELECT id, title, content FROM posts ORDER BY id")?;
    let rows = stmt.query_map([], post_from_row)?;

    let mut posts = Vec::new();
    for post in rows {
        posts.push(post?);
    }
    Ok(posts)
}

pub fn create_post(conn: &Connection, title: &str, content: &str) -> Result<i64, RusqliteError> {
    conn.execute(
        "INSERT INTO posts (title, content) VALUES (?1, ?2)",
        params![title, content],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Returns `QueryReturnedNoRows` when the id is absent.
pub fn read_post(conn: &Connection, post_id: i64) -> Result<Post, RusqliteError> {
    conn.query_row(
        "SELECT id, title, content FROM posts WHERE id = ?1",
        [post_id],
        post_from_row,
    )
}

pub fn update_post(conn: &Connection, post_id: i64, title: &str, content: &str) -> Result<usize, RusqliteError> {
    conn.execute(
        "UPDATE posts SET title = ?1, content = ?2 WHERE id = ?3",
        params![title, content, post_id],
    )
}

pub fn delete_post(conn: &Connection, post_id: i64) -> Result<usize, RusqliteError> {
    conn.execute("DELETE FROM posts WHERE id = ?1", [post_id])
}
