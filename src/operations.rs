//! Write operations for the catalog.

use rusqlite::{params, Connection};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Insert a new genre. Returns the generated id.
///
/// No duplicate check: adding the same name twice creates two rows.
pub fn add_genre(conn: &Connection, name: &str) -> Result<i64, OperationError> {
    conn.execute("INSERT INTO genres (name) VALUES (?1)", params![name])?;
    Ok(conn.last_insert_rowid())
}

/// Insert a new book.
///
/// `genre_id` is not checked for existence here; callers supply an id
/// previously returned by [`add_genre`] or listed by
/// [`list_genres`](crate::queries::list_genres).
pub fn add_book(
    conn: &Connection,
    title: &str,
    author: &str,
    description: &str,
    genre_id: i64,
) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO books (title, author, description, genre_id)
         VALUES (?1, ?2, ?3, ?4)",
        params![title, author, description, genre_id],
    )?;
    Ok(())
}

/// Delete a book by id. Deleting an id with no matching row is a no-op.
pub fn delete_book(conn: &Connection, id: i64) -> Result<(), OperationError> {
    conn.execute("DELETE FROM books WHERE id = ?1", params![id])?;
    Ok(())
}
