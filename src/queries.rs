//! Read queries for the catalog.
//!
//! Each query returns explicit record types rather than positional
//! tuples, so callers never index into raw rows.

use rusqlite::{params, Connection};

use crate::operations::OperationError;

/// A genre row.
#[derive(Debug)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// A book as it appears in listings and search results.
#[derive(Debug)]
pub struct BookSummary {
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// The denormalized detail view of a single book.
#[derive(Debug)]
pub struct BookDetails {
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
}

/// List all genres in insertion order.
pub fn list_genres(conn: &Connection) -> Result<Vec<Genre>, OperationError> {
    let mut stmt = conn.prepare("SELECT id, name FROM genres")?;
    let rows = stmt.query_map([], |row| {
        Ok(Genre {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// List books, optionally filtered by exact genre name (case-sensitive).
///
/// `None` or an empty name lists every book regardless of genre.
pub fn list_books_by_genre(
    conn: &Connection,
    genre: Option<&str>,
) -> Result<Vec<BookSummary>, OperationError> {
    match genre {
        Some(name) if !name.is_empty() => {
            let mut stmt = conn.prepare(
                "SELECT books.id, books.title, books.author
                 FROM books
                 INNER JOIN genres ON books.genre_id = genres.id
                 WHERE genres.name = ?1",
            )?;
            let rows = stmt.query_map(params![name], row_to_summary)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        }
        _ => {
            let mut stmt = conn.prepare("SELECT id, title, author FROM books")?;
            let rows = stmt.query_map([], row_to_summary)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        }
    }
}

/// Search books whose title or author contains `keyword` (LIKE, unanchored).
///
/// An empty keyword matches every book.
pub fn search_books(
    conn: &Connection,
    keyword: &str,
) -> Result<Vec<BookSummary>, OperationError> {
    let pattern = format!("%{}%", keyword);
    let mut stmt = conn.prepare(
        "SELECT id, title, author FROM books
         WHERE title LIKE ?1 OR author LIKE ?1",
    )?;
    let rows = stmt.query_map(params![pattern], row_to_summary)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Fetch the detail view for one book, or `None` if no such book exists.
pub fn book_details(
    conn: &Connection,
    id: i64,
) -> Result<Option<BookDetails>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT b.title, b.author, b.description, g.name
         FROM books AS b
         INNER JOIN genres AS g ON b.genre_id = g.id
         WHERE b.id = ?1",
    )?;
    let result = stmt.query_row(params![id], |row| {
        Ok(BookDetails {
            title: row.get(0)?,
            author: row.get(1)?,
            description: row.get(2)?,
            genre: row.get(3)?,
        })
    });
    match result {
        Ok(details) => Ok(Some(details)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn row_to_summary(row: &rusqlite::Row<'_>) -> rusqlite::Result<BookSummary> {
    Ok(BookSummary {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
    })
}
