//! SQLite persistence layer for a personal book catalog.
//!
//! Provides schema creation, write operations, and read queries
//! backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{add_book, add_genre, delete_book, OperationError};
pub use queries::{
    book_details, list_books_by_genre, list_genres, search_books, BookDetails, BookSummary, Genre,
};
pub use schema::{create_schema, open_database, open_memory, SchemaError};
