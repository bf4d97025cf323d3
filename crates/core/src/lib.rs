//! # sqlhint core
//!
//! Resolves MySQL `USE INDEX` hints against a table's schema and attaches
//! them to the FROM clause of a generated `SELECT` statement.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use sqlhint_core::catalog::MemorySchemaCache;
//! use sqlhint_core::dbs::{Dialect, Session};
//! use sqlhint_core::hints;
//! use sqlhint_core::sql::{IndexHintable, SelectStatement};
//!
//! let cache = Arc::new(MemorySchemaCache::default());
//! cache.define_index("books", "index_books_on_isbn", ["isbn"], true).unwrap();
//! let session = Session::new(Dialect::MySql, cache);
//!
//! let sql = SelectStatement::new(&session, "books").use_index(hints!["isbn"]).to_string();
//! assert_eq!(sql, "SELECT `books`.* FROM `books` USE INDEX (index_books_on_isbn)");
//! ```
//!
//! On backends without index hint support the statement is left untouched.

#[macro_use]
extern crate tracing;

#[macro_use]
mod mac;

pub mod catalog;
pub mod dbs;
pub mod err;
pub mod idx;
pub mod sql;
