use std::io::Error as IoError;

use serde_json::Error as JsonError;
use thiserror::Error;

/// An error raised while loading schema metadata or configuring a session.
///
/// Hint resolution itself never fails: hints which do not match an index
/// are dropped, and backends without hint support leave the query as is.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
	/// The dialect name is not one we know about
	#[error("The database dialect '{0}' is not supported")]
	InvalidDialect(String),

	/// The index is already defined on the table
	#[error("The index '{name}' already exists on table '{table}'")]
	IxAlreadyExists {
		table: String,
		name: String,
	},

	/// The index was defined without any columns
	#[error("The index '{name}' on table '{table}' does not cover any columns")]
	EmptyIndexColumns {
		table: String,
		name: String,
	},

	/// There was an error reading a schema description
	#[error("I/O error: {0}")]
	Io(#[from] IoError),

	/// There was an error parsing a schema description
	#[error("JSON error: {0}")]
	Json(#[from] JsonError),
}
