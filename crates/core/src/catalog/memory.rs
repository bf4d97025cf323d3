use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Deserialize;

use crate::catalog::{IndexDefinition, SchemaCache};
use crate::err::Error;

/// The on-disk shape of a schema description.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaFile {
	#[serde(default)]
	tables: BTreeMap<String, Vec<IndexDefinition>>,
}

/// An in-memory [`SchemaCache`].
///
/// Each table's indexes are stored as one shared slice, so a reader keeps a
/// consistent snapshot even while the table is being redefined.
#[derive(Debug, Default)]
pub struct MemorySchemaCache {
	tables: RwLock<HashMap<String, Arc<[IndexDefinition]>>>,
}

impl MemorySchemaCache {
	/// Parse a schema description, e.g.
	/// `{ "tables": { "books": [{ "name": "ix", "columns": ["isbn"] }] } }`.
	pub fn from_json(json: &str) -> Result<Self, Error> {
		let file: SchemaFile = serde_json::from_str(json)?;
		let cache = Self::default();
		for (table, indexes) in file.tables {
			cache.define_table(&table, indexes)?;
		}
		Ok(cache)
	}

	/// Read and parse a schema description file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
		let path = path.as_ref();
		debug!("Loading schema description from {}", path.display());
		let json = fs::read_to_string(path)?;
		Self::from_json(&json)
	}

	/// Replace all indexes of `table`.
	pub fn define_table(&self, table: &str, indexes: Vec<IndexDefinition>) -> Result<(), Error> {
		for (i, ix) in indexes.iter().enumerate() {
			Self::check(table, ix)?;
			if indexes[..i].iter().any(|x| x.name == ix.name) {
				return Err(Error::IxAlreadyExists {
					table: table.to_owned(),
					name: ix.name.clone(),
				});
			}
		}
		trace!("Defining {} indexes on table {table}", indexes.len());
		self.tables.write().insert(table.to_owned(), indexes.into());
		Ok(())
	}

	/// Append an index to `table`.
	pub fn define_index<I, C>(
		&self,
		table: &str,
		name: &str,
		cols: I,
		unique: bool,
	) -> Result<(), Error>
	where
		I: IntoIterator<Item = C>,
		C: Into<String>,
	{
		let ix = IndexDefinition::new(name, cols).with_unique(unique);
		Self::check(table, &ix)?;
		let mut tables = self.tables.write();
		let current = tables.get(table).map(|ixs| ixs.to_vec()).unwrap_or_default();
		if current.iter().any(|x| x.name == ix.name) {
			return Err(Error::IxAlreadyExists {
				table: table.to_owned(),
				name: ix.name,
			});
		}
		let mut next = current;
		next.push(ix);
		tables.insert(table.to_owned(), next.into());
		Ok(())
	}

	/// Forget everything known about `table`.
	pub fn clear_table(&self, table: &str) {
		if self.tables.write().remove(table).is_some() {
			trace!("Cleared cached indexes of table {table}");
		}
	}

	fn check(table: &str, ix: &IndexDefinition) -> Result<(), Error> {
		if ix.cols.is_empty() {
			return Err(Error::EmptyIndexColumns {
				table: table.to_owned(),
				name: ix.name.clone(),
			});
		}
		Ok(())
	}
}

impl SchemaCache for MemorySchemaCache {
	fn indexes(&self, table: &str) -> Arc<[IndexDefinition]> {
		self.tables.read().get(table).cloned().unwrap_or_else(|| Arc::from(Vec::new()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const BOOKS: &str = r#"{
		"tables": {
			"books": [
				{ "name": "index_books_on_author_id_and_name", "columns": ["author_id", "name"] },
				{ "name": "index_books_on_isbn", "columns": ["isbn"], "unique": true }
			]
		}
	}"#;

	#[test]
	fn loads_indexes_in_declared_order() {
		let cache = MemorySchemaCache::from_json(BOOKS).unwrap();
		let ixs = cache.indexes("books");
		assert_eq!(ixs.len(), 2);
		assert_eq!(ixs[0].name, "index_books_on_author_id_and_name");
		assert_eq!(ixs[1].name, "index_books_on_isbn");
		assert!(ixs[1].unique);
	}

	#[test]
	fn unknown_table_has_no_indexes() {
		let cache = MemorySchemaCache::from_json(BOOKS).unwrap();
		assert!(cache.indexes("authors").is_empty());
	}

	#[test]
	fn rejects_duplicate_index_names() {
		let res = MemorySchemaCache::from_json(
			r#"{ "tables": { "t": [
				{ "name": "ix", "columns": ["a"] },
				{ "name": "ix", "columns": ["b"] }
			] } }"#,
		);
		assert!(matches!(res, Err(Error::IxAlreadyExists { ref table, ref name }) if table == "t" && name == "ix"));

		let cache = MemorySchemaCache::default();
		cache.define_index("t", "ix", ["a"], false).unwrap();
		assert!(matches!(
			cache.define_index("t", "ix", ["b"], false),
			Err(Error::IxAlreadyExists { .. })
		));
	}

	#[test]
	fn reports_first_invalid_table_in_name_order() {
		for _ in 0..8 {
			let res = MemorySchemaCache::from_json(
				r#"{ "tables": {
					"zebras": [{ "name": "ix_z", "columns": [] }],
					"apples": [{ "name": "ix_a", "columns": [] }],
					"mangos": [{ "name": "ix_m", "columns": [] }]
				} }"#,
			);
			assert!(matches!(res, Err(Error::EmptyIndexColumns { ref table, .. }) if table == "apples"));
		}
	}

	#[test]
	fn rejects_index_without_columns() {
		let cache = MemorySchemaCache::default();
		let res = cache.define_index("t", "ix", Vec::<String>::new(), false);
		assert!(matches!(res, Err(Error::EmptyIndexColumns { .. })));
	}

	#[test]
	fn rejects_malformed_json() {
		assert!(matches!(MemorySchemaCache::from_json("{ tables"), Err(Error::Json(_))));
		assert!(matches!(
			MemorySchemaCache::from_json(r#"{ "views": {} }"#),
			Err(Error::Json(_))
		));
	}

	#[test]
	fn snapshots_survive_redefinition() {
		let cache = MemorySchemaCache::default();
		cache.define_index("t", "a", ["a"], false).unwrap();
		let before = cache.indexes("t");
		cache.define_index("t", "b", ["b"], false).unwrap();
		assert_eq!(before.len(), 1);
		assert_eq!(cache.indexes("t").len(), 2);
		cache.clear_table("t");
		assert!(cache.indexes("t").is_empty());
		assert_eq!(before[0].name, "a");
	}
}
