use std::fmt;
use std::sync::Arc;

use crate::catalog::SchemaCache;
use crate::dbs::Dialect;

/// What the query builder needs to know about the active database connection.
pub trait Connection {
	fn dialect(&self) -> Dialect;

	fn schema_cache(&self) -> &dyn SchemaCache;

	fn supports_index_hints(&self) -> bool {
		self.dialect().supports_index_hints()
	}

	fn quote_table_name(&self, name: &str) -> String {
		self.dialect().quote_table_name(name)
	}
}

/// A connection to a database with a known dialect and schema.
#[derive(Clone)]
pub struct Session {
	dialect: Dialect,
	schema: Arc<dyn SchemaCache>,
}

impl Session {
	pub fn new(dialect: Dialect, schema: Arc<dyn SchemaCache>) -> Self {
		Self {
			dialect,
			schema,
		}
	}
}

impl fmt::Debug for Session {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Session").field("dialect", &self.dialect).finish_non_exhaustive()
	}
}

impl Connection for Session {
	fn dialect(&self) -> Dialect {
		self.dialect
	}

	fn schema_cache(&self) -> &dyn SchemaCache {
		self.schema.as_ref()
	}
}
