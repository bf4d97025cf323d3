//! Schema metadata consulted when resolving index hints.

mod memory;
mod schema;

use std::sync::Arc;

pub use memory::MemorySchemaCache;
pub use schema::IndexDefinition;

/// Read access to the indexes of the connected database.
pub trait SchemaCache: Send + Sync {
	/// All indexes defined on `table`, in a stable order.
	///
	/// Unknown tables have no indexes.
	fn indexes(&self, table: &str) -> Arc<[IndexDefinition]>;
}
