use std::cell::OnceCell;
use std::sync::Arc;

use crate::catalog::{IndexDefinition, SchemaCache};
use crate::sql::Hint;

/// Resolves a list of hints against the indexes of one table.
///
/// The result is computed on first use and kept for the lifetime of the
/// resolver, which is expected to live for a single query build.
#[derive(Debug)]
pub struct IndexResolver {
	indexes: Arc<[IndexDefinition]>,
	hints: Vec<Hint>,
	resolved: OnceCell<Resolved>,
}

#[derive(Debug)]
struct Resolved {
	names: Vec<String>,
	list: String,
}

impl IndexResolver {
	pub fn new(indexes: Arc<[IndexDefinition]>, hints: Vec<Hint>) -> Self {
		Self {
			indexes,
			hints,
			resolved: OnceCell::new(),
		}
	}

	/// Resolve `hints` against the current indexes of `table`.
	pub fn for_table(schema: &dyn SchemaCache, table: &str, hints: Vec<Hint>) -> Self {
		Self::new(schema.indexes(table), hints)
	}

	/// The matched index names, in hint order.
	pub fn names(&self) -> &[String] {
		&self.resolve().names
	}

	/// The matched index names joined with commas, empty if nothing matched.
	pub fn index_list(&self) -> &str {
		&self.resolve().list
	}

	/// Did at least one hint match an index?
	pub fn has_index_list(&self) -> bool {
		!self.resolve().names.is_empty()
	}

	/// Has the hint list been resolved yet?
	pub fn is_resolved(&self) -> bool {
		self.resolved.get().is_some()
	}

	fn resolve(&self) -> &Resolved {
		self.resolved.get_or_init(|| {
			let names: Vec<String> = self
				.hints
				.iter()
				.filter_map(|hint| match self.indexes.iter().find(|ix| hint.matches(ix)) {
					Some(ix) => Some(ix.name.clone()),
					None => {
						trace!("Index hint {hint} does not match any index");
						None
					}
				})
				.collect();
			let list = names.join(",");
			debug!("Resolved {} index hints to [{list}]", self.hints.len());
			Resolved {
				names,
				list,
			}
		})
	}
}

/// Resolve `hints` against `indexes`, returning the comma separated names.
pub fn resolve(indexes: &[IndexDefinition], hints: &[Hint]) -> String {
	IndexResolver::new(indexes.into(), hints.to_vec()).index_list().to_owned()
}
