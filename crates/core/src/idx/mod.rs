//! Index hint resolution.

mod resolver;

pub use resolver::{IndexResolver, resolve};

use crate::sql::UseIndex;

/// Build the FROM source for `table`, attaching a `USE INDEX` hint when the
/// backend supports it and at least one hint resolved to an index.
///
/// The resolver is not consulted at all when hints are unsupported.
pub fn apply(table: &str, resolver: &IndexResolver, supports_hints: bool) -> String {
	if !supports_hints {
		trace!("Index hints are not supported, using plain table reference {table}");
		return table.to_owned();
	}
	match UseIndex::new(resolver.names()) {
		Some(hint) => {
			let from = format!("{table} {hint}");
			debug!("Using FROM source {from}");
			from
		}
		None => table.to_owned(),
	}
}
