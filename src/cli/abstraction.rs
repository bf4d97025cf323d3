use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sqlhint_core::catalog::MemorySchemaCache;

#[derive(Args, Debug)]
pub(crate) struct SchemaArguments {
	#[arg(help = "Path to the JSON schema description")]
	#[arg(env = "SQLHINT_SCHEMA", short = 's', long = "schema")]
	pub(crate) schema: PathBuf,
}

impl SchemaArguments {
	pub(crate) fn load(&self) -> Result<MemorySchemaCache> {
		MemorySchemaCache::load(&self.schema)
			.with_context(|| format!("Unable to load schema from '{}'", self.schema.display()))
	}
}
