use anyhow::Result;
use clap::Args;
use sqlhint_core::catalog::SchemaCache;

use crate::cli::abstraction::SchemaArguments;

#[derive(Args, Debug)]
pub struct IndexesCommandArguments {
	#[command(flatten)]
	schema: SchemaArguments,
	#[arg(help = "The table whose indexes should be listed")]
	table: String,
}

pub fn init(
	IndexesCommandArguments {
		schema,
		table,
	}: IndexesCommandArguments,
) -> Result<()> {
	let cache = schema.load()?;
	let indexes = cache.indexes(&table);
	if indexes.is_empty() {
		warn!("No indexes are defined on table {table}");
	}
	for ix in indexes.iter() {
		println!("{ix}");
	}
	Ok(())
}
