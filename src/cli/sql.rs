use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use sqlhint_core::dbs::{Dialect, Session};
use sqlhint_core::sql::{Hint, IndexHintable, SelectStatement};

use crate::cli::abstraction::SchemaArguments;
use crate::cnf::DEFAULT_DIALECT;

#[derive(Args, Debug)]
pub struct SqlCommandArguments {
	#[command(flatten)]
	schema: SchemaArguments,
	#[arg(help = "The SQL dialect of the target database")]
	#[arg(env = "SQLHINT_DIALECT", short = 'd', long = "dialect")]
	#[arg(default_value = DEFAULT_DIALECT)]
	dialect: Dialect,
	#[arg(help = "Only select rows matching this raw SQL condition")]
	#[arg(short = 'w', long = "where")]
	cond: Option<String>,
	#[arg(help = "Limit the number of selected rows")]
	#[arg(long = "limit")]
	limit: Option<u64>,
	#[arg(help = "The table to select from")]
	pub(crate) table: String,
	#[arg(help = "Index names or column groups to hint")]
	#[arg(value_parser = Hint::from_str)]
	pub(crate) hints: Vec<Hint>,
}

pub fn init(
	SqlCommandArguments {
		schema,
		dialect,
		cond,
		limit,
		table,
		hints,
	}: SqlCommandArguments,
) -> Result<()> {
	// Load the schema description
	let cache = schema.load()?;
	let session = Session::new(dialect, Arc::new(cache));
	debug!("Applying {} index hints to table {table} for {dialect}", hints.len());
	// Build the statement
	let mut stm = SelectStatement::new(&session, table).use_index(hints);
	if let Some(cond) = cond {
		stm = stm.cond(cond);
	}
	if let Some(limit) = limit {
		stm = stm.limit(limit);
	}
	println!("{stm}");
	Ok(())
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;
	use crate::cli::{Cli, Commands};

	fn parse(args: &[&str]) -> SqlCommandArguments {
		let mut all = vec!["sqlhint", "sql", "--schema", "schema.json", "books"];
		all.extend_from_slice(args);
		match Cli::try_parse_from(all).unwrap().command {
			Commands::Sql(args) => args,
			cmd => panic!("unexpected command {cmd:?}"),
		}
	}

	#[test]
	fn parses_names_and_column_groups() {
		let args = parse(&["isbn", "author_id,name", "[isbn]"]);
		assert_eq!(args.table, "books");
		assert_eq!(
			args.hints,
			vec![
				Hint::Name("isbn".to_owned()),
				Hint::Columns(vec!["author_id".to_owned(), "name".to_owned()]),
				Hint::Columns(vec!["isbn".to_owned()]),
			]
		);
	}

	#[test]
	fn parses_dialect_and_defaults() {
		let args = parse(&[]);
		assert_eq!(args.dialect, Dialect::MySql);
		assert!(args.hints.is_empty());
		let args = parse(&["--dialect", "postgres", "--limit", "3"]);
		assert_eq!(args.dialect, Dialect::Postgres);
		assert_eq!(args.limit, Some(3));
	}
}
