use std::fmt::{self, Display, Formatter};

use crate::dbs::Connection;
use crate::idx::{self, IndexResolver};
use crate::sql::{Hint, IndexHintable};

/// A `SELECT table.* FROM ...` statement for a single table.
pub struct SelectStatement<'a> {
	conn: &'a dyn Connection,
	table: String,
	from: Option<String>,
	cond: Option<String>,
	limit: Option<u64>,
}

impl<'a> SelectStatement<'a> {
	pub fn new(conn: &'a dyn Connection, table: impl Into<String>) -> Self {
		Self {
			conn,
			table: table.into(),
			from: None,
			cond: None,
			limit: None,
		}
	}

	/// The table name quoted for the connection's dialect.
	pub fn quoted_table_name(&self) -> String {
		self.conn.quote_table_name(&self.table)
	}

	/// Replace the FROM source with a raw SQL fragment.
	pub fn from(mut self, source: impl Into<String>) -> Self {
		self.from = Some(source.into());
		self
	}

	/// Add a raw SQL condition, combined with `AND` when one is already set.
	pub fn cond(mut self, cond: impl Into<String>) -> Self {
		let cond = cond.into();
		self.cond = Some(match self.cond.take() {
			Some(prev) => format!("({prev}) AND ({cond})"),
			None => cond,
		});
		self
	}

	pub fn limit(mut self, limit: u64) -> Self {
		self.limit = Some(limit);
		self
	}
}

impl IndexHintable for SelectStatement<'_> {
	fn use_index<I>(self, hints: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Hint>,
	{
		let hints: Vec<Hint> = hints.into_iter().map(Into::into).collect();
		let resolver = IndexResolver::for_table(self.conn.schema_cache(), &self.table, hints);
		let from = idx::apply(&self.quoted_table_name(), &resolver, self.conn.supports_index_hints());
		self.from(from)
	}
}

impl Display for SelectStatement<'_> {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		let table = self.quoted_table_name();
		write!(f, "SELECT {table}.* FROM ")?;
		match &self.from {
			Some(from) => f.write_str(from)?,
			None => f.write_str(&table)?,
		}
		if let Some(cond) = &self.cond {
			write!(f, " WHERE {cond}")?;
		}
		if let Some(limit) = self.limit {
			write!(f, " LIMIT {limit}")?;
		}
		Ok(())
	}
}

impl fmt::Debug for SelectStatement<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("SelectStatement")
			.field("dialect", &self.conn.dialect())
			.field("table", &self.table)
			.field("from", &self.from)
			.field("cond", &self.cond)
			.field("limit", &self.limit)
			.finish()
	}
}
