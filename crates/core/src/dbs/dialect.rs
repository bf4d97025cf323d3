use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::err::Error;
use crate::sql::escape::QuoteTableName;

/// The SQL dialect spoken by a database connection.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Dialect {
	#[default]
	MySql,
	MariaDb,
	Postgres,
	Sqlite,
}

impl Dialect {
	/// Does this backend understand `USE INDEX (...)` table hints?
	pub fn supports_index_hints(&self) -> bool {
		matches!(self, Self::MySql | Self::MariaDb)
	}

	/// The character used to quote identifiers.
	pub fn identifier_quote(&self) -> char {
		match self {
			Self::MySql | Self::MariaDb => '`',
			Self::Postgres | Self::Sqlite => '"',
		}
	}

	/// Quote a possibly schema-qualified table name.
	pub fn quote_table_name(&self, name: &str) -> String {
		QuoteTableName {
			quote: self.identifier_quote(),
			name,
		}
		.to_string()
	}
}

impl Display for Dialect {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Self::MySql => f.write_str("mysql"),
			Self::MariaDb => f.write_str("mariadb"),
			Self::Postgres => f.write_str("postgres"),
			Self::Sqlite => f.write_str("sqlite"),
		}
	}
}

impl FromStr for Dialect {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"mysql" | "mysql2" | "trilogy" => Ok(Self::MySql),
			"mariadb" => Ok(Self::MariaDb),
			"postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
			"sqlite" | "sqlite3" => Ok(Self::Sqlite),
			_ => Err(Error::InvalidDialect(s.to_owned())),
		}
	}
}
