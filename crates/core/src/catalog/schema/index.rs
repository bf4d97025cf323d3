use std::fmt::{self, Display, Formatter};

use serde::Deserialize;

/// A single index as reported by the schema cache.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Deserialize)]
pub struct IndexDefinition {
	pub name: String,
	#[serde(rename = "columns")]
	pub cols: Vec<String>,
	#[serde(default)]
	pub unique: bool,
}

impl IndexDefinition {
	pub fn new<N, I, C>(name: N, cols: I) -> Self
	where
		N: Into<String>,
		I: IntoIterator<Item = C>,
		C: Into<String>,
	{
		Self {
			name: name.into(),
			cols: cols.into_iter().map(Into::into).collect(),
			unique: false,
		}
	}

	pub fn with_unique(mut self, unique: bool) -> Self {
		self.unique = unique;
		self
	}

	/// The indexed columns in lexicographic order.
	pub fn sorted_cols(&self) -> Vec<&str> {
		let mut cols: Vec<&str> = self.cols.iter().map(String::as_str).collect();
		cols.sort_unstable();
		cols
	}
}

impl Display for IndexDefinition {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{} ({})", self.name, self.cols.join(", "))?;
		if self.unique {
			f.write_str(" UNIQUE")?;
		}
		Ok(())
	}
}
