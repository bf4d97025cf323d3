use std::convert::Infallible;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::catalog::IndexDefinition;

/// A caller supplied index hint.
///
/// A bare name is compared against index names first and, failing that,
/// against single-column indexes. A column group only ever matches an
/// index covering exactly the same set of columns.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Hint {
	Name(String),
	Columns(Vec<String>),
}

impl Hint {
	/// Does this hint select the given index?
	pub fn matches(&self, ix: &IndexDefinition) -> bool {
		self.matches_name(ix) || self.matches_columns(ix)
	}

	fn matches_name(&self, ix: &IndexDefinition) -> bool {
		match self {
			Self::Name(name) => *name == ix.name,
			Self::Columns(_) => false,
		}
	}

	fn matches_columns(&self, ix: &IndexDefinition) -> bool {
		let mut cols: Vec<&str> = match self {
			Self::Name(name) => vec![name.as_str()],
			Self::Columns(cols) => cols.iter().map(String::as_str).collect(),
		};
		cols.sort_unstable();
		cols == ix.sorted_cols()
	}
}

impl Display for Hint {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			// Names which read like a column group are shown quoted
			Self::Name(name) if name.contains([',', '[', ']']) => write!(f, "{name:?}"),
			Self::Name(name) => f.write_str(name),
			Self::Columns(cols) => write!(f, "[{}]", cols.join(",")),
		}
	}
}

/// Parses the textual form used on the command line: `a,b` and `[a]` are
/// column groups, anything else is a name.
impl FromStr for Hint {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		let inner = s.strip_prefix('[').and_then(|s| s.strip_suffix(']'));
		match inner {
			Some(inner) => Ok(Self::Columns(split_columns(inner))),
			None if s.contains(',') => Ok(Self::Columns(split_columns(s))),
			None => Ok(Self::Name(s.to_owned())),
		}
	}
}

fn split_columns(s: &str) -> Vec<String> {
	s.split(',').map(str::trim).filter(|c| !c.is_empty()).map(str::to_owned).collect()
}

impl From<&str> for Hint {
	fn from(v: &str) -> Self {
		Self::Name(v.to_owned())
	}
}

impl From<String> for Hint {
	fn from(v: String) -> Self {
		Self::Name(v)
	}
}

impl From<&String> for Hint {
	fn from(v: &String) -> Self {
		Self::Name(v.clone())
	}
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Hint {
	fn from(v: [S; N]) -> Self {
		Self::Columns(v.into_iter().map(Into::into).collect())
	}
}

impl<S: Into<String>> From<Vec<S>> for Hint {
	fn from(v: Vec<S>) -> Self {
		Self::Columns(v.into_iter().map(Into::into).collect())
	}
}

impl<S: AsRef<str>> From<&[S]> for Hint {
	fn from(v: &[S]) -> Self {
		Self::Columns(v.iter().map(|s| s.as_ref().to_owned()).collect())
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	fn books_on_author_id_and_name() -> IndexDefinition {
		IndexDefinition::new("index_books_on_author_id_and_name", ["author_id", "name"])
	}

	#[rstest]
	#[case::by_name(Hint::from("index_books_on_author_id_and_name"), true)]
	#[case::by_columns(Hint::from(["author_id", "name"]), true)]
	#[case::by_columns_any_order(Hint::from(["name", "author_id"]), true)]
	#[case::subset(Hint::from(["author_id"]), false)]
	#[case::superset(Hint::from(["author_id", "name", "isbn"]), false)]
	#[case::name_is_case_sensitive(Hint::from("INDEX_BOOKS_ON_AUTHOR_ID_AND_NAME"), false)]
	#[case::scalar_column_on_composite(Hint::from("author_id"), false)]
	fn matches_composite_index(#[case] hint: Hint, #[case] expected: bool) {
		assert_eq!(hint.matches(&books_on_author_id_and_name()), expected);
	}

	#[test]
	fn scalar_matches_single_column_index() {
		let ix = IndexDefinition::new("index_books_on_isbn", ["isbn"]);
		assert!(Hint::from("isbn").matches(&ix));
		assert!(Hint::from(["isbn"]).matches(&ix));
	}

	#[test]
	fn column_group_never_matches_by_name() {
		let ix = IndexDefinition::new("isbn", ["code"]);
		assert!(!Hint::from(["isbn"]).matches(&ix));
		assert!(Hint::from("isbn").matches(&ix));
	}

	#[rstest]
	#[case::name("idx_a", Hint::Name("idx_a".to_owned()))]
	#[case::columns("author_id,name", Hint::from(["author_id", "name"]))]
	#[case::columns_with_spaces(" author_id , name ", Hint::from(["author_id", "name"]))]
	#[case::bracketed_single("[isbn]", Hint::from(["isbn"]))]
	#[case::bracketed_pair("[author_id,name]", Hint::from(["author_id", "name"]))]
	fn parses_textual_hints(#[case] input: &str, #[case] expected: Hint) {
		assert_eq!(input.parse::<Hint>().unwrap(), expected);
	}

	#[test]
	fn displays_like_it_parses() {
		assert_eq!(Hint::from("idx_a").to_string(), "idx_a");
		assert_eq!(Hint::from(["a", "b"]).to_string(), "[a,b]");
	}

	#[test]
	fn quotes_names_that_look_like_column_groups() {
		assert_eq!(Hint::from("author_id,name").to_string(), "\"author_id,name\"");
		assert_eq!(Hint::from("[isbn]").to_string(), "\"[isbn]\"");
		assert_ne!(Hint::from("a,b").to_string(), Hint::from(["a", "b"]).to_string());
	}
}
