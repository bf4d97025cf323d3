//! SQL generation for hinted `SELECT` statements.

pub(crate) mod escape;
mod hint;
mod select;
mod use_index;

pub use hint::Hint;
pub use select::SelectStatement;
pub use use_index::UseIndex;

/// A query which can be steered towards specific indexes.
pub trait IndexHintable: Sized {
	/// Hint the database to use the indexes selected by `hints`.
	///
	/// Hints which match no index are ignored, and on backends without index
	/// hint support the query is returned unchanged.
	fn use_index<I>(self, hints: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Hint>;
}
