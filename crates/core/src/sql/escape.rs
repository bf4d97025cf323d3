use std::fmt::{self, Write};

/// Forwards everything to `writer`, doubling every occurrence of the quote
/// character so that it cannot terminate the quoted identifier.
struct EscapeWriter<W> {
	quote: char,
	writer: W,
}

impl<W: fmt::Write> EscapeWriter<W> {
	fn escape(into: W, quote: char, s: &str) -> fmt::Result {
		Self {
			quote,
			writer: into,
		}
		.write_str(s)
	}
}

impl<W: fmt::Write> fmt::Write for EscapeWriter<W> {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		for c in s.chars() {
			self.write_char(c)?;
		}
		Ok(())
	}

	fn write_char(&mut self, c: char) -> fmt::Result {
		if c == self.quote {
			self.writer.write_char(c)?;
		}
		self.writer.write_char(c)
	}
}

/// Quotes a single identifier with the given quote character.
pub struct QuoteIdent<'a> {
	pub quote: char,
	pub ident: &'a str,
}

impl fmt::Display for QuoteIdent<'_> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_char(self.quote)?;
		EscapeWriter::escape(&mut *f, self.quote, self.ident)?;
		f.write_char(self.quote)
	}
}

/// Quotes a possibly schema-qualified table name, e.g. `db.books`
/// becomes `` `db`.`books` ``.
pub struct QuoteTableName<'a> {
	pub quote: char,
	pub name: &'a str,
}

impl fmt::Display for QuoteTableName<'_> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for (i, part) in self.name.split('.').enumerate() {
			if i > 0 {
				f.write_char('.')?;
			}
			QuoteIdent {
				quote: self.quote,
				ident: part,
			}
			.fmt(f)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case::plain('`', "books", "`books`")]
	#[case::embedded_quote('`', "bo`oks", "`bo``oks`")]
	#[case::double_quote('"', "bo\"oks", "\"bo\"\"oks\"")]
	#[case::other_quote_untouched('"', "bo`oks", "\"bo`oks\"")]
	#[case::empty('`', "", "``")]
	fn quote_ident(#[case] quote: char, #[case] ident: &str, #[case] expected: &str) {
		assert_eq!(
			QuoteIdent {
				quote,
				ident
			}
			.to_string(),
			expected
		);
	}

	#[rstest]
	#[case::unqualified('`', "books", "`books`")]
	#[case::qualified('`', "library.books", "`library`.`books`")]
	#[case::qualified_pg('"', "public.books", "\"public\".\"books\"")]
	fn quote_table_name(#[case] quote: char, #[case] name: &str, #[case] expected: &str) {
		assert_eq!(
			QuoteTableName {
				quote,
				name
			}
			.to_string(),
			expected
		);
	}
}
