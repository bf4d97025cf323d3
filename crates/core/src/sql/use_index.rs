use std::fmt::{self, Display, Formatter};

/// A MySQL `USE INDEX (...)` table hint.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UseIndex<'a>(&'a [String]);

impl<'a> UseIndex<'a> {
	/// An empty index list yields no hint at all.
	pub fn new(names: &'a [String]) -> Option<Self> {
		if names.is_empty() {
			None
		} else {
			Some(Self(names))
		}
	}
}

impl Display for UseIndex<'_> {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str("USE INDEX (")?;
		f.write_str(&self.0.join(","))?;
		f.write_str(")")
	}
}
