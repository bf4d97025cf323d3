/// A macro that allows lazily parsing a value from the environment variable,
/// with a fallback default value if the variable is not set or parsing fails.
///
/// # Parameters
///
/// - `$key`: An expression representing the name of the environment variable.
/// - `$t`: The type of the value to be parsed.
/// - `$default`: The default value to fall back to if the environment variable is not set or
///   parsing fails.
///
/// # Return Value
///
/// A lazy static variable of type `std::sync::LazyLock`, which holds the parsed
/// value from the environment variable or the default value.
#[macro_export]
macro_rules! lazy_env_parse {
	// With no default specified
	($key:expr, Option<String>) => {
		std::sync::LazyLock::new(|| std::env::var($key).ok())
	};
	// With a closure for the default value
	($key:expr, $t:ty, || $default:expr) => {
		std::sync::LazyLock::new(|| {
			std::env::var($key).ok().and_then(|s| s.parse::<$t>().ok()).unwrap_or_else(|| $default)
		})
	};
	// With a static expression for the default value
	($key:expr, $t:ty, $default:expr) => {
		std::sync::LazyLock::new(|| {
			std::env::var($key).ok().and_then(|s| s.parse::<$t>().ok()).unwrap_or($default)
		})
	};
}

/// Builds a `Vec<Hint>` from a mixed list of index names and column groups.
///
/// A bare string becomes a [`Hint::Name`](crate::sql::Hint::Name), an array
/// or vector of strings becomes a [`Hint::Columns`](crate::sql::Hint::Columns).
///
/// ```
/// use sqlhint_core::hints;
/// use sqlhint_core::sql::Hint;
///
/// let hints = hints!["idx_a", ["author_id", "name"]];
/// assert_eq!(hints[0], Hint::Name("idx_a".to_owned()));
/// assert_eq!(hints[1], Hint::Columns(vec!["author_id".to_owned(), "name".to_owned()]));
/// ```
#[macro_export]
macro_rules! hints {
	() => {
		::std::vec::Vec::<$crate::sql::Hint>::new()
	};
	($($hint:expr),+ $(,)?) => {
		::std::vec![$($crate::sql::Hint::from($hint)),+]
	};
}
