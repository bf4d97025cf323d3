use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cnf;

#[derive(Default, Debug, Clone)]
pub struct Builder {
	log_level: Option<String>,
}

pub fn builder() -> Builder {
	Builder::default()
}

impl Builder {
	/// Set the log level on the builder
	pub fn with_log_level(mut self, log_level: &str) -> Self {
		self.log_level = Some(log_level.to_owned());
		self
	}

	/// Build a tracing dispatcher with a fmt subscriber writing to stderr
	pub fn build(self) -> Result<Box<dyn Subscriber + Send + Sync + 'static>> {
		let level = self.log_level.as_deref().unwrap_or(cnf::DEFAULT_LOG_LEVEL);
		let filter = filter_from_value(level)
			.with_context(|| format!("Invalid log filter configuration '{level}'"))?;
		let registry = tracing_subscriber::registry().with(
			tracing_subscriber::fmt::layer()
				.compact()
				.with_ansi(*cnf::LOG_ANSI)
				.with_target(true)
				.with_span_events(FmtSpan::NONE)
				.with_writer(std::io::stderr)
				.with_filter(filter),
		);
		Ok(Box::new(registry))
	}

	/// Install the tracing pipeline as the global default
	pub fn init(self) -> Result<()> {
		self.build()?.try_init().context("Unable to initialise the tracing subscriber")
	}
}

/// Turn a level name into a filter scoped to our own crates. Anything else
/// is parsed as a full `EnvFilter` directive string.
pub fn filter_from_value(v: &str) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
	match v {
		// Don't show any logs at all
		"none" => EnvFilter::builder().parse("off"),
		// Show all logs from every crate
		"full" => EnvFilter::builder().parse("trace"),
		// Otherwise, only show logs from our crates at the given level
		"error" | "warn" | "info" | "debug" | "trace" => {
			EnvFilter::builder().parse(format!("error,sqlhint={v},sqlhint_core={v}"))
		}
		_ => EnvFilter::builder().parse(v),
	}
}
