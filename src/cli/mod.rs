mod abstraction;
mod indexes;
mod sql;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::cli::indexes::IndexesCommandArguments;
use crate::cli::sql::SqlCommandArguments;
use crate::cnf::{DEFAULT_LOG_LEVEL, PKG_NAME, PKG_VERSION};

const INFO: &str = "
Resolve MySQL index hints against a schema description and print the
hinted SELECT statement. Hints are index names, comma separated column
groups (author_id,name) or bracketed single columns ([isbn]).
";

#[derive(Parser, Debug)]
#[command(name = PKG_NAME, bin_name = PKG_NAME, version = PKG_VERSION)]
#[command(about = INFO, arg_required_else_help = true)]
struct Cli {
	#[arg(help = "The logging level for the command-line tool")]
	#[arg(env = "SQLHINT_LOG", short = 'l', long = "log", global = true)]
	#[arg(default_value = DEFAULT_LOG_LEVEL)]
	log: String,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
	#[command(about = "Print a SELECT statement with index hints applied")]
	Sql(SqlCommandArguments),
	#[command(about = "List the indexes defined on a table")]
	Indexes(IndexesCommandArguments),
}

pub fn init() -> ExitCode {
	// Parse the CLI arguments
	let args = Cli::parse();
	// Initialize logging before running the command
	if let Err(e) = crate::telemetry::builder().with_log_level(&args.log).init() {
		eprintln!("{e:#}");
		return ExitCode::FAILURE;
	}
	// Run the specified command
	let output = match args.command {
		Commands::Sql(args) => sql::init(args),
		Commands::Indexes(args) => indexes::init(args),
	};
	// Error and exit the programme
	if let Err(e) = output {
		eprintln!("{e:#}");
		ExitCode::FAILURE
	} else {
		ExitCode::SUCCESS
	}
}
