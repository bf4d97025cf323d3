use std::sync::LazyLock;

use sqlhint_core::lazy_env_parse;

/// The publicly visible name of the command-line tool
pub const PKG_NAME: &str = "sqlhint";

/// The version identifier of this build
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The log level used when none is given on the command line
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// The dialect assumed when none is given on the command line
pub const DEFAULT_DIALECT: &str = "mysql";

/// Should log output be coloured (defaults to true)
pub static LOG_ANSI: LazyLock<bool> = lazy_env_parse!("SQLHINT_LOG_ANSI", bool, true);
