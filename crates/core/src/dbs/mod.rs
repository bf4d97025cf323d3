//! The database connection as seen by the query builder.

mod dialect;
mod session;

pub use dialect::Dialect;
pub use session::{Connection, Session};
