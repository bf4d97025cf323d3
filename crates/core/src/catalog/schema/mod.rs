mod index;

pub use index::IndexDefinition;
