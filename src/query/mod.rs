pub mod builder;
pub mod compound;
pub mod defaults;
pub mod entry;
pub mod errors;
pub mod options;
pub mod types;

pub use builder::{Query, fields, new_string_query};
pub use compound::{
    CompoundQuery, and, new_and_query, new_and_string_query, new_compound_string_query,
    new_or_query, new_or_string_query, or,
};
pub use defaults::{
    QueryDefaults, get_default_options, global_defaults, reset_default_options,
    set_default_options,
};
pub use entry::{NULL_LITERAL, QueryEntry};
pub use errors::{QueryError, QueryResult};
pub use options::*;
pub use types::{Connective, Operator, Value};

#[cfg(test)]
mod builder_tests;
#[cfg(test)]
mod options_tests;

/// Serializes tests that touch the process-wide default options.
#[cfg(test)]
pub(crate) static DEFAULTS_TEST_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());
