//! Typed builder for search query strings of the form
//! `field:'value' AND metadata['key']:'value' AND amount>'100'`.
//!
//! ```
//! use search_query::query::{QueryDefaults, Operator, with_active, with_entry, with_metadata};
//!
//! let query = QueryDefaults::default().string_query([
//!     with_active(true),
//!     with_metadata("order_id", "6735"),
//!     with_entry("amount", Operator::GreaterThan, 100),
//! ]);
//! assert_eq!(
//!     query,
//!     "active:'true' AND metadata['order_id']:'6735' AND amount>'100'"
//! );
//! ```

pub mod logging;
pub mod query;
pub mod shared;

pub use query::{
    CompoundQuery, Connective, Operator, Query, QueryDefaults, QueryEntry, QueryError,
    QueryOption, Value,
};
