use std::borrow::Borrow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::query::builder::Query;
use crate::query::entry::QueryEntry;
use crate::query::types::{Connective, Operator, Value};

/// A single transformation of a [`Query`].
///
/// Scalar variants overwrite their field, map variants overwrite per key and
/// the raw variants append in call order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "option", content = "value", rename_all = "snake_case")]
pub enum QueryOption {
    Active(bool),
    Deleted(bool),
    Shippable(bool),
    Id(String),
    PriceId(String),
    Description(String),
    Type(String),
    Currency(String),
    Created(i64),
    Metadata { key: String, value: String },
    MetadataMap(IndexMap<String, String>),
    Custom { key: String, value: Value },
    RawString(String),
    Entry(QueryEntry),
    Connective(Connective),
}

impl QueryOption {
    pub fn apply(&self, mut query: Query) -> Query {
        match self {
            QueryOption::Active(active) => query.set_active(*active),
            QueryOption::Deleted(deleted) => query.set_deleted(*deleted),
            QueryOption::Shippable(shippable) => query.set_shippable(*shippable),
            QueryOption::Id(id) => query.set_id(id.clone()),
            QueryOption::PriceId(price_id) => query.set_price_id(price_id.clone()),
            QueryOption::Description(description) => {
                query.set_description(description.clone())
            }
            QueryOption::Type(kind) => query.set_kind(kind.clone()),
            QueryOption::Currency(currency) => query.set_currency(currency.clone()),
            QueryOption::Created(created) => query.set_created(*created),
            QueryOption::Metadata { key, value } => {
                query.metadata.insert(key.clone(), value.clone());
            }
            QueryOption::MetadataMap(map) => {
                for (key, value) in map {
                    query.metadata.insert(key.clone(), value.clone());
                }
            }
            QueryOption::Custom { key, value } => query.set_custom(key, value),
            QueryOption::RawString(raw) => query.raw_strings.push(raw.clone()),
            QueryOption::Entry(entry) => query.entries.push(entry.clone()),
            QueryOption::Connective(connective) => query.connective = *connective,
        }
        query
    }
}

/// Applies `options` to `query` in order.
pub fn fold_options<I>(query: Query, options: I) -> Query
where
    I: IntoIterator,
    I::Item: Borrow<QueryOption>,
{
    options
        .into_iter()
        .fold(query, |query, option| option.borrow().apply(query))
}

pub fn with_active(active: bool) -> QueryOption {
    QueryOption::Active(active)
}

pub fn with_deleted(deleted: bool) -> QueryOption {
    QueryOption::Deleted(deleted)
}

pub fn with_shippable(shippable: bool) -> QueryOption {
    QueryOption::Shippable(shippable)
}

pub fn with_id(id: impl Into<String>) -> QueryOption {
    QueryOption::Id(id.into())
}

/// Filters on `default_price.id`.
pub fn with_price_id(price_id: impl Into<String>) -> QueryOption {
    QueryOption::PriceId(price_id.into())
}

pub fn with_description(description: impl Into<String>) -> QueryOption {
    QueryOption::Description(description.into())
}

pub fn with_type(kind: impl Into<String>) -> QueryOption {
    QueryOption::Type(kind.into())
}

pub fn with_currency(currency: impl Into<String>) -> QueryOption {
    QueryOption::Currency(currency.into())
}

/// Creation time as a unix timestamp.
pub fn with_created(created: i64) -> QueryOption {
    QueryOption::Created(created)
}

pub fn with_metadata(key: impl Into<String>, value: impl Into<String>) -> QueryOption {
    QueryOption::Metadata {
        key: key.into(),
        value: value.into(),
    }
}

/// Merges every pair into the metadata, overwriting existing keys.
pub fn with_metadata_map<I, K, V>(map: I) -> QueryOption
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    QueryOption::MetadataMap(
        map.into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect(),
    )
}

/// Arbitrary `key:'value'` filter for fields without a dedicated option.
///
/// A key naming a dedicated field (`active`, `id`, ...) shares that field's
/// slot, so the last of the two options wins.
pub fn with_custom(key: impl Into<String>, value: impl Into<Value>) -> QueryOption {
    QueryOption::Custom {
        key: key.into(),
        value: value.into(),
    }
}

/// Clause inserted verbatim.
pub fn with_raw_string(raw: impl Into<String>) -> QueryOption {
    QueryOption::RawString(raw.into())
}

pub fn with_entry(
    key: impl Into<String>,
    operator: Operator,
    value: impl Into<Value>,
) -> QueryOption {
    QueryOption::Entry(QueryEntry::new(key, operator, value))
}

pub fn with_raw_entry(entry: QueryEntry) -> QueryOption {
    QueryOption::Entry(entry)
}

/// Shorthand for `key:'null'`.
pub fn with_is_null(key: impl Into<String>) -> QueryOption {
    QueryOption::Entry(QueryEntry::is_null(key))
}

pub fn with_connective(connective: Connective) -> QueryOption {
    QueryOption::Connective(connective)
}
