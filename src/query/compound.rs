use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::query::builder::Query;
use crate::query::defaults;
use crate::query::options::QueryOption;
use crate::query::types::Connective;

/// Several queries, each parenthesised, joined by an outer connective:
/// `(a AND b) OR (c)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompoundQuery {
    pub connective: Connective,
    pub collections: Vec<Query>,
}

impl CompoundQuery {
    pub fn new(connective: Connective, collections: impl IntoIterator<Item = Query>) -> Self {
        Self {
            connective,
            collections: collections.into_iter().collect(),
        }
    }

    pub fn push(mut self, collection: Query) -> Self {
        self.collections.push(collection);
        self
    }
}

impl fmt::Display for CompoundQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<String> = self.collections.iter().map(Query::grouped).collect();
        f.write_str(&groups.join(&self.connective.separator()))
    }
}

/// Collection whose clauses are joined with AND.
pub fn and<I>(options: I) -> Query
where
    I: IntoIterator,
    I::Item: Borrow<QueryOption>,
{
    defaults::global_defaults().collection(Connective::And, options)
}

/// Collection whose clauses are joined with OR.
pub fn or<I>(options: I) -> Query
where
    I: IntoIterator,
    I::Item: Borrow<QueryOption>,
{
    defaults::global_defaults().collection(Connective::Or, options)
}

/// Single AND collection; the outer connective is left unset.
pub fn new_and_query<I>(options: I) -> CompoundQuery
where
    I: IntoIterator,
    I::Item: Borrow<QueryOption>,
{
    CompoundQuery::new(Connective::Unknown, [and(options)])
}

/// Single OR collection; the outer connective is left unset.
pub fn new_or_query<I>(options: I) -> CompoundQuery
where
    I: IntoIterator,
    I::Item: Borrow<QueryOption>,
{
    CompoundQuery::new(Connective::Unknown, [or(options)])
}

pub fn new_compound_string_query(
    connective: Connective,
    collections: impl IntoIterator<Item = Query>,
) -> String {
    CompoundQuery::new(connective, collections).to_string()
}

pub fn new_and_string_query<I>(options: I) -> String
where
    I: IntoIterator,
    I::Item: Borrow<QueryOption>,
{
    new_and_query(options).to_string()
}

pub fn new_or_string_query<I>(options: I) -> String
where
    I: IntoIterator,
    I::Item: Borrow<QueryOption>,
{
    new_or_query(options).to_string()
}
