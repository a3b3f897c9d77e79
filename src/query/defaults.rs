use std::borrow::Borrow;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::query::builder::Query;
use crate::query::options::{QueryOption, fold_options};
use crate::query::types::Connective;

/// Ordered options applied to every query before the caller's own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryDefaults {
    options: Vec<QueryOption>,
}

impl QueryDefaults {
    pub fn new(options: impl IntoIterator<Item = QueryOption>) -> Self {
        Self {
            options: options.into_iter().collect(),
        }
    }

    pub fn options(&self) -> &[QueryOption] {
        &self.options
    }

    pub fn set(&mut self, options: impl IntoIterator<Item = QueryOption>) {
        self.options = options.into_iter().collect();
    }

    pub fn reset(&mut self) {
        self.options.clear();
    }

    /// Query joined with `connective`: the connective is set first, then the
    /// defaults, then `options`.
    pub fn collection<I>(&self, connective: Connective, options: I) -> Query
    where
        I: IntoIterator,
        I::Item: Borrow<QueryOption>,
    {
        let base = Query {
            connective,
            ..Query::default()
        };
        let query = fold_options(fold_options(base, &self.options), options);
        debug!(
            target: "search_query::build",
            defaults = self.options.len(),
            connective = %query.connective(),
            "Built query"
        );
        query
    }

    pub fn query<I>(&self, options: I) -> Query
    where
        I: IntoIterator,
        I::Item: Borrow<QueryOption>,
    {
        self.collection(Connective::And, options)
    }

    pub fn string_query<I>(&self, options: I) -> String
    where
        I: IntoIterator,
        I::Item: Borrow<QueryOption>,
    {
        self.query(options).to_string()
    }
}

static DEFAULTS: Lazy<RwLock<QueryDefaults>> = Lazy::new(|| RwLock::new(QueryDefaults::default()));

/// Snapshot of the process-wide defaults.
pub fn global_defaults() -> QueryDefaults {
    DEFAULTS.read().clone()
}

pub fn get_default_options() -> Vec<QueryOption> {
    DEFAULTS.read().options().to_vec()
}

pub fn set_default_options(options: impl IntoIterator<Item = QueryOption>) {
    let mut defaults = DEFAULTS.write();
    defaults.set(options);
    info!(
        target: "search_query::defaults",
        count = defaults.options().len(),
        "Default query options replaced"
    );
}

pub fn reset_default_options() {
    DEFAULTS.write().reset();
    info!(target: "search_query::defaults", "Default query options cleared");
}
