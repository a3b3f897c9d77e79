use std::borrow::Borrow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::query::defaults;
use crate::query::entry::QueryEntry;
use crate::query::options::{QueryOption, fold_options};
use crate::query::types::{Connective, Value};

/// Field names emitted by the dedicated options.
pub mod fields {
    pub const ID: &str = "id";
    pub const ACTIVE: &str = "active";
    pub const DELETED: &str = "deleted";
    pub const SHIPPABLE: &str = "shippable";
    pub const CREATED: &str = "created";
    pub const DESCRIPTION: &str = "description";
    pub const TYPE: &str = "type";
    pub const CURRENCY: &str = "currency";
    pub const PRICE_ID: &str = "default_price.id";
    pub const METADATA: &str = "metadata";
}

/// Accumulated filter state of one query.
///
/// Options consume a `Query` and hand back the updated value, so a partly
/// configured query can be cloned and reused as a template via [`Query::with`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub(crate) id: Option<String>,
    pub(crate) active: Option<bool>,
    pub(crate) deleted: Option<bool>,
    pub(crate) shippable: Option<bool>,
    pub(crate) created: Option<i64>,
    pub(crate) description: Option<String>,
    pub(crate) kind: Option<String>,
    pub(crate) currency: Option<String>,
    pub(crate) price_id: Option<String>,
    pub(crate) metadata: IndexMap<String, String>,
    pub(crate) custom: IndexMap<String, Value>,
    pub(crate) raw_strings: Vec<String>,
    pub(crate) entries: Vec<QueryEntry>,
    pub(crate) connective: Connective,
}

impl Query {
    /// A query with nothing set and no defaults applied.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Applies the process-wide default options, then `options`.
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<QueryOption>,
    {
        defaults::global_defaults().query(options)
    }

    /// Copy of this query with `options` applied on top.
    pub fn with<I>(&self, options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<QueryOption>,
    {
        fold_options(self.clone(), options)
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn active(&self) -> Option<bool> {
        self.active
    }

    pub fn deleted(&self) -> Option<bool> {
        self.deleted
    }

    pub fn shippable(&self) -> Option<bool> {
        self.shippable
    }

    pub fn created(&self) -> Option<i64> {
        self.created
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn price_id(&self) -> Option<&str> {
        self.price_id.as_deref()
    }

    pub fn metadata(&self) -> &IndexMap<String, String> {
        &self.metadata
    }

    pub fn custom(&self) -> &IndexMap<String, Value> {
        &self.custom
    }

    pub fn raw_strings(&self) -> &[String] {
        &self.raw_strings
    }

    pub fn entries(&self) -> &[QueryEntry] {
        &self.entries
    }

    pub fn connective(&self) -> Connective {
        self.connective
    }

    pub fn is_empty(&self) -> bool {
        self.clauses().is_empty()
    }

    /// Rendered clauses in output order, before joining.
    pub fn clauses(&self) -> Vec<String> {
        let mut clauses = Vec::new();

        if let Some(id) = &self.id {
            clauses.push(field_clause(fields::ID, id));
        }

        for (key, flag) in [
            (fields::ACTIVE, self.active),
            (fields::DELETED, self.deleted),
            (fields::SHIPPABLE, self.shippable),
        ] {
            if let Some(flag) = flag {
                clauses.push(field_clause(key, flag));
            }
        }

        if let Some(created) = self.created {
            clauses.push(field_clause(fields::CREATED, created));
        }

        for (key, value) in [
            (fields::DESCRIPTION, &self.description),
            (fields::TYPE, &self.kind),
            (fields::CURRENCY, &self.currency),
            (fields::PRICE_ID, &self.price_id),
        ] {
            if let Some(value) = value {
                clauses.push(field_clause(key, value));
            }
        }

        for (key, value) in &self.metadata {
            clauses.push(format!("{}['{}']:'{}'", fields::METADATA, key, value));
        }

        // A list value yields one clause per element.
        for (key, value) in &self.custom {
            for item in value.flatten() {
                clauses.push(field_clause(key, item));
            }
        }

        clauses.extend(self.raw_strings.iter().cloned());
        clauses.extend(self.entries.iter().map(ToString::to_string));

        trace!(
            target: "search_query::render",
            clauses = clauses.len(),
            connective = %self.connective,
            "Rendered query clauses"
        );
        clauses
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.custom.shift_remove(fields::ACTIVE);
        self.active = Some(active);
    }

    pub(crate) fn set_deleted(&mut self, deleted: bool) {
        self.custom.shift_remove(fields::DELETED);
        self.deleted = Some(deleted);
    }

    pub(crate) fn set_shippable(&mut self, shippable: bool) {
        self.custom.shift_remove(fields::SHIPPABLE);
        self.shippable = Some(shippable);
    }

    pub(crate) fn set_created(&mut self, created: i64) {
        self.custom.shift_remove(fields::CREATED);
        self.created = Some(created);
    }

    pub(crate) fn set_id(&mut self, id: String) {
        self.custom.shift_remove(fields::ID);
        self.id = Some(id);
    }

    pub(crate) fn set_description(&mut self, description: String) {
        self.custom.shift_remove(fields::DESCRIPTION);
        self.description = Some(description);
    }

    pub(crate) fn set_kind(&mut self, kind: String) {
        self.custom.shift_remove(fields::TYPE);
        self.kind = Some(kind);
    }

    pub(crate) fn set_currency(&mut self, currency: String) {
        self.custom.shift_remove(fields::CURRENCY);
        self.currency = Some(currency);
    }

    pub(crate) fn set_price_id(&mut self, price_id: String) {
        self.custom.shift_remove(fields::PRICE_ID);
        self.price_id = Some(price_id);
    }

    /// Stores a custom filter. Keys owned by a dedicated field land in that
    /// field when the value has the field's type; any other value replaces
    /// the field with a custom clause, so one key never renders twice.
    pub(crate) fn set_custom(&mut self, key: &str, value: &Value) {
        match (key, value) {
            (fields::ACTIVE, Value::Bool(b)) => return self.set_active(*b),
            (fields::DELETED, Value::Bool(b)) => return self.set_deleted(*b),
            (fields::SHIPPABLE, Value::Bool(b)) => return self.set_shippable(*b),
            (fields::CREATED, Value::Int(i)) => return self.set_created(*i),
            (fields::ID, Value::Str(s)) => return self.set_id(s.clone()),
            (fields::DESCRIPTION, Value::Str(s)) => return self.set_description(s.clone()),
            (fields::TYPE, Value::Str(s)) => return self.set_kind(s.clone()),
            (fields::CURRENCY, Value::Str(s)) => return self.set_currency(s.clone()),
            (fields::PRICE_ID, Value::Str(s)) => return self.set_price_id(s.clone()),
            (fields::ACTIVE, _) => self.active = None,
            (fields::DELETED, _) => self.deleted = None,
            (fields::SHIPPABLE, _) => self.shippable = None,
            (fields::CREATED, _) => self.created = None,
            (fields::ID, _) => self.id = None,
            (fields::DESCRIPTION, _) => self.description = None,
            (fields::TYPE, _) => self.kind = None,
            (fields::CURRENCY, _) => self.currency = None,
            (fields::PRICE_ID, _) => self.price_id = None,
            _ => {}
        }
        self.custom.insert(key.to_string(), value.clone());
    }

    /// The query wrapped in parentheses, as used inside compound queries.
    pub fn grouped(&self) -> String {
        format!("({})", self)
    }
}

fn field_clause(key: &str, value: impl fmt::Display) -> String {
    format!("{}:'{}'", key, value)
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clauses().join(&self.connective.separator()))
    }
}

/// Builds a query with the process-wide defaults and renders it.
pub fn new_string_query<I>(options: I) -> String
where
    I: IntoIterator,
    I::Item: Borrow<QueryOption>,
{
    Query::new(options).to_string()
}
