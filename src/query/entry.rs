use std::fmt;

use serde::{Deserialize, Serialize};

use crate::query::types::{Operator, Value};

/// Literal compared against by null checks.
pub const NULL_LITERAL: &str = "null";

/// A `key <op> 'value'` clause with an explicit operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryEntry {
    pub key: String,
    pub operator: Operator,
    pub value: Value,
}

impl QueryEntry {
    pub fn new(key: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            operator,
            value: value.into(),
        }
    }

    pub fn is_null(key: impl Into<String>) -> Self {
        Self::new(key, Operator::Equals, NULL_LITERAL)
    }
}

impl fmt::Display for QueryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operator.is_negated() {
            // -key:'v' / -key~'v'
            write!(
                f,
                "{}{}{}'{}'",
                self.operator.symbol(),
                self.key,
                self.operator.positive().symbol(),
                self.value
            )
        } else {
            write!(f, "{}{}'{}'", self.key, self.operator.symbol(), self.value)
        }
    }
}
