use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::query::errors::{QueryError, QueryResult};

/// Boolean word placed between clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Connective {
    Unknown,
    #[default]
    And,
    Or,
}

impl Connective {
    pub fn as_str(&self) -> &'static str {
        match self {
            Connective::Unknown => "UNKNOWN",
            Connective::And => "AND",
            Connective::Or => "OR",
        }
    }

    /// Separator used between clauses, e.g. `" AND "`.
    pub fn separator(&self) -> String {
        format!(" {} ", self.as_str())
    }

    pub fn parse(input: &str) -> QueryResult<Self> {
        input.parse()
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Connective {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" => Ok(Connective::And),
            "OR" => Ok(Connective::Or),
            "UNKNOWN" => Ok(Connective::Unknown),
            _ => {
                warn!(target: "search_query::parse", token = s, "Unrecognized connective");
                Err(QueryError::InvalidConnectionType(s.to_string()))
            }
        }
    }
}

/// Comparison operator of an entry clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    #[default]
    Unknown,
    Equals,
    GreaterThan,
    LessThan,
    GreaterEqualThan,
    LessEqualThan,
    NotEqual,
    Like,
    NotLike,
}

impl Operator {
    pub const ALL: [Operator; 9] = [
        Operator::Unknown,
        Operator::Equals,
        Operator::GreaterThan,
        Operator::LessThan,
        Operator::GreaterEqualThan,
        Operator::LessEqualThan,
        Operator::NotEqual,
        Operator::Like,
        Operator::NotLike,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Unknown => "unknown",
            Operator::Equals => "equals",
            Operator::GreaterThan => "greater_than",
            Operator::LessThan => "less_than",
            Operator::GreaterEqualThan => "greater_equal_than",
            Operator::LessEqualThan => "less_equal_than",
            Operator::NotEqual => "not_equal",
            Operator::Like => "like",
            Operator::NotLike => "not_like",
        }
    }

    /// Token written into the query. Negated operators yield the `-` prefix.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Unknown => "unknown",
            Operator::Equals => ":",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterEqualThan => ">=",
            Operator::LessEqualThan => "<=",
            Operator::NotEqual | Operator::NotLike => "-",
            Operator::Like => "~",
        }
    }

    pub fn is_negated(&self) -> bool {
        matches!(self, Operator::NotEqual | Operator::NotLike)
    }

    /// Positive counterpart of a negated operator.
    pub fn positive(&self) -> Operator {
        match self {
            Operator::NotEqual => Operator::Equals,
            Operator::NotLike => Operator::Like,
            other => *other,
        }
    }

    pub fn parse(input: &str) -> QueryResult<Self> {
        input.parse()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        match Operator::ALL.iter().find(|op| op.as_str() == lowered) {
            Some(op) => Ok(*op),
            None => {
                warn!(target: "search_query::parse", token = s, "Unrecognized operator");
                Err(QueryError::InvalidOperator(s.to_string()))
            }
        }
    }
}

/// Value stored in custom fields and entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    /// Scalars yield themselves; lists are flattened depth-first.
    pub fn flatten(&self) -> Vec<&Value> {
        match self {
            Value::List(items) => items.iter().flat_map(Value::flatten).collect(),
            scalar => vec![scalar],
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
                f.write_str(&parts.join(","))
            }
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}
