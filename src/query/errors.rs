use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("INVALID_OPERATOR: '{0}'")]
    InvalidOperator(String),

    #[error("INVALID_CONNECTION_TYPE: '{0}'")]
    InvalidConnectionType(String),
}

impl QueryError {
    /// Bare error code, without the offending token.
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::InvalidOperator(_) => "INVALID_OPERATOR",
            QueryError::InvalidConnectionType(_) => "INVALID_CONNECTION_TYPE",
        }
    }
}

pub type QueryResult<T> = Result<T, QueryError>;
