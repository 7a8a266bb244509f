use patmatch_value::ValueError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("no case matched value of type {kind}")]
    NoMatch { kind: &'static str },

    #[error("invalid regex: {0}")]
    InvalidRegex(String),

    #[error(transparent)]
    Value(#[from] ValueError),
}

pub type Result<T> = std::result::Result<T, MatchError>;
