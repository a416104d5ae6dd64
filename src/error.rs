use std::fmt;
use thiserror::Error;

/// Failures detected while scanning expression text.
///
/// Every variant carries the 0-based character position in the original
/// input, whitespace included.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    #[error("malformed decimal number at position {position}")]
    MalformedDecimal { position: usize },

    #[error("closing parenthesis at position {position} has no matching opening parenthesis")]
    UnmatchedCloseParen { position: usize },

    #[error("parenthesis opened at position {position} is never closed")]
    UnclosedParen { position: usize },

    /// `symbol` is `None` when the expression is empty.
    #[error("{}", misplaced_operator(.symbol, .position))]
    MisplacedOperator {
        symbol: Option<char>,
        position: usize,
    },

    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("missing operator before position {position}")]
    MissingOperator { position: usize },

    #[error("empty parentheses at position {position}")]
    EmptyGroup { position: usize },
}

impl LexicalError {
    pub fn position(&self) -> usize {
        match self {
            LexicalError::MalformedDecimal { position }
            | LexicalError::UnmatchedCloseParen { position }
            | LexicalError::UnclosedParen { position }
            | LexicalError::MisplacedOperator { position, .. }
            | LexicalError::InvalidCharacter { position, .. }
            | LexicalError::MissingOperator { position }
            | LexicalError::EmptyGroup { position } => *position,
        }
    }
}

fn misplaced_operator(symbol: &Option<char>, position: &usize) -> String {
    match symbol {
        Some(symbol) => format!("operator '{symbol}' at position {position} is missing an operand"),
        None => "expression is empty".to_string(),
    }
}

/// The two stacks a reduction draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackKind {
    Values,
    Operators,
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackKind::Values => write!(f, "value"),
            StackKind::Operators => write!(f, "operator"),
        }
    }
}

/// Failures surfaced by [`evaluate`](crate::evaluate) and friends.
///
/// Apart from `Lexical`, these only occur for token sequences the built-in
/// tokenizer never produces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Lexical(#[from] LexicalError),

    #[error("unsupported operator '{symbol}'")]
    UnsupportedOperator { symbol: String },

    #[error("{stack} stack underflow")]
    StackUnderflow { stack: StackKind },

    #[error("closing parenthesis without a matching opening parenthesis")]
    UnmatchedCloseParen,

    #[error("opening parenthesis without a matching closing parenthesis")]
    UnclosedParen,

    #[error("invalid number literal '{literal}'")]
    InvalidNumber { literal: String },

    #[error("malformed expression: {remaining} values left after evaluation")]
    MalformedExpression { remaining: usize },
}
