use crate::error::EvaluationError;
use std::fmt;

mod tokenizer;

pub use tokenizer::{Tokenize, Tokenizer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text, parsed when the evaluator pushes it.
    Number(String),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl Token {
    /// Builds a token from a single text lexeme such as `"("`, `"*"` or `"-2.5"`.
    ///
    /// Intended for alternative tokenizers that split text themselves. Anything
    /// that looks like an operator but is not in the operator table is rejected
    /// with `UnsupportedOperator`; number literals are checked later, when the
    /// evaluator parses them.
    pub fn from_lexeme(lexeme: &str) -> Result<Token, EvaluationError> {
        match lexeme {
            "(" => Ok(Token::LeftParen),
            ")" => Ok(Token::RightParen),
            _ if lexeme.starts_with(|c: char| c.is_ascii_digit() || c == '.')
                || (lexeme.len() > 1 && lexeme.starts_with('-')) =>
            {
                Ok(Token::Number(lexeme.to_string()))
            }
            _ => Operator::try_from(lexeme).map(Token::Operator),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(literal) => f.write_str(literal),
            Token::Operator(operator) => write!(f, "{operator}"),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Binding strength; higher binds tighter.
    pub fn priority(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }

    /// Division by zero is not trapped and yields `inf` or `NaN`.
    pub fn apply(self, first: f64, second: f64) -> f64 {
        match self {
            Operator::Add => first + second,
            Operator::Subtract => first - second,
            Operator::Multiply => first * second,
            Operator::Divide => first / second,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = EvaluationError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            _ => Err(EvaluationError::UnsupportedOperator {
                symbol: value.to_string(),
            }),
        }
    }
}

impl TryFrom<&str> for Operator {
    type Error = EvaluationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Operator::try_from(symbol),
            _ => Err(EvaluationError::UnsupportedOperator {
                symbol: value.to_string(),
            }),
        }
    }
}
