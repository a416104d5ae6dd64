pub mod error;
pub mod eval;
pub mod token;

pub use error::{EvaluationError, LexicalError, StackKind};
pub use eval::{evaluate_tokens, Evaluator};
pub use token::{Operator, Token, Tokenize, Tokenizer};

/// Splits an expression into validated tokens.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, LexicalError> {
    Tokenizer.tokenize(expression)
}

/// Evaluates an arithmetic expression such as `"-(1.5 + 2) * 4"`.
///
/// ```
/// assert_eq!(stackcalc_rs::evaluate("(1 + 2) * 3"), Ok(9.0));
/// assert!(stackcalc_rs::evaluate("1 +").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
    Evaluator::new().evaluate(expression)
}

pub fn evaluate_batch<S>(expressions: &[S]) -> Vec<Result<f64, EvaluationError>>
where
    S: AsRef<str> + Sync,
{
    Evaluator::new().evaluate_batch(expressions)
}
