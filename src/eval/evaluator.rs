use crate::error::EvaluationError;
use crate::eval::stack::Stacks;
use crate::token::{Token, Tokenize, Tokenizer};
use log::debug;

/// Evaluates a token sequence with operator-precedence reduction over two
/// stacks, without building a parse tree.
///
/// Accepts any token source. Sequences that the built-in tokenizer would never
/// produce fail with a structural error instead of yielding a wrong value.
pub fn evaluate_tokens<I>(tokens: I) -> Result<f64, EvaluationError>
where
    I: IntoIterator<Item = Token>,
{
    let mut stacks = Stacks::default();

    for token in tokens {
        match token {
            Token::LeftParen => stacks.open_group(),
            Token::RightParen => stacks.close_group()?,
            Token::Operator(operator) => stacks.push_operator(operator)?,
            Token::Number(literal) => stacks.push_literal(&literal)?,
        }
    }

    let result = stacks.finish()?;
    debug!("Evaluation result: {}", result);
    Ok(result)
}

/// Tokenizes and evaluates expressions.
///
/// Holds no per-call state, so one instance can be shared freely between
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Evaluator<T = Tokenizer> {
    tokenizer: T,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Tokenize> Evaluator<T> {
    pub fn with_tokenizer(tokenizer: T) -> Self {
        Self { tokenizer }
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// Evaluates a given expression string.
    ///
    /// # Arguments
    ///
    /// * `expression` - The arithmetic expression, e.g. `"(1 + 2) * 3"`.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` if tokenizing and evaluation succeed.
    /// * `Err(EvaluationError)` with the first failure otherwise.
    pub fn evaluate(&self, expression: &str) -> Result<f64, EvaluationError> {
        debug!("Evaluating expression: {}", expression);
        let tokens = self
            .tokenizer
            .tokenize(expression)
            .map_err(Into::<EvaluationError>::into)?;
        evaluate_tokens(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LexicalError, StackKind};
    use crate::token::Operator;

    fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
        Evaluator::new().evaluate(expression)
    }

    fn number(literal: &str) -> Token {
        Token::Number(literal.to_string())
    }

    /// Splits on whitespace and converts each lexeme with `Token::from_lexeme`.
    struct WhitespaceTokenizer;

    impl Tokenize for WhitespaceTokenizer {
        type Error = EvaluationError;

        fn tokenize(&self, expression: &str) -> Result<Vec<Token>, EvaluationError> {
            expression.split_whitespace().map(Token::from_lexeme).collect()
        }
    }

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("1+2*3"), Ok(7.0));
        assert_eq!(evaluate("2 + 3 * 4 - 5 / 5"), Ok(13.0));
    }

    #[test]
    fn test_grouping() {
        assert_eq!(evaluate("(1+2)*3"), Ok(9.0));
        assert_eq!(evaluate("((3 + 2) * (4 - 1)) / 5"), Ok(3.0));
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(evaluate("10-4-3"), Ok(3.0));
        assert_eq!(evaluate("64/4/2"), Ok(8.0));
        assert_eq!(evaluate("8/2*4"), Ok(16.0));
        assert_eq!(evaluate("1-2+3"), Ok(2.0));
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(evaluate("-5+3"), Ok(-2.0));
        assert_eq!(evaluate("3--5"), Ok(8.0));
        assert_eq!(evaluate("2*-3"), Ok(-6.0));
        assert_eq!(evaluate("(-2)*(-3)"), Ok(6.0));
    }

    #[test]
    fn test_negated_group() {
        assert_eq!(evaluate("-(2+3)"), Ok(-5.0));
        assert_eq!(evaluate("2/-(1+1)"), Ok(-1.0));
        assert_eq!(evaluate("-(2+3)*2"), Ok(-10.0));
        assert_eq!(evaluate("3--(1)"), Ok(4.0));
        assert_eq!(evaluate("-(-(4))"), Ok(4.0));
    }

    #[test]
    fn test_decimals() {
        assert_eq!(evaluate("1.5+2.5"), Ok(4.0));
        assert_eq!(evaluate("0.5 * 0.5"), Ok(0.25));
        assert_eq!(evaluate("3. + 1"), Ok(4.0));
    }

    #[test]
    fn test_large_nested_expression() {
        let expr = "((10 * (5 + 3)) / 4) - (2 * ((6 / 3) + (7 - 5)))";
        assert_eq!(evaluate(expr), Ok(12.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("10 / 0"), Ok(f64::INFINITY));
        assert_eq!(evaluate("-10 / 0"), Ok(f64::NEG_INFINITY));
        assert!(evaluate("0 / 0").unwrap().is_nan());
        assert!(evaluate("(1-1) / (2-2)").unwrap().is_nan());
    }

    #[test]
    fn test_deterministic() {
        let expr = "(0.1 + 0.2) * 3 / 7 - 1.1";
        let first = evaluate(expr).unwrap();
        let second = evaluate(expr).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_whitespace_irrelevance() {
        assert_eq!(evaluate("1 + 2"), evaluate("1+2"));
    }

    #[test]
    fn test_lexical_errors_propagate() {
        assert_eq!(
            evaluate("3.5.2"),
            Err(LexicalError::MalformedDecimal { position: 3 }.into())
        );
        assert!(matches!(
            evaluate(")1+2"),
            Err(EvaluationError::Lexical(
                LexicalError::UnmatchedCloseParen { .. }
            ))
        ));
        assert!(matches!(
            evaluate("(1+2"),
            Err(EvaluationError::Lexical(LexicalError::UnclosedParen { .. }))
        ));
        assert!(matches!(
            evaluate("1+"),
            Err(EvaluationError::Lexical(
                LexicalError::MisplacedOperator { .. }
            ))
        ));
        assert!(matches!(
            evaluate("1+2)"),
            Err(EvaluationError::Lexical(
                LexicalError::UnmatchedCloseParen { .. }
            ))
        ));
        assert!(matches!(
            evaluate("1 $ 2"),
            Err(EvaluationError::Lexical(
                LexicalError::InvalidCharacter { character: '$', .. }
            ))
        ));
    }

    #[test]
    fn test_evaluate_tokens_directly() {
        let tokens = vec![
            Token::LeftParen,
            number("1"),
            Token::Operator(Operator::Add),
            number("2"),
            Token::RightParen,
            Token::Operator(Operator::Multiply),
            number("3"),
        ];
        assert_eq!(evaluate_tokens(tokens), Ok(9.0));
    }

    #[test]
    fn test_foreign_tokens_missing_operand() {
        let tokens = vec![number("1"), Token::Operator(Operator::Add)];
        assert_eq!(
            evaluate_tokens(tokens),
            Err(EvaluationError::StackUnderflow {
                stack: StackKind::Values
            })
        );
    }

    #[test]
    fn test_foreign_tokens_unbalanced() {
        assert_eq!(
            evaluate_tokens(vec![number("1"), Token::RightParen]),
            Err(EvaluationError::UnmatchedCloseParen)
        );
        assert_eq!(
            evaluate_tokens(vec![Token::LeftParen, number("1")]),
            Err(EvaluationError::UnclosedParen)
        );
    }

    #[test]
    fn test_foreign_tokens_missing_operator() {
        assert_eq!(
            evaluate_tokens(vec![number("1"), number("2")]),
            Err(EvaluationError::MalformedExpression { remaining: 2 })
        );
        assert_eq!(
            evaluate_tokens(Vec::new()),
            Err(EvaluationError::MalformedExpression { remaining: 0 })
        );
    }

    #[test]
    fn test_foreign_tokens_bad_literal() {
        assert_eq!(
            evaluate_tokens(vec![number("abc")]),
            Err(EvaluationError::InvalidNumber {
                literal: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_substitute_tokenizer() {
        let evaluator = Evaluator::with_tokenizer(WhitespaceTokenizer);
        assert_eq!(evaluator.evaluate("( 1 + 2 ) * -3"), Ok(-9.0));
        assert_eq!(
            evaluator.evaluate("2 ^ 3"),
            Err(EvaluationError::UnsupportedOperator {
                symbol: "^".to_string()
            })
        );
        assert_eq!(
            evaluator.evaluate("1 +"),
            Err(EvaluationError::StackUnderflow {
                stack: StackKind::Values
            })
        );
    }

    #[test]
    fn test_evaluator_is_reusable() {
        let evaluator = Evaluator::new();
        assert!(evaluator.evaluate("1 +").is_err());
        assert_eq!(evaluator.evaluate("1 + 1"), Ok(2.0));
        assert_eq!(evaluator.evaluate("2 * 2"), Ok(4.0));
    }
}
