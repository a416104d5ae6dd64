use crate::error::{EvaluationError, LexicalError};
use crate::token::{Operator, Token};
use log::debug;
use std::mem;

/// Turns expression text into the token sequence the evaluator consumes.
///
/// Implement this to plug an alternative lexer into
/// [`Evaluator::with_tokenizer`](crate::eval::Evaluator::with_tokenizer).
pub trait Tokenize {
    type Error: Into<EvaluationError>;

    fn tokenize(&self, expression: &str) -> Result<Vec<Token>, Self::Error>;
}

/// The built-in character-level tokenizer.
///
/// Whitespace is ignored entirely, so `"1 2"` scans as the literal `12`.
/// A unary minus directly before `(` is rewritten into `( -1 * ( ... ) )` so
/// that negated groups need no token kind of their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenize for Tokenizer {
    type Error = LexicalError;

    fn tokenize(&self, expression: &str) -> Result<Vec<Token>, LexicalError> {
        debug!("Tokenizing expression: {}", expression);

        let mut scanner = Scanner::default();
        for (position, c) in expression.chars().enumerate() {
            if !c.is_whitespace() {
                scanner.accept(c, position)?;
            }
        }

        let tokens = scanner.finish()?;
        debug!("Tokenized into {} tokens", tokens.len());
        Ok(tokens)
    }
}

/// Class of the last non-whitespace character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Previous {
    Digit,
    Point,
    Open,
    Close,
    Operator { operator: Operator, position: usize },
}

#[derive(Debug)]
struct Group {
    opened_at: usize,
    negated: bool,
}

#[derive(Debug, Default)]
struct Scanner {
    tokens: Vec<Token>,
    number: String,
    has_decimal: bool,
    groups: Vec<Group>,
    previous: Option<Previous>,
}

impl Scanner {
    fn accept(&mut self, c: char, position: usize) -> Result<(), LexicalError> {
        let previous = match c {
            '0'..='9' => {
                self.digit(c, position)?;
                Previous::Digit
            }
            '.' => {
                self.point(position)?;
                Previous::Point
            }
            '(' => {
                self.open(position)?;
                Previous::Open
            }
            ')' => {
                self.close(position)?;
                Previous::Close
            }
            '+' => self.operator(Operator::Add, position)?,
            '-' => self.operator(Operator::Subtract, position)?,
            '*' => self.operator(Operator::Multiply, position)?,
            '/' => self.operator(Operator::Divide, position)?,
            character => {
                return Err(LexicalError::InvalidCharacter {
                    character,
                    position,
                })
            }
        };

        self.previous = Some(previous);
        Ok(())
    }

    /// True once the pending literal holds at least one digit. A lone `-`
    /// is only the start of a literal.
    fn has_operand(&self) -> bool {
        self.number.bytes().any(|b| b.is_ascii_digit())
    }

    fn digit(&mut self, c: char, position: usize) -> Result<(), LexicalError> {
        if self.previous == Some(Previous::Close) {
            return Err(LexicalError::MissingOperator { position });
        }
        self.number.push(c);
        Ok(())
    }

    fn point(&mut self, position: usize) -> Result<(), LexicalError> {
        if self.has_decimal || !self.has_operand() {
            return Err(LexicalError::MalformedDecimal { position });
        }
        self.number.push('.');
        self.has_decimal = true;
        Ok(())
    }

    fn open(&mut self, position: usize) -> Result<(), LexicalError> {
        if self.previous == Some(Previous::Close) || self.has_operand() {
            return Err(LexicalError::MissingOperator { position });
        }

        let negated = self.number == "-";
        if negated {
            self.number.clear();
            self.tokens.extend([
                Token::LeftParen,
                Token::Number("-1".to_string()),
                Token::Operator(Operator::Multiply),
            ]);
        }

        self.tokens.push(Token::LeftParen);
        self.groups.push(Group {
            opened_at: position,
            negated,
        });
        self.has_decimal = false;
        Ok(())
    }

    fn close(&mut self, position: usize) -> Result<(), LexicalError> {
        let group = self
            .groups
            .pop()
            .ok_or(LexicalError::UnmatchedCloseParen { position })?;

        if !self.has_operand() {
            match self.previous {
                Some(Previous::Open) => {
                    return Err(LexicalError::EmptyGroup {
                        position: group.opened_at,
                    })
                }
                Some(Previous::Operator { operator, position }) => {
                    return Err(LexicalError::MisplacedOperator {
                        symbol: Some(operator.symbol()),
                        position,
                    })
                }
                _ => {}
            }
        }

        self.flush();
        self.tokens.push(Token::RightParen);
        if group.negated {
            self.tokens.push(Token::RightParen);
        }
        Ok(())
    }

    fn operator(&mut self, operator: Operator, position: usize) -> Result<Previous, LexicalError> {
        let unary = operator == Operator::Subtract
            && self.number.is_empty()
            && matches!(
                self.previous,
                None | Some(Previous::Open) | Some(Previous::Operator { .. })
            );

        if unary {
            self.number.push('-');
        } else {
            if self.has_operand() {
                self.flush();
            } else if self.previous != Some(Previous::Close) {
                return Err(LexicalError::MisplacedOperator {
                    symbol: Some(operator.symbol()),
                    position,
                });
            }
            self.tokens.push(Token::Operator(operator));
        }

        self.has_decimal = false;
        Ok(Previous::Operator { operator, position })
    }

    fn flush(&mut self) {
        if !self.number.is_empty() {
            self.tokens.push(Token::Number(mem::take(&mut self.number)));
        }
        self.has_decimal = false;
    }

    fn finish(mut self) -> Result<Vec<Token>, LexicalError> {
        if !self.has_operand() {
            match self.previous {
                None => {
                    return Err(LexicalError::MisplacedOperator {
                        symbol: None,
                        position: 0,
                    })
                }
                Some(Previous::Operator { operator, position }) => {
                    return Err(LexicalError::MisplacedOperator {
                        symbol: Some(operator.symbol()),
                        position,
                    })
                }
                _ => {}
            }
        }

        if let Some(group) = self.groups.last() {
            return Err(LexicalError::UnclosedParen {
                position: group.opened_at,
            });
        }

        self.flush();
        Ok(self.tokens)
    }
}
