use crate::error::{EvaluationError, StackKind};
use crate::token::Operator;
use log::trace;

/// Entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pending {
    Operator(Operator),
    Group,
}

/// The value and operator stacks for a single evaluation.
#[derive(Debug, Default)]
pub(crate) struct Stacks {
    values: Vec<f64>,
    operators: Vec<Pending>,
}

impl Stacks {
    pub fn push_literal(&mut self, literal: &str) -> Result<(), EvaluationError> {
        let value = literal
            .parse::<f64>()
            .map_err(|_| EvaluationError::InvalidNumber {
                literal: literal.to_string(),
            })?;
        self.values.push(value);
        Ok(())
    }

    pub fn open_group(&mut self) {
        self.operators.push(Pending::Group);
    }

    /// Reduces back to the innermost open group and discards its marker.
    pub fn close_group(&mut self) -> Result<(), EvaluationError> {
        loop {
            match self.operators.last() {
                Some(Pending::Group) => {
                    self.operators.pop();
                    return Ok(());
                }
                Some(Pending::Operator(_)) => self.reduce()?,
                None => return Err(EvaluationError::UnmatchedCloseParen),
            }
        }
    }

    /// Reduces every pending operator that binds at least as tightly as
    /// `operator`, then pushes it. Equal priority reduces first, which makes
    /// all operators left-associative.
    pub fn push_operator(&mut self, operator: Operator) -> Result<(), EvaluationError> {
        while let Some(Pending::Operator(top)) = self.operators.last() {
            if top.priority() < operator.priority() {
                break;
            }
            self.reduce()?;
        }
        self.operators.push(Pending::Operator(operator));
        Ok(())
    }

    /// Pops two operands and one operator and pushes the result.
    pub fn reduce(&mut self) -> Result<(), EvaluationError> {
        let second = self.pop_value()?;
        let first = self.pop_value()?;
        let operator = match self.operators.pop() {
            Some(Pending::Operator(operator)) => operator,
            Some(Pending::Group) => return Err(EvaluationError::UnclosedParen),
            None => {
                return Err(EvaluationError::StackUnderflow {
                    stack: StackKind::Operators,
                })
            }
        };

        let result = operator.apply(first, second);
        trace!("Reduced {} {} {} = {}", first, operator, second, result);
        self.values.push(result);
        Ok(())
    }

    /// Drains the operator stack and returns the single remaining value.
    pub fn finish(mut self) -> Result<f64, EvaluationError> {
        while let Some(pending) = self.operators.last() {
            if *pending == Pending::Group {
                return Err(EvaluationError::UnclosedParen);
            }
            self.reduce()?;
        }

        match self.values.as_slice() {
            [value] => Ok(*value),
            values => Err(EvaluationError::MalformedExpression {
                remaining: values.len(),
            }),
        }
    }

    fn pop_value(&mut self) -> Result<f64, EvaluationError> {
        self.values.pop().ok_or(EvaluationError::StackUnderflow {
            stack: StackKind::Values,
        })
    }
}
