use crate::error::EvaluationError;
use crate::eval::Evaluator;
use crate::token::Tokenize;
use log::debug;
use rayon::prelude::*;

impl<T: Tokenize + Sync> Evaluator<T> {
    /// Evaluates independent expressions in parallel on the rayon pool.
    ///
    /// Results come back in input order; a failing expression does not affect
    /// the others.
    pub fn evaluate_batch<S>(&self, expressions: &[S]) -> Vec<Result<f64, EvaluationError>>
    where
        S: AsRef<str> + Sync,
    {
        debug!("Evaluating batch of {} expressions", expressions.len());
        expressions
            .par_iter()
            .map(|expression| self.evaluate(expression.as_ref()))
            .collect()
    }
}
