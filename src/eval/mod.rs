mod batch;
mod evaluator;
mod stack;

pub use evaluator::{evaluate_tokens, Evaluator};
