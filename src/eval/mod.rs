//! Hand strength: a 7-card evaluator and the scoring modes built on it.

pub mod hand_eval;
pub mod scoring;

pub use hand_eval::{HandCategory, HandEvaluator, HandRank};
pub use scoring::{Scoring, PLACEHOLDER_MAX};
