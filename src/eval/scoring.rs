//! Strength scores used to decide each trial.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::hand_eval::HandEvaluator;
use crate::cards::{Card, HoleCards};

/// Number of distinct 5-card hand ranks; the placeholder draws from `1..=PLACEHOLDER_MAX`.
pub const PLACEHOLDER_MAX: u32 = 7462;

/// How a hand's strength is scored at showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scoring {
    /// Rank the best 5-card hand out of hole cards plus board.
    #[default]
    Evaluator,
    /// Ignore the cards and draw a uniform score in `1..=7462`.
    ///
    /// Reproduces the legacy calculator, whose numbers depend only on the
    /// opponent count.
    Placeholder,
}

impl Scoring {
    /// Score one hand. Higher is stronger.
    #[inline]
    pub fn score<R: Rng + ?Sized>(&self, hole: &HoleCards, board: &[Card; 5], rng: &mut R) -> u32 {
        match self {
            Scoring::Evaluator => HandEvaluator::new().evaluate(hole, board).value(),
            Scoring::Placeholder => rng.gen_range(1..=PLACEHOLDER_MAX),
        }
    }
}
