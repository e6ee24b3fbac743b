//! Trial tallies and the percentages reported to callers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a single trial, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player's score beat every opponent.
    Win,
    /// Player's score equalled the best opponent score.
    Tie,
    /// Some opponent scored higher.
    Lose,
}

impl Outcome {
    /// Classify a trial from the player's score and the best opponent score.
    #[inline]
    pub fn from_scores(player: u32, best_opponent: u32) -> Self {
        if player > best_opponent {
            Outcome::Win
        } else if player == best_opponent {
            Outcome::Tie
        } else {
            Outcome::Lose
        }
    }
}

/// Raw win/tie/loss counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutcomeCounts {
    /// Trials the player won outright.
    pub wins: u64,
    /// Trials the player tied the best opponent.
    pub ties: u64,
    /// Trials the player lost.
    pub losses: u64,
}

impl OutcomeCounts {
    /// Record one trial.
    #[inline]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Lose => self.losses += 1,
        }
    }

    /// Number of trials recorded.
    pub fn trials(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    /// Add another tally into this one.
    pub fn merge(&mut self, other: &OutcomeCounts) {
        self.wins += other.wins;
        self.ties += other.ties;
        self.losses += other.losses;
    }
}

/// Win, tie and lose percentages for one query.
///
/// `lose` is derived as `100 - (win + tie)`, so the three always add up to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Percentage of trials won, in `[0, 100]`.
    pub win: f64,
    /// Percentage of trials tied, in `[0, 100]`.
    pub tie: f64,
    /// Percentage of trials lost, in `[0, 100]`.
    pub lose: f64,
}

impl SimulationResult {
    /// Convert counts into percentages. An empty tally reports a certain loss.
    pub fn from_counts(counts: &OutcomeCounts) -> Self {
        let trials = counts.trials();
        if trials == 0 {
            return Self {
                win: 0.0,
                tie: 0.0,
                lose: 100.0,
            };
        }
        let win = 100.0 * counts.wins as f64 / trials as f64;
        let tie = 100.0 * counts.ties as f64 / trials as f64;
        let lose = (100.0 - (win + tie)).max(0.0);
        Self { win, tie, lose }
    }

    /// Equity: win plus half of tie, as a percentage.
    pub fn equity(&self) -> f64 {
        self.win + self.tie / 2.0
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Win {:.2}% | Tie {:.2}% | Lose {:.2}% (equity: {:.2}%)",
            self.win,
            self.tie,
            self.lose,
            self.equity(),
        )
    }
}
