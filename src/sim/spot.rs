//! A validated simulation query.

use std::fmt;

use crate::cards::{Board, Card, CardMask, HoleCards, DECK_SIZE};
use crate::error::{OddsError, Result};

/// Hole cards, known board and opponent count that passed every precondition.
///
/// Building a `Spot` is the only way into the engine, so a trial can assume
/// the known cards are distinct and the deck can always supply the rest.
#[derive(Clone, PartialEq, Eq)]
pub struct Spot {
    hole: HoleCards,
    board: Board,
    num_opponents: usize,
    known: CardMask,
}

impl Spot {
    /// Validate a query.
    ///
    /// Checks, first failure wins:
    /// 1. exactly two distinct hole cards, at most five distinct community cards
    /// 2. at least one opponent
    /// 3. no card shared between hole and community cards
    /// 4. enough unseen cards for every opponent hand plus the rest of the board
    pub fn new(hole: &[Card], community: &[Card], num_opponents: usize) -> Result<Self> {
        Self::checked(hole, community, num_opponents, None)
    }

    /// Validate a query together with the number of trials it will run.
    ///
    /// Same checks as [`Spot::new`], with `num_simulations >= 1` checked
    /// alongside the opponent count in step 2.
    pub fn with_trials(
        hole: &[Card],
        community: &[Card],
        num_opponents: usize,
        num_simulations: u64,
    ) -> Result<Self> {
        Self::checked(hole, community, num_opponents, Some(num_simulations))
    }

    fn checked(
        hole: &[Card],
        community: &[Card],
        num_opponents: usize,
        num_simulations: Option<u64>,
    ) -> Result<Self> {
        let hole = HoleCards::from_slice(hole)?;
        let board = Board::from_slice(community)?;

        if num_opponents == 0 {
            return Err(OddsError::InvalidInput(
                "at least one opponent is required".to_string(),
            ));
        }
        if let Some(n) = num_simulations {
            check_trials(n)?;
        }

        let mut known = CardMask::from_cards(&hole.cards());
        for &card in board.cards() {
            if !known.insert(card) {
                return Err(OddsError::TooManyExclusions(format!(
                    "{} is both a hole card and a community card",
                    card
                )));
            }
        }
        debug_assert!(known.len() <= 2 + Board::MAX_CARDS);

        let spot = Self {
            hole,
            board,
            num_opponents,
            known,
        };

        let available = DECK_SIZE - known.len();
        let requested = spot.cards_per_trial();
        if requested > available {
            return Err(OddsError::InsufficientCards {
                requested,
                available,
            });
        }

        Ok(spot)
    }

    /// The player's hole cards.
    pub fn hole(&self) -> &HoleCards {
        &self.hole
    }

    /// Known community cards.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of opponents dealt in every trial.
    pub fn num_opponents(&self) -> usize {
        self.num_opponents
    }

    /// Hole cards plus known community cards.
    pub fn known(&self) -> CardMask {
        self.known
    }

    /// Cards each trial draws: two per opponent plus the missing board cards.
    pub fn cards_per_trial(&self) -> usize {
        2 * self.num_opponents + self.board.missing()
    }
}

/// Reject a trial count of zero.
pub(crate) fn check_trials(num_simulations: u64) -> Result<()> {
    if num_simulations == 0 {
        return Err(OddsError::InvalidInput(
            "at least one simulation is required".to_string(),
        ));
    }
    Ok(())
}

impl fmt::Display for Spot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {:?} vs {}", self.hole, self.board, self.num_opponents)
    }
}

impl fmt::Debug for Spot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Spot({})", self)
    }
}
