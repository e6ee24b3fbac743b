//! Turning caller-supplied tokens into cards.

use serde::{Deserialize, Serialize};

use super::card::{parse_rank, Card, NUM_SUITS};
use crate::error::{OddsError, Result};

/// How card tokens are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Every token must be a rank followed by a suit.
    #[default]
    Strict,
    /// A lone rank character stands for all four cards of that rank.
    ExpandRanks,
}

/// Parses lists of card tokens under a fixed [`ParseMode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CardParser {
    mode: ParseMode,
}

impl CardParser {
    /// Create a parser for the given mode.
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    /// Parser that accepts only two-character tokens.
    pub fn strict() -> Self {
        Self::new(ParseMode::Strict)
    }

    /// The parser's mode.
    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parse one token, appending the resulting card(s) to `out`.
    pub fn parse_token_into(&self, token: &str, out: &mut Vec<Card>) -> Result<()> {
        let token = token.trim();
        if self.mode == ParseMode::ExpandRanks {
            let mut chars = token.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                let rank =
                    parse_rank(c).ok_or_else(|| OddsError::invalid_card(token, "unknown rank"))?;
                out.extend((0..NUM_SUITS).map(|suit| Card::new(rank, suit)));
                return Ok(());
            }
        }
        out.push(token.parse()?);
        Ok(())
    }

    /// Parse a list of tokens in order.
    ///
    /// Duplicates are kept; rejecting them is up to the caller, which knows
    /// whether they collide inside one hand or across hands.
    pub fn parse_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<Card>> {
        let mut cards = Vec::with_capacity(tokens.len());
        for token in tokens {
            self.parse_token_into(token.as_ref(), &mut cards)?;
        }
        Ok(cards)
    }
}
