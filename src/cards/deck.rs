//! The 52-card universe and random draws from it.

use rand::seq::SliceRandom;
use rand::Rng;

use super::card::Card;
use super::mask::CardMask;
use crate::error::{OddsError, Result};

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;

const fn build_deck() -> [Card; DECK_SIZE] {
    let mut cards = [Card::from_id(0); DECK_SIZE];
    let mut i = 0;
    while i < DECK_SIZE {
        cards[i] = Card::from_id(i as u8);
        i += 1;
    }
    cards
}

/// All 52 cards in ID order. Never mutated.
pub static DECK: [Card; DECK_SIZE] = build_deck();

/// Read-only view of the standard deck.
///
/// Draws never touch the universe itself: each call filters it against an
/// excluded set and samples from what is left.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deck;

impl Deck {
    /// The standard 52-card deck.
    pub fn standard() -> Self {
        Self
    }

    /// All cards in ID order.
    pub fn cards(&self) -> &'static [Card; DECK_SIZE] {
        &DECK
    }

    /// Number of cards not in `exclude`.
    pub fn remaining(&self, exclude: CardMask) -> usize {
        DECK_SIZE - exclude.len()
    }

    /// Cards not in `exclude`, in ID order.
    pub fn available(&self, exclude: CardMask) -> Vec<Card> {
        DECK.iter().copied().filter(|&c| !exclude.contains(c)).collect()
    }

    /// Draw `count` distinct cards uniformly at random from the cards not in `exclude`.
    pub fn draw<R: Rng + ?Sized>(
        &self,
        exclude: CardMask,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Card>> {
        let mut out = vec![Card::from_id(0); count];
        self.draw_into(exclude, &mut out, rng)?;
        Ok(out)
    }

    /// Fill `out` with distinct cards drawn uniformly from the cards not in `exclude`.
    ///
    /// Partial Fisher-Yates over the available cards, so only `out.len()`
    /// swaps are made. Nothing is written on failure.
    pub fn draw_into<R: Rng + ?Sized>(
        &self,
        exclude: CardMask,
        out: &mut [Card],
        rng: &mut R,
    ) -> Result<()> {
        let mut pool = [Card::from_id(0); DECK_SIZE];
        let mut available = 0;
        for &card in DECK.iter() {
            if !exclude.contains(card) {
                pool[available] = card;
                available += 1;
            }
        }

        if available < out.len() {
            return Err(OddsError::InsufficientCards {
                requested: out.len(),
                available,
            });
        }

        let (chosen, _) = pool[..available].partial_shuffle(rng, out.len());
        out.copy_from_slice(chosen);
        Ok(())
    }
}
