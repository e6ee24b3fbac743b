//! Card sets packed into a single `u64`.

use std::fmt;

use super::card::Card;

/// A set of cards, one bit per card ID.
///
/// Used as the excluded set during a trial: it starts as the known cards and
/// grows as opponent hands are dealt.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CardMask(u64);

impl CardMask {
    /// Mask of every card in the deck.
    pub const FULL: CardMask = CardMask((1u64 << 52) - 1);

    /// Create an empty set.
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build a set from cards, ignoring duplicates.
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut mask = Self::empty();
        mask.extend(cards);
        mask
    }

    /// Raw bit pattern.
    #[inline]
    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// Check membership.
    #[inline]
    pub fn contains(&self, card: Card) -> bool {
        self.0 & (1u64 << card.id()) != 0
    }

    /// Add a card. Returns false if it was already present.
    #[inline]
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.id();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// Add every card in the slice.
    #[inline]
    pub fn extend(&mut self, cards: &[Card]) {
        for &card in cards {
            self.0 |= 1u64 << card.id();
        }
    }

    /// Number of cards in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Cards in the set, in ID order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        let bits = self.0;
        (0u8..52)
            .filter(move |&id| bits & (1u64 << id) != 0)
            .map(Card::from_id)
    }
}

impl fmt::Debug for CardMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
