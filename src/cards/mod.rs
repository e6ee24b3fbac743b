//! Deck model: cards, card sets, the 52-card universe and token parsing.

pub mod card;
pub mod deck;
pub mod mask;
pub mod parse;

pub use card::{parse_card_run, Board, Card, HoleCards};
pub use deck::{Deck, DECK, DECK_SIZE};
pub use mask::CardMask;
pub use parse::{CardParser, ParseMode};
