//! Card representation.
//!
//! - `Card`: a single playing card with rank and suit
//! - `HoleCards`: a player's two private cards
//! - `Board`: known community cards (0-5 cards)

use std::fmt;
use std::str::FromStr;

use crate::error::{OddsError, Result};

// Ranks run 0-12 (2-A) and suits 0-3 (c, d, h, s).

/// Two.
pub const RANK_2: u8 = 0;
/// Three.
pub const RANK_3: u8 = 1;
/// Four.
pub const RANK_4: u8 = 2;
/// Five.
pub const RANK_5: u8 = 3;
/// Six.
pub const RANK_6: u8 = 4;
/// Seven.
pub const RANK_7: u8 = 5;
/// Eight.
pub const RANK_8: u8 = 6;
/// Nine.
pub const RANK_9: u8 = 7;
/// Ten.
pub const RANK_T: u8 = 8;
/// Jack.
pub const RANK_J: u8 = 9;
/// Queen.
pub const RANK_Q: u8 = 10;
/// King.
pub const RANK_K: u8 = 11;
/// Ace.
pub const RANK_A: u8 = 12;

/// Clubs.
pub const SUIT_CLUBS: u8 = 0;
/// Diamonds.
pub const SUIT_DIAMONDS: u8 = 1;
/// Hearts.
pub const SUIT_HEARTS: u8 = 2;
/// Spades.
pub const SUIT_SPADES: u8 = 3;

/// Number of ranks.
pub const NUM_RANKS: u8 = 13;

/// Number of suits.
pub const NUM_SUITS: u8 = 4;

/// Rank characters for display.
const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

/// Suit characters for display.
const SUIT_CHARS: [char; 4] = ['c', 'd', 'h', 's'];

/// Suit symbols, as sent by the web form.
const SUIT_SYMBOLS: [char; 4] = ['♣', '♦', '♥', '♠'];

/// Parse a rank character (case-insensitive).
pub(crate) fn parse_rank(c: char) -> Option<u8> {
    let c = c.to_ascii_uppercase();
    RANK_CHARS.iter().position(|&r| r == c).map(|r| r as u8)
}

/// Parse a suit letter (case-insensitive) or suit symbol.
pub(crate) fn parse_suit(c: char) -> Option<u8> {
    let lower = c.to_ascii_lowercase();
    SUIT_CHARS
        .iter()
        .position(|&s| s == lower)
        .or_else(|| SUIT_SYMBOLS.iter().position(|&s| s == c))
        .map(|s| s as u8)
}

/// A single playing card.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// Card index 0-51: rank * 4 + suit
    id: u8,
}

impl Card {
    /// Create a new card from rank (0-12) and suit (0-3).
    #[inline]
    pub const fn new(rank: u8, suit: u8) -> Self {
        debug_assert!(rank < NUM_RANKS, "rank must be 0-12");
        debug_assert!(suit < NUM_SUITS, "suit must be 0-3");
        Self { id: rank * NUM_SUITS + suit }
    }

    /// Create a card from its ID (0-51).
    #[inline]
    pub const fn from_id(id: u8) -> Self {
        debug_assert!(id < 52, "card id must be 0-51");
        Self { id }
    }

    /// Get the card's ID (0-51).
    #[inline]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Get the card's rank (0-12: 2-A).
    #[inline]
    pub const fn rank(&self) -> u8 {
        self.id / NUM_SUITS
    }

    /// Get the card's suit (0-3).
    #[inline]
    pub const fn suit(&self) -> u8 {
        self.id % NUM_SUITS
    }

    /// Get rank character for display.
    pub fn rank_char(&self) -> char {
        RANK_CHARS[self.rank() as usize]
    }

    /// Get suit character for display.
    pub fn suit_char(&self) -> char {
        SUIT_CHARS[self.suit() as usize]
    }

    /// Get the suit symbol (♣ ♦ ♥ ♠).
    pub fn suit_symbol(&self) -> char {
        SUIT_SYMBOLS[self.suit() as usize]
    }

    /// Render with the suit symbol, e.g. "A♠".
    pub fn to_symbol_string(&self) -> String {
        format!("{}{}", self.rank_char(), self.suit_symbol())
    }
}

impl FromStr for Card {
    type Err = OddsError;

    /// Parse a card from a token like "As", "Kh", "2c" or "A♠".
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let (rank, suit) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => (r, s),
            _ => return Err(OddsError::invalid_card(s, "expected a rank and a suit")),
        };

        let rank = parse_rank(rank).ok_or_else(|| OddsError::invalid_card(s, "unknown rank"))?;
        let suit = parse_suit(suit).ok_or_else(|| OddsError::invalid_card(s, "unknown suit"))?;
        Ok(Self::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A player's two hole cards.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleCards {
    /// First card (higher rank by convention).
    pub card1: Card,
    /// Second card.
    pub card2: Card,
}

impl HoleCards {
    /// Create hole cards, ordering by rank (higher first).
    pub fn new(card1: Card, card2: Card) -> Self {
        if card1.rank() >= card2.rank() {
            Self { card1, card2 }
        } else {
            Self {
                card1: card2,
                card2: card1,
            }
        }
    }

    /// Build hole cards from a slice, requiring exactly two distinct cards.
    pub fn from_slice(cards: &[Card]) -> Result<Self> {
        match cards {
            [a, b] if a == b => Err(OddsError::InvalidInput(format!(
                "hole cards contain {} twice",
                a
            ))),
            [a, b] => Ok(Self::new(*a, *b)),
            _ => Err(OddsError::InvalidInput(format!(
                "expected 2 hole cards, got {}",
                cards.len()
            ))),
        }
    }

    /// Get both cards as an array.
    pub fn cards(&self) -> [Card; 2] {
        [self.card1, self.card2]
    }

    /// Check if a card conflicts with these hole cards.
    pub fn contains(&self, card: Card) -> bool {
        self.card1 == card || self.card2 == card
    }
}

impl FromStr for HoleCards {
    type Err = OddsError;

    /// Parse hole cards from a string like "AhKs" or "Ah Ks".
    fn from_str(s: &str) -> Result<Self> {
        let cards = parse_card_run(s)?;
        Self::from_slice(&cards)
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.card1, self.card2)
    }
}

impl fmt::Debug for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Known community cards.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Maximum number of community cards.
    pub const MAX_CARDS: usize = 5;

    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(Self::MAX_CARDS),
        }
    }

    /// Build a board from a slice, requiring at most five distinct cards.
    pub fn from_slice(cards: &[Card]) -> Result<Self> {
        if cards.len() > Self::MAX_CARDS {
            return Err(OddsError::InvalidInput(format!(
                "at most {} community cards allowed, got {}",
                Self::MAX_CARDS,
                cards.len()
            )));
        }
        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(OddsError::InvalidInput(format!(
                    "community cards contain {} twice",
                    card
                )));
            }
        }
        Ok(Self {
            cards: cards.to_vec(),
        })
    }

    /// Get the number of cards on the board.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if board is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of community cards still to come.
    pub fn missing(&self) -> usize {
        Self::MAX_CARDS - self.cards.len()
    }

    /// Get the cards on the board.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Check if the board contains a specific card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

impl FromStr for Board {
    type Err = OddsError;

    /// Parse a board from a string like "AhKsQd" or "Ah Ks Qd".
    fn from_str(s: &str) -> Result<Self> {
        let cards = parse_card_run(s)?;
        Self::from_slice(&cards)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

/// Parse a run of two-character card tokens, ignoring whitespace.
pub fn parse_card_run(s: &str) -> Result<Vec<Card>> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.len() % 2 != 0 {
        return Err(OddsError::invalid_card(s, "odd number of characters"));
    }
    chars
        .chunks(2)
        .map(|pair| pair.iter().collect::<String>().parse())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_card_creation() {
        let ace_spades = Card::new(RANK_A, SUIT_SPADES);
        assert_eq!(ace_spades.rank(), RANK_A);
        assert_eq!(ace_spades.suit(), SUIT_SPADES);
        assert_eq!(ace_spades.to_string(), "As");
        assert_eq!(ace_spades.to_symbol_string(), "A♠");

        let two_clubs = Card::new(RANK_2, SUIT_CLUBS);
        assert_eq!(two_clubs.id(), 0);
        assert_eq!(two_clubs.to_string(), "2c");
    }

    #[test]
    fn test_card_parsing() {
        assert_eq!(card("As").to_string(), "As");
        assert_eq!(card("kh").to_string(), "Kh");
        assert_eq!(card("TD").to_string(), "Td");
        assert_eq!(card("A♠"), card("As"));
        assert_eq!(card("T♥"), card("Th"));
        assert_eq!(card("2♦"), card("2d"));
        assert_eq!(card("Q♣"), card("Qc"));
    }

    #[test]
    fn test_invalid_tokens() {
        for token in ["", "A", "XX", "1s", "Ax", "Asd", "10s", "♠A"] {
            let err = token.parse::<Card>().unwrap_err();
            assert!(
                matches!(err, OddsError::InvalidCard { .. }),
                "{:?} should be an invalid card, got {:?}",
                token,
                err
            );
        }
    }

    #[test]
    fn test_all_canonical_tokens_validate() {
        let mut seen = std::collections::HashSet::new();
        for r in RANK_CHARS {
            for s in SUIT_CHARS {
                let token: String = [r, s].iter().collect();
                let parsed = card(&token);
                assert_eq!(parsed.to_string(), token);
                assert!(seen.insert(parsed.id()));
            }
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn test_hole_cards() {
        let hc: HoleCards = "AhKs".parse().unwrap();
        assert_eq!(hc.card1.rank(), RANK_A);
        assert_eq!(hc.card2.rank(), RANK_K);
        assert_ne!(hc.card1.suit(), hc.card2.suit());

        let hc: HoleCards = "Ks As".parse().unwrap();
        assert_eq!(hc.card1, card("As"));
        assert_eq!(hc.card1.suit(), hc.card2.suit());
        assert!(hc.contains(card("Ks")));
    }

    #[test]
    fn test_hole_cards_rejects_bad_counts() {
        assert!(matches!(
            "AhAh".parse::<HoleCards>(),
            Err(OddsError::InvalidInput(_))
        ));
        assert!(matches!(
            "Ah".parse::<HoleCards>(),
            Err(OddsError::InvalidInput(_))
        ));
        assert!(matches!(
            "AhKsQd".parse::<HoleCards>(),
            Err(OddsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_board() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.missing(), 5);

        let board: Board = "Ah Ks Qd".parse().unwrap();
        assert_eq!(board.len(), 3);
        assert_eq!(board.missing(), 2);
        assert!(board.contains(card("Ks")));
        assert_eq!(format!("{:?}", board), "[AhKsQd]");
    }

    #[test]
    fn test_board_limits() {
        let six: Vec<Card> = ["2c", "3c", "4c", "5c", "6c", "7c"].iter().map(|s| card(s)).collect();
        assert!(matches!(
            Board::from_slice(&six),
            Err(OddsError::InvalidInput(_))
        ));

        let dup = [card("2c"), card("3c"), card("2c")];
        assert!(matches!(
            Board::from_slice(&dup),
            Err(OddsError::InvalidInput(_))
        ));
    }
}
