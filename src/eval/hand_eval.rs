//! Poker hand evaluation.
//!
//! Ranks 5-card hands directly from rank and suit counts, and 7-card hands
//! (two hole cards plus a full board) as the best of their 21 five-card
//! subsets.

use std::cmp::Ordering;

use crate::cards::card::{RANK_5, RANK_A};
use crate::cards::{Card, HoleCards};

/// Hand rank categories, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    /// No pair, five unrelated cards.
    HighCard = 0,
    /// Two cards of one rank.
    OnePair = 1,
    /// Two different pairs.
    TwoPair = 2,
    /// Three cards of one rank.
    ThreeOfAKind = 3,
    /// Five consecutive ranks, ace high or low.
    Straight = 4,
    /// Five cards of one suit.
    Flush = 5,
    /// Three of a kind plus a pair.
    FullHouse = 6,
    /// Four cards of one rank.
    FourOfAKind = 7,
    /// A straight in one suit.
    StraightFlush = 8,
}

impl HandCategory {
    /// Get the category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }
}

/// A hand rank that can be compared.
/// Higher values are better hands.
/// Format: category (4 bits) | kicker1 (4 bits) | kicker2 (4 bits) | ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandRank(u32);

impl HandRank {
    fn new(category: HandCategory, kickers: &[u8]) -> Self {
        let mut value = (category as u32) << 20;
        for (i, &k) in kickers.iter().take(5).enumerate() {
            value |= (k as u32) << (16 - i * 4);
        }
        Self(value)
    }

    /// Get the raw rank value for comparison.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Get the hand category.
    pub fn category(&self) -> HandCategory {
        match self.0 >> 20 {
            1 => HandCategory::OnePair,
            2 => HandCategory::TwoPair,
            3 => HandCategory::ThreeOfAKind,
            4 => HandCategory::Straight,
            5 => HandCategory::Flush,
            6 => HandCategory::FullHouse,
            7 => HandCategory::FourOfAKind,
            8 => HandCategory::StraightFlush,
            _ => HandCategory::HighCard,
        }
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// Ranks present `n` times, highest first, in a fixed buffer.
struct RankGroup {
    ranks: [u8; 5],
    len: usize,
}

impl RankGroup {
    fn collect(rank_counts: &[u8; 13], n: u8) -> Self {
        let mut group = Self { ranks: [0; 5], len: 0 };
        for rank in (0..13u8).rev() {
            if rank_counts[rank as usize] == n {
                group.ranks[group.len] = rank;
                group.len += 1;
            }
        }
        group
    }

    fn get(&self, i: usize) -> Option<u8> {
        (i < self.len).then(|| self.ranks[i])
    }

    fn as_slice(&self) -> &[u8] {
        &self.ranks[..self.len]
    }
}

/// Hand evaluator for poker hands.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandEvaluator;

impl HandEvaluator {
    /// Create a new hand evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a 5-card hand.
    pub fn evaluate_5(&self, cards: &[Card; 5]) -> HandRank {
        let mut rank_counts = [0u8; 13];
        let mut rank_bits = 0u16;
        let first_suit = cards[0].suit();
        let mut is_flush = true;

        for card in cards {
            rank_counts[card.rank() as usize] += 1;
            rank_bits |= 1 << card.rank();
            is_flush &= card.suit() == first_suit;
        }

        let straight_high = find_straight(rank_bits);

        if let Some(high) = straight_high {
            if is_flush {
                return HandRank::new(HandCategory::StraightFlush, &[high]);
            }
        }

        let quads = RankGroup::collect(&rank_counts, 4);
        let trips = RankGroup::collect(&rank_counts, 3);
        let pairs = RankGroup::collect(&rank_counts, 2);
        let singles = RankGroup::collect(&rank_counts, 1);

        if let Some(quad) = quads.get(0) {
            let kicker = singles.get(0).unwrap_or(0);
            return HandRank::new(HandCategory::FourOfAKind, &[quad, kicker]);
        }

        if let (Some(trip), Some(pair)) = (trips.get(0), pairs.get(0)) {
            return HandRank::new(HandCategory::FullHouse, &[trip, pair]);
        }

        if is_flush {
            return HandRank::new(HandCategory::Flush, singles.as_slice());
        }

        if let Some(high) = straight_high {
            return HandRank::new(HandCategory::Straight, &[high]);
        }

        if let Some(trip) = trips.get(0) {
            let k1 = singles.get(0).unwrap_or(0);
            let k2 = singles.get(1).unwrap_or(0);
            return HandRank::new(HandCategory::ThreeOfAKind, &[trip, k1, k2]);
        }

        if let (Some(high), Some(low)) = (pairs.get(0), pairs.get(1)) {
            let kicker = singles.get(0).unwrap_or(0);
            return HandRank::new(HandCategory::TwoPair, &[high, low, kicker]);
        }

        if let Some(pair) = pairs.get(0) {
            let mut kickers = [pair, 0, 0, 0];
            kickers[1..].copy_from_slice(&singles.ranks[..3]);
            return HandRank::new(HandCategory::OnePair, &kickers);
        }

        HandRank::new(HandCategory::HighCard, singles.as_slice())
    }

    /// Evaluate a 7-card hand (best 5-card combination).
    pub fn evaluate_7(&self, cards: &[Card; 7]) -> HandRank {
        let mut best = HandRank(0);

        // Each 5-card hand leaves out exactly two of the seven cards.
        for skip1 in 0..7 {
            for skip2 in (skip1 + 1)..7 {
                let mut hand = [cards[0]; 5];
                let mut n = 0;
                for (i, &card) in cards.iter().enumerate() {
                    if i != skip1 && i != skip2 {
                        hand[n] = card;
                        n += 1;
                    }
                }
                best = best.max(self.evaluate_5(&hand));
            }
        }

        best
    }

    /// Evaluate hole cards against a complete board.
    pub fn evaluate(&self, hole: &HoleCards, board: &[Card; 5]) -> HandRank {
        let cards = [
            hole.card1, hole.card2, board[0], board[1], board[2], board[3], board[4],
        ];
        self.evaluate_7(&cards)
    }
}

/// Find the highest straight from a rank bitmask.
/// Returns the rank of the straight's top card, or None if no straight.
fn find_straight(rank_bits: u16) -> Option<u8> {
    for high in (RANK_5 + 1..=RANK_A).rev() {
        let mask = 0b11111u16 << (high - 4);
        if rank_bits & mask == mask {
            return Some(high);
        }
    }

    // Wheel: A-2-3-4-5 plays as a five-high straight.
    let wheel = (1u16 << RANK_A) | 0b1111;
    (rank_bits & wheel == wheel).then_some(RANK_5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_card_run;

    fn arr5(s: &str) -> [Card; 5] {
        let cards = parse_card_run(s).unwrap();
        [cards[0], cards[1], cards[2], cards[3], cards[4]]
    }

    fn rank5(s: &str) -> HandRank {
        HandEvaluator::new().evaluate_5(&arr5(s))
    }

    #[test]
    fn test_categories() {
        let cases = [
            ("As Kd Qh Jc 9s", HandCategory::HighCard),
            ("As Ad Kh Qc Js", HandCategory::OnePair),
            ("As Ad Kh Kc Js", HandCategory::TwoPair),
            ("As Ad Ah Kc Js", HandCategory::ThreeOfAKind),
            ("Ts 9d 8h 7c 6s", HandCategory::Straight),
            ("As Ks 9s 7s 2s", HandCategory::Flush),
            ("As Ad Ah Kc Kd", HandCategory::FullHouse),
            ("As Ad Ah Ac Ks", HandCategory::FourOfAKind),
            ("9s 8s 7s 6s 5s", HandCategory::StraightFlush),
        ];
        for (hand, category) in cases {
            assert_eq!(rank5(hand).category(), category, "{}", hand);
        }
    }

    #[test]
    fn test_straights() {
        let broadway = rank5("As Kd Qh Jc Ts");
        let six_high = rank5("6s 5d 4h 3c 2s");
        let wheel = rank5("5s 4d 3h 2c As");
        let seven_high = rank5("7s 6d 5h 4c 3s");

        for r in [broadway, six_high, wheel, seven_high] {
            assert_eq!(r.category(), HandCategory::Straight);
        }
        assert!(broadway > seven_high);
        assert!(seven_high > six_high);
        assert!(six_high > wheel);

        let steel_wheel = rank5("5h 4h 3h 2h Ah");
        assert_eq!(steel_wheel.category(), HandCategory::StraightFlush);
        assert!(rank5("As Ks Qs Js Ts") > steel_wheel);
    }

    #[test]
    fn test_kickers() {
        assert!(rank5("As Ad Kh Qc Js") > rank5("As Ad Kh Qc Ts"));
        assert!(rank5("As Ad Kh Kc Qs") > rank5("As Ad Kh Kc Js"));
        assert!(rank5("Ks Kd Kh 2c 2s") > rank5("Qs Qd Qh Ac As"));
        assert!(rank5("Ah Jh 9h 7h 3h") > rank5("Ah Jh 9h 7h 2h"));
        assert_eq!(rank5("As Kd Qh Jc 9s"), rank5("Ad Kc Qs Jh 9d"));
    }

    #[test]
    fn test_hand_comparison() {
        let eval = HandEvaluator::new();

        // AA vs KK on a dry board - AA should win
        let aa: HoleCards = "AhAd".parse().unwrap();
        let kk: HoleCards = "KhKd".parse().unwrap();
        let board = arr5("Qs Jc 7d 3s 2h");

        assert!(eval.evaluate(&aa, &board) > eval.evaluate(&kk, &board));
        assert!(eval.evaluate(&kk, &board) < eval.evaluate(&aa, &board));
    }

    #[test]
    fn test_7_card_evaluation() {
        let eval = HandEvaluator::new();

        let hole: HoleCards = "AhAs".parse().unwrap();
        let rank = eval.evaluate(&hole, &arr5("Ad Ac Kh Qs Jd"));
        assert_eq!(rank.category(), HandCategory::FourOfAKind);

        // Board plays: both players split the broadway straight.
        let a: HoleCards = "2c3d".parse().unwrap();
        let b: HoleCards = "4h2s".parse().unwrap();
        let board = arr5("Ts Jh Qd Kc As");
        assert_eq!(eval.evaluate(&a, &board), eval.evaluate(&b, &board));
    }

    #[test]
    fn test_quads_on_board_kicker() {
        let eval = HandEvaluator::new();
        let board = arr5("Ks Kh Kd Kc 2s");
        let aces: HoleCards = "AsAh".parse().unwrap();
        let queens: HoleCards = "QsQh".parse().unwrap();
        let other_ace: HoleCards = "Ad3c".parse().unwrap();

        assert!(eval.evaluate(&aces, &board) > eval.evaluate(&queens, &board));
        assert_eq!(eval.evaluate(&aces, &board), eval.evaluate(&other_ace, &board));
    }
}
