//! # Poker Odds
//!
//! Monte Carlo estimation of a Texas Hold'em player's chances to win, tie
//! or lose against a number of opponents holding random cards.
//!
//! ## Features
//!
//! - **Deck Model**: 52-card universe, excluded sets, uniform draws without replacement
//! - **Two Scoring Modes**: a real 7-card evaluator, or the legacy random placeholder
//! - **Reproducible**: every simulator owns a seedable generator
//! - **Cancellable**: long runs poll a shared cancel flag between trials
//! - **Batch Mode**: many requests in parallel, one generator each
//!
//! ## Quick Start
//!
//! ```
//! use poker_odds::cards::parse_card_run;
//! use poker_odds::sim::simulate;
//!
//! let hole = parse_card_run("A♠ K♠").unwrap();
//! let result = simulate(&hole, &[], 2, 1_000).unwrap();
//! assert!(result.win >= 0.0 && result.lose <= 100.0);
//! ```
//!
//! ## Modules
//!
//! - [`cards`]: cards, card sets, the deck and token parsing
//! - [`eval`]: hand evaluation and scoring modes
//! - [`sim`]: the simulation engine, configuration and request records
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Caller (CLI / JSON requests)                    │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ tokens, opponent count
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Simulation Engine                         │
//! │  - Spot validation        - Trial loop (deal, score, compare)   │
//! │  - Percentages            - Cancellation / progress             │
//! └─────────────────────────────────────────────────────────────────┘
//!                 │                                 │
//!                 ▼                                 ▼
//!          ┌─────────────┐                   ┌─────────────┐
//!          │ Deck Model  │                   │  Scoring    │
//!          │  (draws)    │                   │ (evaluator) │
//!          └─────────────┘                   └─────────────┘
//! ```

#![warn(missing_docs)]

/// Deck model: cards, excluded sets and draws.
pub mod cards;

/// Hand evaluation and strength scoring.
pub mod eval;

/// Error types shared by every module.
pub mod error;

/// Monte Carlo simulation engine.
pub mod sim;

// Re-export commonly used types at crate root for convenience
pub use cards::{Card, CardMask, CardParser, Deck, ParseMode};
pub use error::{ErrorKind, ErrorReport, OddsError, Result};
pub use eval::Scoring;
pub use sim::{simulate, SimConfig, SimulationRequest, SimulationResult, Simulator, Spot};
