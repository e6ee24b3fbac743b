//! Monte Carlo simulation engine.
//!
//! Each trial deals every opponent two cards, completes the board, scores
//! all hands and compares the player's score with the best opponent score.
//! Trials are independent; the only state shared between them is the
//! simulator's random generator.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::cancel::CancelToken;
use super::config::SimConfig;
use super::result::{Outcome, OutcomeCounts, SimulationResult};
use super::spot::{check_trials, Spot};
use crate::cards::{Card, Deck, HoleCards};
use crate::error::{OddsError, Result};

/// Estimate win/tie/lose percentages for one query.
///
/// Uses the real hand evaluator and a freshly seeded generator.
///
/// # Example
/// ```
/// use poker_odds::cards::parse_card_run;
/// use poker_odds::sim::simulate;
///
/// let hole = parse_card_run("As Ks").unwrap();
/// let result = simulate(&hole, &[], 1, 1_000).unwrap();
/// assert!((result.win + result.tie + result.lose - 100.0).abs() < 1e-9);
/// ```
pub fn simulate(
    hole_cards: &[Card],
    community_cards: &[Card],
    num_opponents: usize,
    num_simulations: u64,
) -> Result<SimulationResult> {
    let spot = Spot::with_trials(hole_cards, community_cards, num_opponents, num_simulations)?;
    let mut simulator = Simulator::new(SimConfig::default());
    simulator.simulate_n(&spot, num_simulations)
}

/// Runs trials for validated [`Spot`]s.
///
/// Owns its random generator, so separate simulators never share random
/// state and can run on separate threads.
pub struct Simulator {
    config: SimConfig,
    deck: Deck,
    rng: StdRng,
}

impl Simulator {
    /// Create a simulator, seeding from `config.seed` or from OS entropy.
    pub fn new(config: SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create a simulator around an existing generator. `config.seed` is ignored.
    pub fn with_rng(config: SimConfig, rng: StdRng) -> Self {
        Self {
            config,
            deck: Deck::standard(),
            rng,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run `config.simulations` trials.
    pub fn simulate(&mut self, spot: &Spot) -> Result<SimulationResult> {
        self.simulate_n(spot, self.config.simulations)
    }

    /// Run `num_simulations` trials.
    pub fn simulate_n(&mut self, spot: &Spot, num_simulations: u64) -> Result<SimulationResult> {
        self.simulate_observed(spot, num_simulations, None, |_| {})
    }

    /// Run `num_simulations` trials, stopping early if `cancel` fires.
    ///
    /// A cancelled run returns [`OddsError::Cancelled`] and no partial result.
    pub fn simulate_with_cancel(
        &mut self,
        spot: &Spot,
        num_simulations: u64,
        cancel: &CancelToken,
    ) -> Result<SimulationResult> {
        self.simulate_observed(spot, num_simulations, Some(cancel), |_| {})
    }

    /// Run trials with optional cancellation and a progress callback.
    ///
    /// `on_progress` receives the number of completed trials every
    /// `cancel_check_interval` trials and once more at the end.
    pub fn simulate_observed<F>(
        &mut self,
        spot: &Spot,
        num_simulations: u64,
        cancel: Option<&CancelToken>,
        on_progress: F,
    ) -> Result<SimulationResult>
    where
        F: FnMut(u64),
    {
        let counts = self.run_counts(spot, num_simulations, cancel, on_progress)?;
        Ok(SimulationResult::from_counts(&counts))
    }

    /// Run trials and return the raw tally.
    pub fn run_counts<F>(
        &mut self,
        spot: &Spot,
        num_simulations: u64,
        cancel: Option<&CancelToken>,
        mut on_progress: F,
    ) -> Result<OutcomeCounts>
    where
        F: FnMut(u64),
    {
        check_trials(num_simulations)?;

        log::debug!(
            "simulating {} for {} trials ({:?} scoring)",
            spot,
            num_simulations,
            self.config.scoring
        );

        let start = Instant::now();
        let interval = self.config.cancel_check_interval.max(1);
        let mut counts = OutcomeCounts::default();
        let mut opponents = Vec::with_capacity(spot.num_opponents());

        for completed in 0..num_simulations {
            if completed > 0 && completed % interval == 0 {
                on_progress(completed);
            }
            if completed % interval == 0 && cancel.is_some_and(CancelToken::is_cancelled) {
                log::warn!("simulation of {} cancelled after {} trials", spot, completed);
                return Err(OddsError::Cancelled { completed });
            }
            let outcome = self.run_trial(spot, &mut opponents)?;
            counts.record(outcome);
        }
        on_progress(num_simulations);

        let elapsed = start.elapsed().as_secs_f64();
        log::debug!(
            "finished {} trials in {:.3}s ({:.0} trials/s): {:?}",
            num_simulations,
            elapsed,
            num_simulations as f64 / elapsed.max(f64::EPSILON),
            counts
        );

        Ok(counts)
    }

    /// Deal and score one trial.
    fn run_trial(&mut self, spot: &Spot, opponents: &mut Vec<HoleCards>) -> Result<Outcome> {
        // The excluded set starts from the known cards and grows with each hand dealt.
        let mut excluded = spot.known();

        opponents.clear();
        let mut pair = [Card::from_id(0); 2];
        for _ in 0..spot.num_opponents() {
            self.deck.draw_into(excluded, &mut pair, &mut self.rng)?;
            excluded.extend(&pair);
            opponents.push(HoleCards::new(pair[0], pair[1]));
        }

        let known = spot.board().cards();
        let mut board = [Card::from_id(0); 5];
        board[..known.len()].copy_from_slice(known);
        self.deck
            .draw_into(excluded, &mut board[known.len()..], &mut self.rng)?;

        let scoring = self.config.scoring;
        let rng = &mut self.rng;
        let player = scoring.score(spot.hole(), &board, rng);
        let best_opponent = opponents
            .iter()
            .map(|hand| scoring.score(hand, &board, rng))
            .max()
            .unwrap_or(0);

        Ok(Outcome::from_scores(player, best_opponent))
    }
}
