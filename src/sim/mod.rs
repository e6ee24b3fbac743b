//! Monte Carlo simulation of win/tie/lose odds.
//!
//! # Usage
//!
//! 1. Validate a query into a [`Spot`] (or send a [`SimulationRequest`])
//! 2. Create a [`Simulator`] from a [`SimConfig`]
//! 3. Call [`Simulator::simulate`] and read the [`SimulationResult`]
//!
//! # Example
//!
//! ```
//! use poker_odds::cards::parse_card_run;
//! use poker_odds::sim::{SimConfig, Simulator, Spot};
//!
//! let hole = parse_card_run("Ah Kh").unwrap();
//! let board = parse_card_run("Qh Jh 2c").unwrap();
//! let spot = Spot::new(&hole, &board, 2).unwrap();
//!
//! let mut simulator = Simulator::new(SimConfig::default().with_simulations(2_000).with_seed(1));
//! let result = simulator.simulate(&spot).unwrap();
//! println!("{}", result);
//! ```

pub mod batch;
pub mod cancel;
pub mod config;
pub mod engine;
pub mod request;
pub mod result;
pub mod spot;

pub use batch::{run_batch, run_batch_with_progress};
pub use cancel::CancelToken;
pub use config::{ConfigError, SimConfig, DEFAULT_OPPONENTS, DEFAULT_SIMULATIONS, MAX_OPPONENTS, MAX_SIMULATIONS};
pub use engine::{simulate, Simulator};
pub use request::{SimulationRequest, SimulationResponse};
pub use result::{Outcome, OutcomeCounts, SimulationResult};
pub use spot::Spot;
