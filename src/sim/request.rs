//! JSON request records as sent by a calling layer.

use serde::{Deserialize, Serialize};

use super::config::{SimConfig, MAX_SIMULATIONS};
use super::engine::Simulator;
use super::result::SimulationResult;
use super::spot::Spot;
use crate::cards::CardParser;
use crate::error::{ErrorReport, OddsError, Result};

/// One query in caller terms: raw card tokens plus optional counts.
///
/// ```json
/// { "hole_cards": ["A♠", "K♠"], "community_cards": ["Q♠"], "num_opponents": 3 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// The player's two hole-card tokens.
    pub hole_cards: Vec<String>,
    /// Zero to five known community-card tokens.
    #[serde(default)]
    pub community_cards: Vec<String>,
    /// Opponent count; the config's default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_opponents: Option<usize>,
    /// Trial count; the config's default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulations: Option<u64>,
}

impl SimulationRequest {
    /// Create a request from tokens, leaving counts to the config.
    pub fn new<S: Into<String>>(
        hole_cards: impl IntoIterator<Item = S>,
        community_cards: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            hole_cards: hole_cards.into_iter().map(Into::into).collect(),
            community_cards: community_cards.into_iter().map(Into::into).collect(),
            num_opponents: None,
            simulations: None,
        }
    }

    /// Builder method: set the opponent count.
    pub fn with_opponents(mut self, num_opponents: usize) -> Self {
        self.num_opponents = Some(num_opponents);
        self
    }

    /// Builder method: set the trial count.
    pub fn with_simulations(mut self, simulations: u64) -> Self {
        self.simulations = Some(simulations);
        self
    }

    /// Parse the tokens and validate the query, including its trial count.
    ///
    /// A trial count set on the request must lie in `1..=MAX_SIMULATIONS`,
    /// the same range [`SimConfig::validate`] enforces.
    pub fn to_spot(&self, parser: &CardParser, config: &SimConfig) -> Result<Spot> {
        let hole = parser.parse_tokens(&self.hole_cards)?;
        let community = parser.parse_tokens(&self.community_cards)?;
        let opponents = self.num_opponents.unwrap_or(config.default_opponents);
        let trials = self.simulations(config);
        if trials > MAX_SIMULATIONS {
            return Err(OddsError::InvalidInput(format!(
                "simulations {} is out of range [1, {}]",
                trials, MAX_SIMULATIONS
            )));
        }
        Spot::with_trials(&hole, &community, opponents, trials)
    }

    /// Trial count for this request under `config`.
    pub fn simulations(&self, config: &SimConfig) -> u64 {
        self.simulations.unwrap_or(config.simulations)
    }

    /// Validate and run the request on `simulator`.
    pub fn run(&self, simulator: &mut Simulator) -> Result<SimulationResult> {
        let config = simulator.config().clone();
        let parser = CardParser::new(config.parse_mode);
        let spot = self.to_spot(&parser, &config)?;
        simulator.simulate_n(&spot, self.simulations(&config))
    }
}

/// What a caller gets back for one request: a result or an error report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SimulationResponse {
    /// The query ran.
    Ok(SimulationResult),
    /// The query was rejected or interrupted.
    Err {
        /// Error kind and message.
        error: ErrorReport,
    },
}

impl From<Result<SimulationResult>> for SimulationResponse {
    fn from(result: Result<SimulationResult>) -> Self {
        match result {
            Ok(r) => SimulationResponse::Ok(r),
            Err(e) => SimulationResponse::Err {
                error: ErrorReport::from(&e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ParseMode;
    use crate::error::ErrorKind;

    #[test]
    fn test_defaults_from_json() {
        let request: SimulationRequest =
            serde_json::from_str(r#"{ "hole_cards": ["A♠", "K♠"] }"#).unwrap();
        assert!(request.community_cards.is_empty());
        assert_eq!(request.num_opponents, None);

        let config = SimConfig::default();
        let spot = request.to_spot(&CardParser::strict(), &config).unwrap();
        assert_eq!(spot.num_opponents(), 2);
        assert_eq!(request.simulations(&config), 10_000);
    }

    #[test]
    fn test_run() {
        let request = SimulationRequest::new(["As", "Ks"], ["Qs", "Js", "Ts"])
            .with_opponents(1)
            .with_simulations(200);
        let mut simulator = Simulator::new(SimConfig::default().with_seed(4));
        let result = request.run(&mut simulator).unwrap();
        assert_eq!(result.win, 100.0);
    }

    #[test]
    fn test_bad_token() {
        let request = SimulationRequest::new(["As", "Kx"], []).with_simulations(10);
        let mut simulator = Simulator::new(SimConfig::default().with_seed(4));
        let err = request.run(&mut simulator).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCard);
    }

    #[test]
    fn test_expand_ranks_mode() {
        // Under expansion a lone rank yields four cards, which is too many hole cards.
        let request = SimulationRequest::new(["A"], []).with_simulations(10);
        let config = SimConfig::default()
            .with_seed(4)
            .with_parse_mode(ParseMode::ExpandRanks);
        let err = request.run(&mut Simulator::new(config)).unwrap_err();
        assert!(matches!(err, OddsError::InvalidInput(_)));

        // Strict mode rejects the token itself.
        let err = request
            .run(&mut Simulator::new(SimConfig::default().with_seed(4)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCard);
    }

    #[test]
    fn test_simulation_count_range() {
        let config = SimConfig::default().with_seed(4);
        let request: SimulationRequest = serde_json::from_str(
            r#"{ "hole_cards": ["As", "Ks"], "simulations": 100000000000 }"#,
        )
        .unwrap();
        let err = request.run(&mut Simulator::new(config.clone())).unwrap_err();
        assert!(matches!(err, OddsError::InvalidInput(_)));

        let request = SimulationRequest::new(["As", "Ks"], []).with_simulations(0);
        let err = request.to_spot(&CardParser::strict(), &config).unwrap_err();
        assert!(matches!(err, OddsError::InvalidInput(_)));

        let request = SimulationRequest::new(["As", "Ks"], []).with_simulations(MAX_SIMULATIONS);
        assert!(request.to_spot(&CardParser::strict(), &config).is_ok());
    }

    #[test]
    fn test_response_json() {
        let ok = SimulationResponse::from(Ok(SimulationResult {
            win: 60.0,
            tie: 5.0,
            lose: 35.0,
        }));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            serde_json::json!({ "win": 60.0, "tie": 5.0, "lose": 35.0 })
        );

        let err = SimulationResponse::from(Err(OddsError::TooManyExclusions("As".into())));
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["error"]["kind"], "too_many_exclusions");
    }
}
