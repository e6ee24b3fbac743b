//! Running many requests concurrently.

use std::time::Instant;

use rayon::prelude::*;

use super::config::SimConfig;
use super::engine::Simulator;
use super::request::SimulationRequest;
use super::result::SimulationResult;
use crate::error::Result;

/// Run every request in parallel, returning results in request order.
pub fn run_batch(
    requests: &[SimulationRequest],
    config: &SimConfig,
) -> Vec<Result<SimulationResult>> {
    run_batch_with_progress(requests, config, || {})
}

/// Like [`run_batch`], calling `on_done` from the worker thread after each request.
///
/// Every request runs on its own [`Simulator`]. With a seed configured,
/// request `i` is seeded with `seed + i`, so the output does not depend on
/// how rayon schedules the work.
pub fn run_batch_with_progress<F>(
    requests: &[SimulationRequest],
    config: &SimConfig,
    on_done: F,
) -> Vec<Result<SimulationResult>>
where
    F: Fn() + Sync,
{
    log::info!("running batch of {} requests", requests.len());
    let start = Instant::now();

    let results: Vec<Result<SimulationResult>> = requests
        .par_iter()
        .enumerate()
        .map(|(index, request)| {
            let mut simulator = Simulator::new(request_config(config, index));
            let result = request.run(&mut simulator);
            if let Err(e) = &result {
                log::debug!("request {} failed: {}", index, e);
            }
            on_done();
            result
        })
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    log::info!(
        "batch finished in {:.2}s: {} ok, {} failed",
        start.elapsed().as_secs_f64(),
        results.len() - failed,
        failed
    );
    results
}

fn request_config(config: &SimConfig, index: usize) -> SimConfig {
    let mut config = config.clone();
    config.seed = config.seed.map(|seed| seed.wrapping_add(index as u64));
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OddsError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn requests() -> Vec<SimulationRequest> {
        vec![
            SimulationRequest::new(["As", "Ks"], []).with_opponents(1),
            SimulationRequest::new(["7c", "2d"], ["As", "Kh", "Qd"]).with_opponents(3),
            SimulationRequest::new(["As", "As"], []),
            SimulationRequest::new(["Jh", "Th"], ["9h", "8h"]).with_simulations(300),
        ]
    }

    #[test]
    fn test_batch_order_and_errors() {
        let config = SimConfig::default().with_simulations(500).with_seed(10);
        let results = run_batch(&requests(), &config);
        assert_eq!(results.len(), 4);
        assert!(results[0].is_ok());
        assert!(results[1].is_ok());
        assert!(matches!(results[2], Err(OddsError::InvalidInput(_))));
        assert!(results[3].is_ok());
        assert!(results[0].as_ref().unwrap().win > results[1].as_ref().unwrap().win);
    }

    #[test]
    fn test_seeded_batch_is_reproducible() {
        let config = SimConfig::default().with_simulations(800).with_seed(77);
        let first = run_batch(&requests(), &config);
        let second = run_batch(&requests(), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_requests_get_distinct_streams() {
        let config = SimConfig::default().with_simulations(2000).with_seed(5);
        let same = vec![SimulationRequest::new(["9c", "9d"], []); 2];
        let results = run_batch(&same, &config);
        assert_ne!(results[0], results[1]);
    }

    #[test]
    fn test_progress_callback() {
        let done = AtomicUsize::new(0);
        let config = SimConfig::default().with_simulations(100).with_seed(1);
        run_batch_with_progress(&requests(), &config, || {
            done.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(done.load(Ordering::Relaxed), 4);
    }
}
