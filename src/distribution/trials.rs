//! Random-restart selection over traversal orders
//!
//! Every trial populates a fresh graph, visits its unowned regions in a
//! shuffled order and scores the result by camps saved. The best trial wins;
//! ties go to the earliest trial index.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::core::config::DistributorConfig;
use crate::core::error::{CampError, Result};
use crate::distribution::distributor::Distributor;
use crate::map::graph::RegionGraph;

/// One completed trial
#[derive(Debug, Clone)]
pub struct TrialResult {
    pub index: usize,
    pub camps_saved: u64,
    pub graph: RegionGraph,
}

/// Best-so-far accumulator, threaded through the trials by value
#[derive(Debug, Default)]
pub struct BestTrial {
    best: Option<TrialResult>,
    completed: usize,
    failed: usize,
    last_error: Option<String>,
}

impl BestTrial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one trial outcome in. A result replaces the current best only
    /// when it saves strictly more camps.
    pub fn record(mut self, outcome: Result<TrialResult>) -> Self {
        match outcome {
            Ok(result) => {
                self.completed += 1;
                let better = self
                    .best
                    .as_ref()
                    .map_or(true, |best| result.camps_saved > best.camps_saved);
                if better {
                    tracing::debug!(
                        "Trial {} is the new best ({} camps saved)",
                        result.index,
                        result.camps_saved
                    );
                    self.best = Some(result);
                }
            }
            Err(e) => {
                self.failed += 1;
                self.last_error = Some(e.to_string());
            }
        }
        self
    }

    /// Combine two partial accumulators. Equal scores keep the lower index
    /// so the outcome matches a sequential run.
    pub fn merge(self, other: Self) -> Self {
        let best = match (self.best, other.best) {
            (Some(a), Some(b)) => {
                let b_wins = b.camps_saved > a.camps_saved
                    || (b.camps_saved == a.camps_saved && b.index < a.index);
                Some(if b_wins { b } else { a })
            }
            (a, b) => a.or(b),
        };

        Self {
            best,
            completed: self.completed + other.completed,
            failed: self.failed + other.failed,
            last_error: other.last_error.or(self.last_error),
        }
    }

    pub fn best(&self) -> Option<&TrialResult> {
        self.best.as_ref()
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Turn the accumulator into a selection, or fail if nothing completed
    pub fn finish(self) -> Result<Selection> {
        let attempts = self.completed + self.failed;
        match self.best {
            Some(best) => Ok(Selection {
                best,
                completed: self.completed,
                failed: self.failed,
            }),
            None => Err(CampError::NoViableTrial {
                attempts,
                last_error: self
                    .last_error
                    .unwrap_or_else(|| "no trials were run".to_string()),
            }),
        }
    }
}

/// Outcome of a full selection run
#[derive(Debug, Clone)]
pub struct Selection {
    pub best: TrialResult,
    pub completed: usize,
    pub failed: usize,
}

#[derive(Debug, Clone)]
pub struct TrialSelector {
    distributor: Distributor,
    trials: usize,
    seed: u64,
}

impl TrialSelector {
    pub fn new(distributor: Distributor, trials: usize, seed: u64) -> Self {
        Self {
            distributor,
            trials,
            seed,
        }
    }

    /// Build from validated config, drawing a seed if none is fixed
    pub fn from_config(config: &DistributorConfig) -> Result<Self> {
        let target = config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self::new(Distributor::new(target), config.trials, seed))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Run a single trial on a freshly populated graph
    pub fn run_trial<F>(&self, index: usize, populate: F) -> Result<TrialResult>
    where
        F: FnOnce() -> Result<RegionGraph>,
    {
        let mut graph = populate()?;

        let mut order = graph.unowned_ids();
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed.wrapping_add(index as u64));
        order.shuffle(&mut rng);

        self.distributor.distribute_in_order(&mut graph, &order)?;
        let camps_saved = graph.camps_saved();
        tracing::debug!("Trial {}: {} camps saved", index, camps_saved);

        Ok(TrialResult {
            index,
            camps_saved,
            graph,
        })
    }

    /// Run every trial in sequence
    pub fn select<F>(&self, mut populate: F) -> Result<Selection>
    where
        F: FnMut() -> Result<RegionGraph>,
    {
        (0..self.trials)
            .fold(BestTrial::new(), |acc, index| {
                let outcome = self.run_trial(index, &mut populate);
                log_failure(index, &outcome);
                acc.record(outcome)
            })
            .finish()
    }

    /// Run every trial on the rayon pool; same result as `select` for a seed
    pub fn select_parallel<F>(&self, populate: F) -> Result<Selection>
    where
        F: Fn() -> Result<RegionGraph> + Sync,
    {
        (0..self.trials)
            .into_par_iter()
            .map(|index| {
                let outcome = self.run_trial(index, &populate);
                log_failure(index, &outcome);
                BestTrial::new().record(outcome)
            })
            .reduce(BestTrial::new, BestTrial::merge)
            .finish()
    }
}

fn log_failure(index: usize, outcome: &Result<TrialResult>) {
    if let Err(e) = outcome {
        tracing::warn!("Trial {} failed: {}", index, e);
    }
}
