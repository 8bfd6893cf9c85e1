//! End-to-end planning run

use std::time::Instant;

use crate::core::config::DistributorConfig;
use crate::core::error::Result;
use crate::distribution::output::{DistributionOutput, TrialStats};
use crate::distribution::report::{allocations, ConstraintReporter};
use crate::distribution::trials::TrialSelector;
use crate::loader::{BattlegroundDocument, GraphLoader};
use crate::map::topology::MapTopology;

/// Validate inputs, run every trial and report on the best one
pub fn plan<M>(
    topology: &M,
    document: &BattlegroundDocument,
    participant: Option<u32>,
    config: &DistributorConfig,
) -> Result<DistributionOutput>
where
    M: MapTopology + Sync,
{
    let start = Instant::now();

    let target = config.validate()?;
    let loader = GraphLoader::new(topology, document, participant)?;
    let selector = TrialSelector::from_config(config)?;

    tracing::info!(
        "Planning {} for participant {}: {} trials, target {}, seed {}",
        topology.name(),
        loader.participant(),
        selector.trials(),
        target.get(),
        selector.seed()
    );

    let selection = if config.parallel {
        selector.select_parallel(|| loader.populate())?
    } else {
        selector.select(|| loader.populate())?
    };

    let graph = &selection.best.graph;
    let violations = ConstraintReporter::new(target).classify(graph)?;

    tracing::info!(
        "Best trial #{} saves {} camps ({} regions off target)",
        selection.best.index,
        selection.best.camps_saved,
        violations.len()
    );

    Ok(DistributionOutput {
        map: topology.name().to_string(),
        camp_target: target.get(),
        allocations: allocations(graph),
        camps_saved: selection.best.camps_saved,
        violations,
        statistics: TrialStats::new(
            selector.trials(),
            selection.completed,
            selection.failed,
            selection.best.index,
            selector.seed(),
            start.elapsed(),
        ),
    })
}
