//! Integration tests for planning on the Volcano Archipelago map
//!
//! These exercise the full pipeline:
//! - loading a battleground export into a fresh graph per trial
//! - shuffled trials and best-trial selection
//! - the constraint report on the winning graph

use camp_distributor::core::config::DistributorConfig;
use camp_distributor::core::error::CampError;
use camp_distributor::core::types::CampTarget;
use camp_distributor::distribution::{
    plan, ConstraintReporter, Distributor, TrialSelector, ViolationKind,
};
use camp_distributor::loader::{BattlegroundDocument, GraphLoader, ProvinceRecord};
use camp_distributor::map::{MapTopology, VolcanoArchipelago};

const US: u32 = 11;
const THEM: u32 = 22;

fn slots_for(id: u32) -> i64 {
    match id {
        0..=3 => 5,
        4..=11 => 4,
        _ => 3,
    }
}

/// We hold quarter A plus B1O; everything else belongs to another guild
fn document() -> BattlegroundDocument {
    let ours = [0, 1, 4, 5, 12, 13, 14, 15];
    BattlegroundDocument {
        participant_id: Some(US),
        provinces: (0..28)
            .map(|id| ProvinceRecord {
                id,
                owner_id: Some(if ours.contains(&id) { US } else { THEM }),
                total_building_slots: slots_for(id),
                is_spawn_spot: false,
            })
            .collect(),
    }
}

fn config(seed: u64) -> DistributorConfig {
    DistributorConfig {
        trials: 40,
        seed: Some(seed),
        ..Default::default()
    }
}

#[test]
fn test_plan_respects_capacity_and_sorts_by_id() {
    let map = VolcanoArchipelago::new();
    let output = plan(&map, &document(), None, &config(3)).unwrap();

    assert_eq!(output.map, "Volcano Archipelago");
    assert_eq!(output.allocations.len(), 8);
    let ids: Vec<u32> = output.allocations.iter().map(|a| a.region.0).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);

    for a in &output.allocations {
        assert!(a.desired <= a.capacity, "{}", a);
    }
    let saved: u64 = output
        .allocations
        .iter()
        .map(|a| u64::from(a.capacity - a.desired))
        .sum();
    assert_eq!(saved, output.camps_saved);
    assert_eq!(output.statistics.trials_completed, 40);
    assert_eq!(output.statistics.trials_failed, 0);
}

#[test]
fn test_selected_trial_is_the_best_observed() {
    let map = VolcanoArchipelago::new();
    let doc = document();
    let loader = GraphLoader::new(&map, &doc, None).unwrap();
    let selector = TrialSelector::new(Distributor::default(), 40, 17);

    let best_seen = (0..40)
        .map(|i| selector.run_trial(i, || loader.populate()).unwrap().camps_saved)
        .max()
        .unwrap();
    let selection = selector.select(|| loader.populate()).unwrap();

    assert_eq!(selection.best.camps_saved, best_seen);
}

#[test]
fn test_same_seed_same_plan() {
    let map = VolcanoArchipelago::new();
    let doc = document();
    let first = plan(&map, &doc, None, &config(42)).unwrap();
    let second = plan(&map, &doc, None, &config(42)).unwrap();
    assert_eq!(first.allocations, second.allocations);
    assert_eq!(first.violations, second.violations);

    let mut parallel = config(42);
    parallel.parallel = true;
    let third = plan(&map, &doc, None, &parallel).unwrap();
    assert_eq!(first.allocations, third.allocations);
    assert_eq!(first.statistics.best_trial, third.statistics.best_trial);
}

#[test]
fn test_report_only_flags_contested_regions() {
    let map = VolcanoArchipelago::new();
    let mut doc = document();
    // D1B is another guild's spawn
    doc.provinces[3].is_spawn_spot = true;
    let output = plan(&map, &doc, None, &config(8)).unwrap();

    for v in &output.violations {
        let id = map.name_to_id(&v.name).unwrap();
        assert!(![0, 1, 3, 4, 5, 12, 13, 14, 15].contains(&id.0), "{}", v);
        match v.kind {
            ViolationKind::Overshot => assert!(v.total > 4),
            ViolationKind::Undershot => assert!(v.total < 4),
        }
    }
}

#[test]
fn test_regions_far_from_us_undershoot() {
    // A region with no owned neighbors can only be undershot, at zero
    let map = VolcanoArchipelago::new();
    let output = plan(&map, &document(), None, &config(5)).unwrap();
    let c3x = output
        .violations
        .iter()
        .find(|v| v.name == "C3X")
        .expect("C3X borders none of our provinces");
    assert_eq!(c3x.kind, ViolationKind::Undershot);
    assert_eq!(c3x.total, 0);
}

#[test]
fn test_reporter_does_not_mutate() {
    let map = VolcanoArchipelago::new();
    let doc = document();
    let mut graph = GraphLoader::new(&map, &doc, None).unwrap().populate().unwrap();
    Distributor::default().distribute(&mut graph).unwrap();
    let saved = graph.camps_saved();

    let reporter = ConstraintReporter::new(CampTarget::default());
    let first = reporter.classify(&graph).unwrap();
    let second = reporter.classify(&graph).unwrap();
    assert_eq!(first, second);
    assert_eq!(graph.camps_saved(), saved);
}

#[test]
fn test_incomplete_export_has_no_viable_trial() {
    let map = VolcanoArchipelago::new();
    let mut doc = document();
    doc.provinces.retain(|p| p.id != 20);
    let err = plan(&map, &doc, None, &config(1)).unwrap_err();
    assert!(matches!(err, CampError::NoViableTrial { attempts: 40, .. }));
}

#[test]
fn test_config_faults_rejected_before_trials() {
    let map = VolcanoArchipelago::new();

    let mut bad_target = config(1);
    bad_target.camp_target = 0;
    assert!(matches!(
        plan(&map, &document(), None, &bad_target),
        Err(CampError::InvalidConfig(_))
    ));

    let mut doc = document();
    doc.provinces[2].total_building_slots = -2;
    assert!(matches!(
        plan(&map, &doc, None, &config(1)),
        Err(CampError::InvalidConfig(_))
    ));
}

#[test]
fn test_huge_slot_counts_rejected_before_trials() {
    let map = VolcanoArchipelago::new();
    let mut doc = document();
    for province in &mut doc.provinces {
        province.total_building_slots = 3_000_000_000;
    }
    assert!(matches!(
        plan(&map, &doc, None, &config(1)),
        Err(CampError::InvalidConfig(_))
    ));
}

#[test]
fn test_topology_builds_fresh_graphs() {
    let map = VolcanoArchipelago::new();
    let a = map.build_graph().unwrap();
    let b = map.build_graph().unwrap();
    assert_eq!(a.len(), b.len());
    assert!(a.regions().all(|r| r.desired() == 0 && !r.is_owned()));
}

#[test]
fn test_bundled_sample_plans() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let mut config = DistributorConfig::load(&root.join("config.toml")).unwrap();
    config.seed = Some(9);
    let doc = BattlegroundDocument::from_file(&root.join("volcano_sample.json")).unwrap();

    let output = plan(&VolcanoArchipelago::new(), &doc, None, &config).unwrap();
    assert_eq!(output.camp_target, 4);
    assert_eq!(output.statistics.trials_completed, 50);
    assert!(output.render_text().starts_with("Result: "));
}
