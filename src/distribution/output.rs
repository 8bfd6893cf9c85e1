//! Distribution output and serialization

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::distribution::report::{Allocation, Violation};

/// Complete result of a planning run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DistributionOutput {
    pub map: String,
    pub camp_target: u32,
    pub allocations: Vec<Allocation>,
    pub camps_saved: u64,
    pub violations: Vec<Violation>,
    pub statistics: TrialStats,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrialStats {
    pub trials_requested: usize,
    pub trials_completed: usize,
    pub trials_failed: usize,
    pub best_trial: usize,
    pub seed: u64,
    pub planning_time_ms: u64,
}

impl TrialStats {
    pub fn new(
        requested: usize,
        completed: usize,
        failed: usize,
        best_trial: usize,
        seed: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            trials_requested: requested,
            trials_completed: completed,
            trials_failed: failed,
            best_trial,
            seed,
            planning_time_ms: elapsed.as_millis() as u64,
        }
    }
}

impl DistributionOutput {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Plain-text report: allocations, camps saved, then violations
    pub fn render_text(&self) -> String {
        let mut lines = vec!["Result: ".to_string()];
        lines.extend(self.allocations.iter().map(|a| format!(" - {}", a)));
        lines.push(format!("Camps saved: {}", self.camps_saved));
        lines.extend(self.violations.iter().map(Violation::to_string));
        lines.join("\n")
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: best of {} trials (#{}, {} failed) saves {} camps, {} regions off target",
            self.map,
            self.statistics.trials_completed,
            self.statistics.best_trial,
            self.statistics.trials_failed,
            self.camps_saved,
            self.violations.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RegionId;
    use crate::distribution::report::ViolationKind;

    fn output() -> DistributionOutput {
        DistributionOutput {
            map: "Volcano Archipelago".into(),
            camp_target: 4,
            allocations: vec![
                Allocation {
                    region: RegionId(0),
                    name: "A1M".into(),
                    desired: 2,
                    capacity: 3,
                },
                Allocation {
                    region: RegionId(4),
                    name: "A2S".into(),
                    desired: 1,
                    capacity: 4,
                },
            ],
            camps_saved: 4,
            violations: vec![Violation {
                region: RegionId(5),
                name: "A2T".into(),
                kind: ViolationKind::Undershot,
                total: 3,
            }],
            statistics: TrialStats::new(50, 50, 0, 12, 7, Duration::from_millis(3)),
        }
    }

    #[test]
    fn test_render_text() {
        let text = output().render_text();
        assert_eq!(
            text,
            "Result: \n - A1M: 2/3\n - A2S: 1/4\nCamps saved: 4\nUndershot A2T: 3"
        );
    }

    #[test]
    fn test_json_round_trip() {
        let json = output().to_json();
        let parsed: DistributionOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.camps_saved, 4);
        assert_eq!(parsed.violations[0].kind, ViolationKind::Undershot);
        assert_eq!(parsed.statistics.best_trial, 12);
    }
}
