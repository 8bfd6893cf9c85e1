//! Load battleground state from the game's JSON export
//!
//! `BattlegroundDocument` mirrors the province list the game sends;
//! `GraphLoader` turns it into a freshly initialised `RegionGraph` each time
//! a trial asks for one.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{CampError, Result};
use crate::core::types::RegionId;
use crate::map::graph::RegionGraph;
use crate::map::topology::MapTopology;

/// Upper bound on slots per province; real maps stay in single digits
pub const MAX_BUILDING_SLOTS: i64 = 1_000;

/// One province as exported by the game
///
/// The export omits zero-valued fields, so province 0 arrives without an id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProvinceRecord {
    pub id: u32,
    pub owner_id: Option<u32>,
    pub total_building_slots: i64,
    pub is_spawn_spot: bool,
}

/// The battleground export
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BattlegroundDocument {
    /// Participant whose camps are being planned
    pub participant_id: Option<u32>,
    pub provinces: Vec<ProvinceRecord>,
}

impl BattlegroundDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// Builds one initialised graph per call from a topology and a document
pub struct GraphLoader<'a, M: MapTopology> {
    topology: &'a M,
    document: &'a BattlegroundDocument,
    participant: u32,
}

impl<'a, M: MapTopology> GraphLoader<'a, M> {
    /// Create a loader, validating the document up front.
    ///
    /// `participant` overrides the document's own participant id.
    pub fn new(
        topology: &'a M,
        document: &'a BattlegroundDocument,
        participant: Option<u32>,
    ) -> Result<Self> {
        let participant = participant
            .or(document.participant_id)
            .ok_or_else(|| CampError::Load("no participant id given".into()))?;

        let mut seen = BTreeSet::new();
        for province in &document.provinces {
            if !(0..=MAX_BUILDING_SLOTS).contains(&province.total_building_slots) {
                return Err(CampError::InvalidConfig(format!(
                    "province {} has slot count {} outside 0..={}",
                    province.id, province.total_building_slots, MAX_BUILDING_SLOTS
                )));
            }
            if !seen.insert(province.id) {
                return Err(CampError::DuplicateRegion(RegionId(province.id)));
            }
        }

        Ok(Self {
            topology,
            document,
            participant,
        })
    }

    pub fn participant(&self) -> u32 {
        self.participant
    }

    /// Build a fresh graph and initialise every region from its record
    pub fn populate(&self) -> Result<RegionGraph> {
        let mut graph = self.topology.build_graph()?;
        let mut initialised = BTreeSet::new();

        for record in &self.document.provinces {
            let id = RegionId(record.id);
            let Some(region) = graph.get_mut(id) else {
                tracing::warn!(
                    "Skipping province {} outside the {} graph",
                    record.id,
                    self.topology.name()
                );
                continue;
            };

            let capacity = u32::try_from(record.total_building_slots).map_err(|_| {
                CampError::InvalidConfig(format!(
                    "province {} slot count {} out of range",
                    record.id, record.total_building_slots
                ))
            })?;
            let owned = record.owner_id == Some(self.participant);
            region.init(capacity, owned, record.is_spawn_spot);
            initialised.insert(id);
        }

        if let Some(missing) = graph.regions().find(|r| !initialised.contains(&r.id)) {
            return Err(CampError::Load(format!(
                "no province record for {}",
                missing.name
            )));
        }

        Ok(graph)
    }
}
