//! Volcano Archipelago battleground layout
//!
//! Four concentric rings split into quarters A-D. Rings one to three form
//! the connected playing field; ring four labels exist in game data but have
//! no adjacency on this map.

use crate::core::error::{CampError, Result};
use crate::core::types::RegionId;
use crate::map::topology::MapTopology;

const RING_ONE_END: u32 = 4;
const RING_TWO_END: u32 = 12;
const RING_THREE_END: u32 = 28;
const RING_FOUR_END: u32 = 60;

const RING_ONE_SUFFIX: [char; 4] = ['M', 'O', 'N', 'B'];

/// Adjacency table, listed per region the way the in-game map reads
const ADJACENCY: &[(&str, &[&str])] = &[
    // First ring
    ("A1M", &["A2S", "A2T", "B1O", "D1B"]),
    ("B1O", &["A1M", "B2S", "B2T", "C1N"]),
    ("C1N", &["D1B", "B1O", "C2S", "C2T"]),
    ("D1B", &["D2T", "A1M", "C1N", "D2S"]),
    // Second ring
    ("A2S", &["A3V", "A3X", "A2T", "A1M", "D2T"]),
    ("A2T", &["A3Y", "A3Z", "B2S", "A1M", "A2S"]),
    ("B2S", &["A2T", "B3V", "B3X", "B2T", "B1O"]),
    ("B2T", &["B1O", "B2S", "B3Y", "B3Z", "C2S"]),
    ("C2S", &["C1N", "B2T", "C3V", "C3X", "C2T"]),
    ("C2T", &["D2S", "C1N", "C2S", "C3Y", "C3Z"]),
    ("D2S", &["D2T", "D1B", "C2T", "D3V", "D3X"]),
    ("D2T", &["D3Y", "D3Z", "A2S", "D1B", "D2S"]),
    // Third ring
    ("A3V", &["A3X", "A2S", "D3Z"]),
    ("A3X", &["A3Y", "A2S", "A3V"]),
    ("A3Y", &["A3Z", "A2T", "A3X"]),
    ("A3Z", &["B3V", "A2T", "A3Y"]),
    ("B3V", &["B3X", "B2S", "A3Z"]),
    ("B3X", &["B3Y", "B2S", "B3V"]),
    ("B3Y", &["B3Z", "B2T", "B3X"]),
    ("B3Z", &["C3V", "B2T", "B3Y"]),
    ("C3V", &["C3X", "C2S", "B3Z"]),
    ("C3X", &["C3Y", "C2S", "C3V"]),
    ("C3Y", &["C3Z", "C2T", "C3X"]),
    ("C3Z", &["D3V", "C2T", "C3Y"]),
    ("D3V", &["D3X", "D2S", "C3Z"]),
    ("D3X", &["D3Y", "D2S", "D3V"]),
    ("D3Y", &["D3Z", "D2T", "D3X"]),
    ("D3Z", &["A3V", "D2T", "D3Y"]),
];

fn offset(base: char, by: u32) -> char {
    char::from_u32(base as u32 + by).unwrap_or('?')
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VolcanoArchipelago;

impl VolcanoArchipelago {
    pub fn new() -> Self {
        Self
    }

    /// Inverse of `id_to_name`
    pub fn name_to_id(&self, name: &str) -> Result<RegionId> {
        (0..RING_FOUR_END)
            .map(RegionId)
            .find(|&id| self.id_to_name(id).map_or(false, |n| n == name))
            .ok_or_else(|| CampError::UnknownRegion(name.to_string()))
    }
}

impl MapTopology for VolcanoArchipelago {
    fn name(&self) -> &str {
        "Volcano Archipelago"
    }

    fn region_ids(&self) -> Vec<RegionId> {
        (0..RING_THREE_END).map(RegionId).collect()
    }

    fn id_to_name(&self, id: RegionId) -> Result<String> {
        let id = id.0;
        let name = match id {
            _ if id < RING_ONE_END => {
                format!("{}1{}", offset('A', id), RING_ONE_SUFFIX[id as usize])
            }
            _ if id < RING_TWO_END => {
                let tile = if id % 2 == 0 { 'S' } else { 'T' };
                format!("{}2{}", offset('A', (id - RING_ONE_END) / 2), tile)
            }
            _ if id < RING_THREE_END => {
                let tile = if id % 4 == 0 { 'V' } else { offset('W', id % 4) };
                format!("{}3{}", offset('A', (id - RING_TWO_END) / 4), tile)
            }
            _ if id < RING_FOUR_END => {
                format!("{}4{}", offset('A', (id - RING_THREE_END) / 8), offset('A', id % 8))
            }
            _ => {
                return Err(CampError::UnknownRegion(format!(
                    "id {} is past the last region ({})",
                    id,
                    RING_FOUR_END - 1
                )))
            }
        };
        Ok(name)
    }

    fn edges(&self) -> Result<Vec<(RegionId, RegionId)>> {
        let mut edges = Vec::new();
        for (region, neighbors) in ADJACENCY {
            let from = self.name_to_id(region)?;
            for neighbor in *neighbors {
                edges.push((from, self.name_to_id(neighbor)?));
            }
        }
        Ok(edges)
    }
}
