use serde::{Deserialize, Serialize};

use super::interpolation::entity_gdp;
use super::metrics::{all_entity_snapshot, EntitySnapshot};
use crate::models::{Dataset, Entity};

/// One trillion USD, in billions.
pub const TRILLION: f64 = 1000.0;

/// Lower bound for an entity to count as a contender.
pub const CONTENDER_FLOOR: f64 = 100.0;

/// Number of contenders reported by the tracker.
pub const CONTENDER_COUNT: usize = 3;

/// An entity's position relative to the $1T mark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrillionEntry {
    pub code: String,
    pub name: String,
    pub gdp: f64,
    /// Progress toward $1T in percent, capped at 100
    pub progress_percent: f64,
}

/// Entities at or above $1T and the nearest contenders for one year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrillionTracker {
    pub year: f64,
    /// Members sorted by GDP, largest first
    pub members: Vec<TrillionEntry>,
    /// Up to three entities between $100B and $1T, largest first
    pub contenders: Vec<TrillionEntry>,
}

impl TrillionTracker {
    /// Nothing to show: no members and no contenders.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty() && self.contenders.is_empty()
    }
}

/// First timeline year in which `entity` reaches $1T, if any.
pub fn trillion_year(data: &Dataset, entity: &Entity) -> Option<i32> {
    data.timeline()
        .into_iter()
        .find(|&y| entity_gdp(data.national(), entity, y as f64) >= TRILLION)
}

/// Build the $1T tracker for `year`.
pub fn trillion_tracker(data: &Dataset, year: f64) -> TrillionTracker {
    let mut snapshots = all_entity_snapshot(data, year);
    snapshots.sort_by(|a, b| b.gdp.total_cmp(&a.gdp));

    let members = snapshots
        .iter()
        .filter(|s| s.gdp >= TRILLION)
        .map(entry)
        .collect();
    let contenders = snapshots
        .iter()
        .filter(|s| s.gdp < TRILLION && s.gdp >= CONTENDER_FLOOR)
        .take(CONTENDER_COUNT)
        .map(entry)
        .collect();

    TrillionTracker {
        year,
        members,
        contenders,
    }
}

fn entry(s: &EntitySnapshot) -> TrillionEntry {
    TrillionEntry {
        code: s.code.clone(),
        name: s.name.clone(),
        gdp: s.gdp,
        progress_percent: (s.gdp / TRILLION * 100.0).min(100.0),
    }
}
