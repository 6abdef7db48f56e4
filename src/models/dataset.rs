use std::collections::HashSet;

use super::data::{EntityRecord, ENTITIES, INDIA_GDP, INDIA_POPULATION, INDIA_RANK};
use super::{Entity, NationalSeries};
use crate::error::GdpError;

/// The immutable anchor dataset: national series plus all states/UTs.
#[derive(Debug, Clone)]
pub struct Dataset {
    national: NationalSeries,
    entities: Vec<Entity>,
}

impl Dataset {
    /// Assemble a dataset, rejecting duplicate entity codes.
    pub fn new(national: NationalSeries, entities: Vec<Entity>) -> Result<Self, GdpError> {
        let mut seen = HashSet::new();
        for entity in &entities {
            if !seen.insert(entity.code.to_uppercase()) {
                return Err(GdpError::ValidationError(format!(
                    "duplicate entity code '{}'",
                    entity.code
                )));
            }
        }
        Ok(Self { national, entities })
    }

    /// The dataset compiled into the program.
    pub fn builtin() -> Result<Self, GdpError> {
        let national = NationalSeries::new(INDIA_GDP, INDIA_POPULATION, INDIA_RANK)?;
        let entities = ENTITIES
            .iter()
            .map(entity_from_record)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(
            entities = entities.len(),
            min_year = national.min_year(),
            max_year = national.max_year(),
            "loaded built-in dataset"
        );
        Self::new(national, entities)
    }

    pub fn national(&self) -> &NationalSeries {
        &self.national
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Look up an entity by code, case-insensitively.
    pub fn entity(&self, code: &str) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|e| e.code.eq_ignore_ascii_case(code.trim()))
    }

    /// Look up an entity by code, failing with `GdpError::UnknownEntity`.
    pub fn require_entity(&self, code: &str) -> Result<&Entity, GdpError> {
        self.entity(code)
            .ok_or_else(|| GdpError::UnknownEntity(code.to_string()))
    }

    pub fn min_year(&self) -> i32 {
        self.national.min_year()
    }

    pub fn max_year(&self) -> i32 {
        self.national.max_year()
    }

    /// Every timeline year, ascending.
    pub fn timeline(&self) -> Vec<i32> {
        self.national.timeline()
    }
}

fn entity_from_record(record: &EntityRecord) -> Result<Entity, GdpError> {
    Ok(Entity::new(
        record.code,
        record.name,
        record.population_millions,
        record.gdp_anchors.iter().copied(),
    )?
    .with_focus_sectors(record.focus_sectors)
    .with_cumulative_investment(record.cumulative_investment))
}
