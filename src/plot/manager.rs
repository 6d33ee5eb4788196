//! Plot collection manager
//!
//! Owns every live [`PlotEntity`], keeps their slots dense (`1..=n`) and their
//! titles in sync, and maintains the [`Grid`] the rendering surface displays.
//!
//! Loading always appends at the tail, so the grid is extended in place.
//! Removing shifts every later plot down by one slot; the grid is then
//! repacked from scratch.

use super::entity::{EntityId, LegendPolicy, PlotEntity, Slot, VisibilityMask};
use super::grid::Grid;
use crate::data::{Series, SeriesConvention, Table, extract};
use crate::error::Result;

/// Borrow of one entity's visibility alongside its read-only series
pub struct VisibilityHandle<'a> {
    pub slot: Slot,
    pub policy: LegendPolicy,
    pub series: &'a [Series],
    pub visibility: &'a mut VisibilityMask,
}

/// Owner of the displayed plots and their layout
#[derive(Debug, Clone)]
pub struct PlotCollectionManager {
    /// Entity at index `i` holds slot `i + 1`
    entities: Vec<PlotEntity>,
    grid: Grid,
    convention: SeriesConvention,
    legend_policy: LegendPolicy,
    next_id: u64,
}

impl PlotCollectionManager {
    pub fn new(max_per_row: usize, convention: SeriesConvention, legend_policy: LegendPolicy) -> Self {
        Self {
            entities: Vec::new(),
            grid: Grid::new(max_per_row),
            convention,
            legend_policy,
            next_id: 0,
        }
    }

    /// Create a plot from `table` and append it at slot `n + 1`
    ///
    /// Extraction failures leave the collection untouched.
    pub fn load(&mut self, table: &Table, source_label: impl Into<String>) -> Result<Slot> {
        let source_label = source_label.into();
        let extraction = extract(table, &self.convention, &source_label)?;

        let slot = Slot::from_index(self.entities.len());
        let id = EntityId(self.next_id);
        self.next_id += 1;

        let entity = PlotEntity::new(
            id,
            slot,
            source_label,
            extraction.series,
            extraction.bounds,
            self.legend_policy,
        );
        tracing::info!(
            slot = slot.get(),
            title = entity.display_title(),
            series = entity.series().len(),
            "plot loaded"
        );

        self.entities.push(entity);
        self.grid.push(slot);
        self.check_invariants();
        Ok(slot)
    }

    /// Remove the plot at `slot` and renumber the ones after it
    ///
    /// Returns `None` when the slot is not live.
    pub fn remove(&mut self, slot: Slot) -> Option<PlotEntity> {
        if slot.index() >= self.entities.len() {
            tracing::debug!(slot = slot.get(), "remove target not live");
            return None;
        }

        let removed = self.entities.remove(slot.index());

        // Everything before the removal point already holds its slot
        for (index, entity) in self.entities.iter_mut().enumerate().skip(slot.index()) {
            let new_slot = Slot::from_index(index);
            if entity.slot != new_slot {
                entity.reslot(new_slot);
            }
        }

        self.repack();
        tracing::info!(
            slot = slot.get(),
            title = removed.display_title(),
            remaining = self.entities.len(),
            "plot removed"
        );
        self.check_invariants();
        Some(removed)
    }

    /// Remove the plot currently titled `title`
    pub fn remove_by_title(&mut self, title: &str) -> Option<PlotEntity> {
        let slot = self.slot_of_title(title)?;
        self.remove(slot)
    }

    /// Remove the first plot until none remain; returns how many were removed
    pub fn remove_all(&mut self) -> usize {
        let mut removed = 0;
        while let Some(first) = self.first_slot() {
            if self.remove(first).is_some() {
                removed += 1;
            }
        }
        removed
    }

    fn repack(&mut self) {
        self.grid = Grid::pack(
            self.entities.iter().map(PlotEntity::slot),
            self.grid.max_per_row(),
        );
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, slot: Slot) -> Option<&PlotEntity> {
        self.entities.get(slot.index())
    }

    /// Entities in slot order
    pub fn iter(&self) -> impl Iterator<Item = &PlotEntity> {
        self.entities.iter()
    }

    pub fn first_slot(&self) -> Option<Slot> {
        self.entities.first().map(PlotEntity::slot)
    }

    /// Display titles in slot order, as shown in the plot select list
    pub fn titles(&self) -> Vec<String> {
        self.entities
            .iter()
            .map(|e| e.display_title().to_string())
            .collect()
    }

    pub fn slot_of_title(&self, title: &str) -> Option<Slot> {
        self.entities
            .iter()
            .find(|e| e.display_title() == title)
            .map(PlotEntity::slot)
    }

    /// Change the row width and repack; values below 1 are clamped
    pub fn set_max_per_row(&mut self, max_per_row: usize) {
        self.grid = Grid::pack(self.entities.iter().map(PlotEntity::slot), max_per_row);
        self.check_invariants();
    }

    pub fn convention(&self) -> &SeriesConvention {
        &self.convention
    }

    /// Convention used by later loads; existing plots keep their series
    pub fn set_convention(&mut self, convention: SeriesConvention) {
        self.convention = convention;
    }

    /// Policy given to plots loaded from now on
    pub fn legend_policy(&self) -> LegendPolicy {
        self.legend_policy
    }

    pub fn set_legend_policy(&mut self, policy: LegendPolicy) {
        self.legend_policy = policy;
    }

    /// Mutable access to one entity's visibility, nothing else
    pub fn visibility_mut(&mut self, slot: Slot) -> Option<VisibilityHandle<'_>> {
        let entity = self.entities.get_mut(slot.index())?;
        Some(VisibilityHandle {
            slot: entity.slot,
            policy: entity.legend_policy,
            series: &entity.series,
            visibility: &mut entity.visibility,
        })
    }

    fn check_invariants(&self) {
        debug_assert!(
            self.entities
                .iter()
                .enumerate()
                .all(|(i, e)| e.slot == Slot::from_index(i)),
            "slots must be dense and ordered"
        );
        debug_assert!(
            self.entities
                .iter()
                .all(|e| e.display_title == super::entity::title_for(e.slot, &e.source_label)),
            "titles must follow their slots"
        );
        debug_assert!(self.grid.is_well_packed(), "grid rows must be packed");
        debug_assert!(
            self.grid.slots().eq(self.entities.iter().map(PlotEntity::slot)),
            "grid order must match slot order"
        );
    }
}
