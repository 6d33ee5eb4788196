//! egui-backed rendering surface
//!
//! Holds the last grid description and legend updates it was handed; the
//! grid view draws from this snapshot every frame.

use std::collections::HashMap;

use crate::error::Result;
use crate::plot::{Grid, LegendUpdate, RenderingSurface, Slot};

#[derive(Debug, Default)]
pub struct EguiSurface {
    rows: Vec<Vec<Slot>>,
    legends: HashMap<Slot, LegendUpdate>,
}

impl EguiSurface {
    /// Displayed rows of slots
    pub fn rows(&self) -> &[Vec<Slot>] {
        &self.rows
    }

    /// Legend last pushed for `slot`, if any since the grid changed
    pub fn legend(&self, slot: Slot) -> Option<&LegendUpdate> {
        self.legends.get(&slot)
    }
}

impl RenderingSurface for EguiSurface {
    fn on_grid_changed(&mut self, grid: &Grid) -> Result<()> {
        self.rows = grid.rows().to_vec();
        // Slots may now point at different plots
        self.legends.clear();
        tracing::trace!(rows = self.rows.len(), "grid replaced");
        Ok(())
    }

    fn on_entity_legend_changed(&mut self, update: &LegendUpdate) -> Result<()> {
        self.legends.insert(update.slot, update.clone());
        Ok(())
    }
}
