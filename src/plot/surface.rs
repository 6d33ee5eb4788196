//! Seam between plot state and whatever draws it

use super::grid::Grid;
use super::legend::LegendUpdate;
use crate::error::Result;

/// Host that displays the grid of plots
///
/// Both calls replace what is on screen; a failure only affects the current
/// interaction and is repaired by the next full grid update.
pub trait RenderingSurface {
    /// Replace every displayed plot row with `grid`
    fn on_grid_changed(&mut self, grid: &Grid) -> Result<()>;

    /// Update one plot's legend in place
    fn on_entity_legend_changed(&mut self, update: &LegendUpdate) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::error::PlotError;

    /// Surface that records what it was told to show
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub grids: Vec<Grid>,
        pub legends: Vec<LegendUpdate>,
        pub fail: bool,
    }

    impl RecordingSurface {
        pub fn last_grid(&self) -> Option<&Grid> {
            self.grids.last()
        }
    }

    impl RenderingSurface for RecordingSurface {
        fn on_grid_changed(&mut self, grid: &Grid) -> Result<()> {
            if self.fail {
                return Err(PlotError::SurfaceUnavailable("recording surface offline".into()));
            }
            self.grids.push(grid.clone());
            Ok(())
        }

        fn on_entity_legend_changed(&mut self, update: &LegendUpdate) -> Result<()> {
            if self.fail {
                return Err(PlotError::SurfaceUnavailable("recording surface offline".into()));
            }
            self.legends.push(update.clone());
            Ok(())
        }
    }
}
