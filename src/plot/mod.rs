//! Plot collection: entities, grid layout and legend visibility

mod entity;
mod grid;
mod legend;
mod manager;
mod surface;

pub use entity::{LegendPolicy, PlotEntity, Slot};
pub use grid::Grid;
pub use legend::{LegendUpdate, LegendVisibilityController};
pub use manager::PlotCollectionManager;
pub use surface::RenderingSurface;

#[cfg(test)]
pub(crate) use surface::testing;
