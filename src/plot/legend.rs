//! Legend and series visibility reconciliation
//!
//! Under [`LegendPolicy::Checkbox`] the controller owns visibility: the
//! checkbox group reports the new active set, every series renderer is shown
//! iff its index is active, and the legend lists only active series in their
//! original order. Under [`LegendPolicy::Click`] the plot widget's legend
//! hides series by itself and the controller stays out of the way.

use super::entity::{LegendPolicy, PlotEntity, Slot};
use super::manager::{PlotCollectionManager, VisibilityHandle};
use crate::data::{Series, SeriesColor};
use crate::error::{PlotError, Result};

/// One entry of a plot legend
#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub color: SeriesColor,
}

/// Legend state of one plot as the rendering surface should show it
#[derive(Debug, Clone, PartialEq)]
pub struct LegendUpdate {
    pub slot: Slot,
    pub items: Vec<LegendItem>,
    /// Visible flag per series renderer
    pub mask: Vec<bool>,
}

/// Applies visibility changes to plots addressed by slot
#[derive(Debug, Clone, Copy, Default)]
pub struct LegendVisibilityController;

impl LegendVisibilityController {
    pub fn new() -> Self {
        Self
    }

    /// Set the active series of a checkbox-policy plot to exactly `active`
    pub fn apply_active(
        &self,
        manager: &mut PlotCollectionManager,
        slot: Slot,
        active: &[usize],
    ) -> Result<LegendUpdate> {
        let handle = checkbox_handle(manager, slot)?;
        handle.visibility.set_active(active.iter().copied())?;
        tracing::debug!(slot = slot.get(), ?active, "series visibility updated");
        Ok(reconcile(&handle))
    }

    /// Flip a single series of a checkbox-policy plot
    pub fn toggle(&self, manager: &mut PlotCollectionManager, slot: Slot, index: usize) -> Result<LegendUpdate> {
        let handle = checkbox_handle(manager, slot)?;
        let now_active = handle.visibility.toggle(index)?;
        tracing::debug!(slot = slot.get(), index, now_active, "series toggled");
        Ok(reconcile(&handle))
    }

    /// Legend view of any plot
    ///
    /// Click-policy plots always list every series; hiding happens inside
    /// the plot widget.
    pub fn legend_for(&self, entity: &PlotEntity) -> LegendUpdate {
        match entity.legend_policy() {
            LegendPolicy::Checkbox => build_update(entity.slot(), entity.series(), |i| {
                entity.visibility().contains(i)
            }),
            LegendPolicy::Click => build_update(entity.slot(), entity.series(), |_| true),
        }
    }
}

fn checkbox_handle(manager: &mut PlotCollectionManager, slot: Slot) -> Result<VisibilityHandle<'_>> {
    let handle = manager.visibility_mut(slot).ok_or(PlotError::UnknownSlot(slot))?;
    if handle.policy != LegendPolicy::Checkbox {
        return Err(PlotError::LegendPolicyMismatch(slot));
    }
    Ok(handle)
}

fn reconcile(handle: &VisibilityHandle<'_>) -> LegendUpdate {
    build_update(handle.slot, handle.series, |i| handle.visibility.contains(i))
}

fn build_update(slot: Slot, series: &[Series], is_active: impl Fn(usize) -> bool) -> LegendUpdate {
    let mask: Vec<bool> = (0..series.len()).map(&is_active).collect();
    let items = series
        .iter()
        .zip(&mask)
        .filter(|(_, active)| **active)
        .map(|(s, _)| LegendItem {
            label: s.label.clone(),
            color: s.color,
        })
        .collect();
    LegendUpdate { slot, items, mask }
}
