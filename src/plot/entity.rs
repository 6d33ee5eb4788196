//! A single plot and its metadata

use std::collections::BTreeSet;
use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::data::{Bounds, Series};
use crate::error::{PlotError, Result};

/// Dense 1-based position of a live plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(NonZeroUsize);

impl Slot {
    pub fn new(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(Slot)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Position in the manager's storage
    pub(crate) fn index(self) -> usize {
        self.0.get() - 1
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Slot(NonZeroUsize::MIN.saturating_add(index))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session-unique identity of a plot, stable across renumbering
///
/// Only used to key widget state; naming always goes through [`Slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u64);

/// How a plot lets the user hide series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPolicy {
    /// One checkbox per series next to the plot
    #[default]
    Checkbox,
    /// Clicking a legend entry hides its series
    Click,
}

impl LegendPolicy {
    /// Whether the plot widget's own clickable legend is shown
    pub fn uses_plot_legend(self) -> bool {
        matches!(self, LegendPolicy::Click)
    }
}

/// Set of series indices currently shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityMask {
    active: BTreeSet<usize>,
    len: usize,
}

impl VisibilityMask {
    /// Every series of `len` active
    pub fn all(len: usize) -> Self {
        Self {
            active: (0..len).collect(),
            len,
        }
    }

    /// Replace the active set; out-of-range indices reject the whole update
    pub fn set_active(&mut self, active: impl IntoIterator<Item = usize>) -> Result<()> {
        let active: BTreeSet<usize> = active.into_iter().collect();
        if let Some(&index) = active.iter().find(|&&i| i >= self.len) {
            return Err(PlotError::SeriesIndexOutOfRange { index, len: self.len });
        }
        self.active = active;
        Ok(())
    }

    /// Flip one index, returning whether it is now active
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        if index >= self.len {
            return Err(PlotError::SeriesIndexOutOfRange { index, len: self.len });
        }
        if self.active.remove(&index) {
            Ok(false)
        } else {
            self.active.insert(index);
            Ok(true)
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.active.contains(&index)
    }

    /// One visible flag per series
    pub fn flags(&self) -> Vec<bool> {
        (0..self.len).map(|i| self.contains(i)).collect()
    }
}

/// One rendered chart plus its metadata
#[derive(Debug, Clone)]
pub struct PlotEntity {
    pub(super) id: EntityId,
    pub(super) slot: Slot,
    pub(super) source_label: String,
    pub(super) display_title: String,
    pub(super) series: Vec<Series>,
    pub(super) bounds: Bounds,
    pub(super) visibility: VisibilityMask,
    pub(super) legend_policy: LegendPolicy,
}

impl PlotEntity {
    pub(super) fn new(
        id: EntityId,
        slot: Slot,
        source_label: String,
        series: Vec<Series>,
        bounds: Bounds,
        legend_policy: LegendPolicy,
    ) -> Self {
        let display_title = title_for(slot, &source_label);
        let visibility = VisibilityMask::all(series.len());
        Self {
            id,
            slot,
            source_label,
            display_title,
            series,
            bounds,
            visibility,
            legend_policy,
        }
    }

    /// Move to a new slot, recomputing the title
    pub(super) fn reslot(&mut self, slot: Slot) {
        self.slot = slot;
        self.display_title = title_for(slot, &self.source_label);
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    pub fn display_title(&self) -> &str {
        &self.display_title
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn visibility(&self) -> &VisibilityMask {
        &self.visibility
    }

    pub fn legend_policy(&self) -> LegendPolicy {
        self.legend_policy
    }
}

pub(crate) fn title_for(slot: Slot, source_label: &str) -> String {
    format!("{}_{}", slot, source_label)
}
