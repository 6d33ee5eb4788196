//! Handlers behind the dashboard widgets
//!
//! Each handler runs one user action to completion. Handlers that change the
//! plot collection resync the rendering surface as their last step, so a
//! surface failure leaves the collection committed and the next mutating
//! action repairs the display.

use std::path::{Path, PathBuf};

use crate::data::{FileTableSource, TableSource, list_csv_files};
use crate::error::{PlotError, Result};
use crate::plot::{
    LegendUpdate, LegendVisibilityController, PlotCollectionManager, PlotEntity, RenderingSurface, Slot,
};

/// Outcome of loading every file in the file list
#[derive(Debug, Default)]
pub struct LoadAllReport {
    pub loaded: Vec<Slot>,
    pub failed: Vec<(PathBuf, PlotError)>,
}

/// Plot collection plus the widget state that drives it
pub struct Dashboard<S = FileTableSource> {
    source: S,
    manager: PlotCollectionManager,
    legend: LegendVisibilityController,
    root_path: Option<PathBuf>,
    file_options: Vec<PathBuf>,
    load_target: Option<PathBuf>,
    remove_target: Option<String>,
}

impl<S: TableSource> Dashboard<S> {
    pub fn new(source: S, manager: PlotCollectionManager) -> Self {
        Self {
            source,
            manager,
            legend: LegendVisibilityController::new(),
            root_path: None,
            file_options: Vec::new(),
            load_target: None,
            remove_target: None,
        }
    }

    pub fn manager(&self) -> &PlotCollectionManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut PlotCollectionManager {
        &mut self.manager
    }

    pub fn legend_controller(&self) -> &LegendVisibilityController {
        &self.legend
    }

    pub fn root_path(&self) -> Option<&Path> {
        self.root_path.as_deref()
    }

    pub fn file_options(&self) -> &[PathBuf] {
        &self.file_options
    }

    pub fn load_target(&self) -> Option<&Path> {
        self.load_target.as_deref()
    }

    pub fn remove_target(&self) -> Option<&str> {
        self.remove_target.as_deref()
    }

    /// Scan `root` for CSV files; the first one becomes the load target
    pub fn set_root_path(&mut self, root: impl Into<PathBuf>) -> Result<usize> {
        let root = root.into();
        let files = list_csv_files(&root)?;
        tracing::info!(root = %root.display(), files = files.len(), "root path scanned");

        self.load_target = files.first().cloned();
        self.file_options = files;
        self.root_path = Some(root);
        Ok(self.file_options.len())
    }

    pub fn set_load_target(&mut self, path: impl Into<PathBuf>) {
        self.load_target = Some(path.into());
    }

    pub fn set_remove_target(&mut self, title: impl Into<String>) {
        self.remove_target = Some(title.into());
    }

    /// Load the current load target
    ///
    /// Returns `Ok(None)` when there is no target or it is not a readable file.
    pub fn load(&mut self, surface: &mut dyn RenderingSurface) -> Result<Option<Slot>> {
        let Some(path) = self.load_target.clone() else {
            return Ok(None);
        };
        self.load_path(&path, surface)
    }

    /// Load a specific file, bypassing the file list
    pub fn load_path(&mut self, path: &Path, surface: &mut dyn RenderingSurface) -> Result<Option<Slot>> {
        let slot = self.load_into_manager(path)?;
        if slot.is_some() {
            surface.on_grid_changed(self.manager.grid())?;
        }
        Ok(slot)
    }

    /// Load every file of the file list in order
    ///
    /// A file that fails does not stop the others; failures are reported.
    pub fn load_all(&mut self, surface: &mut dyn RenderingSurface) -> Result<LoadAllReport> {
        let mut report = LoadAllReport::default();
        for path in self.file_options.clone() {
            self.load_target = Some(path.clone());
            match self.load_into_manager(&path) {
                Ok(Some(slot)) => report.loaded.push(slot),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "load failed");
                    report.failed.push((path, e));
                }
            }
        }
        if !report.loaded.is_empty() {
            surface.on_grid_changed(self.manager.grid())?;
        }
        Ok(report)
    }

    fn load_into_manager(&mut self, path: &Path) -> Result<Option<Slot>> {
        let table = match self.source.load_table(path) {
            Ok(table) => table,
            Err(PlotError::SourceNotFound { path }) => {
                tracing::debug!(path = %path.display(), "load target is not a file");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let slot = self.manager.load(&table, source_label(path))?;
        self.remove_target = self.manager.titles().into_iter().next();
        Ok(Some(slot))
    }

    /// Remove the plot named by the remove target
    pub fn remove(&mut self, surface: &mut dyn RenderingSurface) -> Result<Option<PlotEntity>> {
        let Some(title) = self.remove_target.clone() else {
            return Ok(None);
        };
        let Some(removed) = self.manager.remove_by_title(&title) else {
            tracing::debug!(title = %title, "remove target not found");
            return Ok(None);
        };
        self.remove_target = self.manager.titles().into_iter().next();
        surface.on_grid_changed(self.manager.grid())?;
        Ok(Some(removed))
    }

    /// Remove every plot, first slot first
    pub fn remove_all(&mut self, surface: &mut dyn RenderingSurface) -> Result<usize> {
        let removed = self.manager.remove_all();
        self.remove_target = None;
        surface.on_grid_changed(self.manager.grid())?;
        Ok(removed)
    }

    /// Checkbox group of plot `slot` now reports `active`
    pub fn set_series_active(
        &mut self,
        slot: Slot,
        active: &[usize],
        surface: &mut dyn RenderingSurface,
    ) -> Result<LegendUpdate> {
        let update = self.legend.apply_active(&mut self.manager, slot, active)?;
        surface.on_entity_legend_changed(&update)?;
        Ok(update)
    }

    /// Flip one series of plot `slot`
    pub fn toggle_series(
        &mut self,
        slot: Slot,
        index: usize,
        surface: &mut dyn RenderingSurface,
    ) -> Result<LegendUpdate> {
        let update = self.legend.toggle(&mut self.manager, slot, index)?;
        surface.on_entity_legend_changed(&update)?;
        Ok(update)
    }

    /// Push the full grid to the surface again
    pub fn resync(&self, surface: &mut dyn RenderingSurface) -> Result<()> {
        surface.on_grid_changed(self.manager.grid())
    }
}

/// Label a plot by its file name
fn source_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
