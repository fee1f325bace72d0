//! Per-dataset UI state: a load result, its filter controls and the
//! current filtered view.

use polars::prelude::*;

use crate::cache::DatasetCache;
use crate::criteria::FilterCriteria;
use crate::dataset::{DatasetId, DatasetSpec};
use crate::filter::apply_filters;
use crate::utils::display_dataframe;

pub struct DatasetPanel {
    pub spec: &'static DatasetSpec,
    state: PanelState,
}

enum PanelState {
    NotLoaded,
    Failed(String),
    Ready(PanelData),
}

struct PanelData {
    data: DataFrame,
    criteria: FilterCriteria,
    filtered: DataFrame,
}

impl DatasetPanel {
    pub fn new(id: DatasetId) -> Self {
        Self {
            spec: id.spec(),
            state: PanelState::NotLoaded,
        }
    }

    pub fn all() -> Vec<DatasetPanel> {
        DatasetId::ALL.iter().map(|id| DatasetPanel::new(*id)).collect()
    }

    /// Drop panel state so the next frame reloads through the cache and
    /// rebuilds the controls from the fresh data.
    pub fn reset(&mut self) {
        self.state = PanelState::NotLoaded;
    }

    pub fn ensure_loaded(&mut self, cache: &mut DatasetCache) {
        if let PanelState::NotLoaded = self.state {
            self.state = match cache.get_or_load(self.spec.id) {
                Ok(df) => {
                    let data = df.clone();
                    let criteria = FilterCriteria::from_frame(&data, self.spec);
                    let filtered = data.clone();
                    PanelState::Ready(PanelData {
                        data,
                        criteria,
                        filtered,
                    })
                }
                Err(e) => {
                    log::error!("{}: {}", self.spec.title, e);
                    PanelState::Failed(e.to_string())
                }
            };
        }
    }

    /// Sidebar section with this dataset's multiselects and range
    /// sliders. Re-applies the filters when any control changes.
    pub fn show_controls(&mut self, ui: &mut egui::Ui) {
        let title = self.spec.title;
        ui.push_id(title, |ui| {
            ui.collapsing(format!("{} Filters", title), |ui| {
                let panel = match &mut self.state {
                    PanelState::Ready(panel) => panel,
                    _ => {
                        ui.weak("no data loaded");
                        return;
                    }
                };
                let mut changed = false;
                for crit in &mut panel.criteria.categorical {
                    ui.collapsing(crit.column.clone(), |ui| {
                        for choice in &crit.choices {
                            let mut on = crit.selected.contains(choice);
                            if ui.checkbox(&mut on, choice.as_str()).changed() {
                                if on {
                                    crit.selected.insert(choice.clone());
                                } else {
                                    crit.selected.remove(choice);
                                }
                                changed = true;
                            }
                        }
                    });
                }
                for crit in &mut panel.criteria.ranges {
                    ui.label(crit.column.as_str());
                    let (full_low, full_high) = crit.full;
                    changed |= ui
                        .add(egui::Slider::new(&mut crit.low, full_low..=full_high).text("min"))
                        .changed();
                    changed |= ui
                        .add(egui::Slider::new(&mut crit.high, full_low..=full_high).text("max"))
                        .changed();
                    if crit.low > crit.high {
                        crit.high = crit.low;
                        changed = true;
                    }
                }
                for column in &panel.criteria.unavailable {
                    ui.weak(format!("{} (no data)", column));
                }
                if changed {
                    match apply_filters(&panel.data, &panel.criteria) {
                        Ok(filtered) => panel.filtered = filtered,
                        Err(e) => log::error!("{}: filter failed: {}", title, e),
                    }
                }
            });
        });
    }

    /// Table section: the filtered view, or a visible failure state.
    pub fn show_table(&mut self, ui: &mut egui::Ui) {
        ui.push_id(("table", self.spec.title), |ui| {
            ui.heading(self.spec.title);
            match &self.state {
                PanelState::NotLoaded => {
                    ui.weak("loading...");
                }
                PanelState::Failed(reason) => {
                    ui.colored_label(
                        egui::Color32::RED,
                        format!("failed to load: {}", reason),
                    );
                }
                PanelState::Ready(panel) => {
                    ui.label(format!(
                        "{} of {} rows",
                        panel.filtered.height(),
                        panel.data.height()
                    ));
                    display_dataframe(&panel.filtered, ui);
                }
            }
            ui.separator();
        });
    }
}
