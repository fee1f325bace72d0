use crate::cache::DatasetCache;
use crate::panel::DatasetPanel;

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct App {
    label: String,
    // this how you opt-out of serialization of a member
    #[serde(skip)]
    cache: DatasetCache,
    #[serde(skip)]
    panels: Vec<DatasetPanel>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            label: "MLB Odds Dashboard".to_owned(),
            cache: DatasetCache::default(),
            panels: DatasetPanel::all(),
        }
    }
}

impl App {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        // This is also where you can customize the look and feel of egui using
        // `cc.egui_ctx.set_visuals` and `cc.egui_ctx.set_fonts`.
        Default::default()
    }
}

impl eframe::App for App {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Data", |ui| {
                    if ui.button("Refresh").clicked() {
                        // drop every cached dataset and rebuild each
                        // panel's controls from the reloaded data
                        self.cache.invalidate_all();
                        for panel in &mut self.panels {
                            panel.reset();
                        }
                        ui.close_menu();
                    }
                });
                ui.menu_button("App", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        egui::SidePanel::left("filters")
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.heading("Filters");
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for panel in &mut self.panels {
                        panel.ensure_loaded(&mut self.cache);
                        panel.show_controls(ui);
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.label);
            egui::ScrollArea::vertical().show(ui, |ui| {
                for panel in &mut self.panels {
                    panel.show_table(ui);
                }
            });
            egui::warn_if_debug_build(ui);
        });
    }
}
