use eframe::egui;

use crate::config::AppConfig;
use crate::controller::transfer::TransferList;
use crate::model::catalog::SummonCatalog;
use crate::store::SettingsStore;
use crate::ui::settings_panel::{draw_settings_form, SettingsForm};
use crate::ui::summon_icons::SummonIcons;
use crate::ui::transfer_list::draw_transfer_list;

/* =========================
   App
   ========================= */

pub struct BotSettingsApp {
    store: SettingsStore,
    catalog: SummonCatalog,
    form: SettingsForm,
    icons: SummonIcons,

    // Some while the summon selection dialog is open
    transfer: Option<TransferList>,
}

impl BotSettingsApp {
    pub fn new(config: &AppConfig) -> Self {
        let store = SettingsStore::open(config);

        let catalog = SummonCatalog::builtin().unwrap_or_else(|err| {
            tracing::error!("{err}; summon selection will be empty");
            SummonCatalog::default()
        });

        Self {
            form: SettingsForm::new(&store),
            icons: SummonIcons::new(config.summon_assets_dir.clone()),
            store,
            catalog,
            transfer: None,
        }
    }

    fn draw_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if self.store.ready() {
                ui.colored_label(egui::Color32::from_rgb(80, 170, 90), "● Ready");
            } else {
                ui.weak("○ Not ready");
            }

            ui.separator();

            match (self.store.last_error(), self.store.last_saved_generation()) {
                (Some(err), _) => {
                    let color = ui.visuals().error_fg_color;
                    ui.colored_label(color, format!("Save failed: {err}"));
                }
                (None, Some(_)) => {
                    ui.weak("Settings saved");
                }
                (None, None) => {}
            }
        });
    }

    fn draw_summon_modal(&mut self, ctx: &egui::Context) {
        let Some(list) = self.transfer.as_mut() else {
            return;
        };

        let store = &mut self.store;
        let icons = &mut self.icons;
        let mut close = false;

        let response = egui::Modal::new(egui::Id::new("summon_selection")).show(ctx, |ui| {
            ui.set_width(560.0);
            ui.heading("Select Support Summon(s)");
            ui.separator();
            draw_transfer_list(ui, list, store, icons);
            ui.separator();
            if ui.button("Done").clicked() {
                close = true;
            }
        });

        if close || response.should_close() {
            self.transfer = None;
        }
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for BotSettingsApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        self.store.pump_events();

        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            self.draw_status_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let actions = draw_settings_form(ui, &mut self.form, &mut self.store);
                if actions.open_summon_selection && self.transfer.is_none() {
                    self.transfer = Some(TransferList::open(&self.catalog, &self.store));
                }
            });
        });

        self.draw_summon_modal(ctx);
    }
}
