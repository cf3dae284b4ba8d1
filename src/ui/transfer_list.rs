use eframe::egui;

use crate::controller::transfer::TransferList;
use crate::model::selection::Side;
use crate::store::SettingsStore;
use crate::ui::summon_icons::SummonIcons;

const ICON_SIZE: f32 = 36.0;
const LIST_HEIGHT: f32 = 200.0;

pub fn draw_transfer_list(
    ui: &mut egui::Ui,
    list: &mut TransferList,
    store: &mut SettingsStore,
    icons: &mut SummonIcons,
) {
    let mut clicked: Option<(String, Side)> = None;

    ui.columns(2, |cols| {
        let available = list.available();
        if let Some(name) = summon_column(&mut cols[0], "Available Support Summons", &available, icons) {
            clicked = Some((name, Side::Available));
        }

        let selected = list.selected();
        if let Some(name) = summon_column(&mut cols[1], "Selected Support Summons", &selected, icons) {
            clicked = Some((name, Side::Selected));
        }
    });

    if let Some((name, side)) = clicked {
        list.toggle(&name, side, store);
    }
}

fn summon_column(
    ui: &mut egui::Ui,
    title: &str,
    items: &[&str],
    icons: &mut SummonIcons,
) -> Option<String> {
    let mut clicked = None;

    ui.heading(title);
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt(title)
        .max_height(LIST_HEIGHT)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for &name in items {
                let mut hit = false;
                ui.horizontal(|ui| {
                    if let Some(texture) = icons.get(ui.ctx(), name) {
                        let image = egui::Image::from_texture(
                            egui::load::SizedTexture::from_handle(texture),
                        )
                        .fit_to_exact_size(egui::vec2(ICON_SIZE, ICON_SIZE))
                        .sense(egui::Sense::click());
                        hit |= ui.add(image).on_hover_text(name).clicked();
                    }
                    hit |= ui.selectable_label(false, name).clicked();
                });
                if hit {
                    clicked = Some(name.to_string());
                }
            }
        });

    clicked
}
