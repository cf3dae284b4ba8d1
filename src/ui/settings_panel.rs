use eframe::egui;

use crate::controller::settings::{load_combat_script, NumberField};
use crate::model::autocomplete::filter_options;
use crate::model::settings::{
    FARMING_MODES, GROUP_RANGE, ITEMS_FOR_QUEST, MISSIONS_FOR_QUEST, PARTY_RANGE,
};
use crate::store::SettingsStore;

/// Edit buffers for the form. The store holds the real values.
pub struct SettingsForm {
    item_query: String,
    item_amount_text: String,
    group: NumberField,
    party: NumberField,
}

impl SettingsForm {
    pub fn new(store: &SettingsStore) -> Self {
        let s = store.settings();
        Self {
            item_query: s.item.clone().unwrap_or_default(),
            item_amount_text: s.item_amount.to_string(),
            group: NumberField::new(s.group_number),
            party: NumberField::new(s.party_number),
        }
    }
}

/// What the caller has to do after the form was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormActions {
    pub open_summon_selection: bool,
}

pub fn draw_settings_form(
    ui: &mut egui::Ui,
    form: &mut SettingsForm,
    store: &mut SettingsStore,
) -> FormActions {
    let mut actions = FormActions::default();

    /* -------- Combat script -------- */

    ui.horizontal(|ui| {
        let mut name = store.settings().current_combat_script_name.clone();
        ui.label("Combat Script");
        ui.add(egui::TextEdit::singleline(&mut name).interactive(false));

        if ui.button("Load Combat Script").clicked() {
            let picked = rfd::FileDialog::new()
                .add_filter("Combat Script", &["txt"])
                .pick_file();
            load_combat_script(picked.as_deref(), store);
        }
    });
    ui.weak("Selected Combat Script");

    ui.separator();

    /* -------- Farming mode -------- */

    let current_mode = store.settings().farming_mode;
    egui::ComboBox::from_label("Farming Mode")
        .selected_text(current_mode.map(|m| m.label()).unwrap_or("Select..."))
        .show_ui(ui, |ui| {
            for mode in FARMING_MODES {
                if ui
                    .selectable_label(current_mode == Some(mode), mode.label())
                    .clicked()
                {
                    store.set_farming_mode(Some(mode));
                }
            }
        });
    ui.weak("Please select the Farming Mode");

    /* -------- Item -------- */

    draw_item_picker(ui, form, store);

    /* -------- Mission -------- */

    let current_mission = store.settings().mission.clone();
    egui::ComboBox::from_label("Mission")
        .selected_text(if current_mission.is_empty() {
            "Select..."
        } else {
            current_mission.as_str()
        })
        .show_ui(ui, |ui| {
            for mission in MISSIONS_FOR_QUEST {
                if ui
                    .selectable_label(current_mission == mission, mission)
                    .clicked()
                {
                    store.set_mission(mission.to_string());
                }
            }
        });
    ui.weak("Please select the Mission");

    /* -------- Item amount -------- */

    ui.horizontal(|ui| {
        ui.label("# of Items");
        if ui.text_edit_singleline(&mut form.item_amount_text).changed() {
            store.set_item_amount_text(&form.item_amount_text);
        }
    });
    ui.weak("Please select the amount of Items to farm");

    ui.separator();

    /* -------- Summons -------- */

    let summon_count = store.summons().len();
    if ui
        .button(format!("Select Summons ({summon_count} selected)"))
        .clicked()
    {
        actions.open_summon_selection = true;
    }

    ui.separator();

    /* -------- Group & party -------- */

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label("Group #");
            if ui.text_edit_singleline(form.group.text_mut()).changed() {
                if let Some(value) = form.group.commit() {
                    store.set_group_number(value);
                }
            }
            let error = form.group.shows_error(store.settings().group_number, &GROUP_RANGE);
            range_hint(ui, "From 1 to 7", error);
        });

        ui.add_space(24.0);

        ui.vertical(|ui| {
            ui.label("Party #");
            if ui.text_edit_singleline(form.party.text_mut()).changed() {
                if let Some(value) = form.party.commit() {
                    store.set_party_number(value);
                }
            }
            let error = form.party.shows_error(store.settings().party_number, &PARTY_RANGE);
            range_hint(ui, "From 1 to 6", error);
        });
    });

    ui.separator();

    /* -------- Debug -------- */

    let mut debug_mode = store.settings().debug_mode;
    if ui.checkbox(&mut debug_mode, "Enable Debug Mode").changed() {
        store.set_debug_mode(debug_mode);
    }
    ui.weak("Enables debugging messages to show up in the log");

    actions
}

fn range_hint(ui: &mut egui::Ui, text: &str, error: bool) {
    if error {
        let color = ui.visuals().error_fg_color;
        ui.colored_label(color, text);
    } else {
        ui.weak(text);
    }
}

fn draw_item_picker(ui: &mut egui::Ui, form: &mut SettingsForm, store: &mut SettingsStore) {
    ui.horizontal(|ui| {
        ui.label("Select Item");
        ui.add(egui::TextEdit::singleline(&mut form.item_query).hint_text("Search items"));

        if store.settings().item.is_some() && ui.small_button("✕").clicked() {
            form.item_query.clear();
            store.set_item(None);
        }
    });

    let selected = store.settings().item.clone();
    let showing_selection = selected.as_deref() == Some(form.item_query.as_str());

    if !showing_selection {
        let normal = ui.visuals().text_color();
        let strong = ui.visuals().strong_text_color();

        for hit in filter_options(&ITEMS_FOR_QUEST, &form.item_query) {
            let mut job = egui::text::LayoutJob::default();
            for (text, highlighted) in hit.parts() {
                append(&mut job, text, if highlighted { strong } else { normal }, highlighted);
            }

            if ui.selectable_label(false, job).clicked() {
                form.item_query = hit.option.to_string();
                store.set_item(Some(hit.option.to_string()));
            }
        }
    }

    ui.weak("Please select/search the Item to farm");
}

fn append(job: &mut egui::text::LayoutJob, text: &str, color: egui::Color32, underline: bool) {
    job.append(
        text,
        0.0,
        egui::TextFormat {
            font_id: egui::FontId::proportional(14.0),
            color,
            underline: if underline {
                egui::Stroke::new(1.0, color)
            } else {
                egui::Stroke::NONE
            },
            ..Default::default()
        },
    );
}
