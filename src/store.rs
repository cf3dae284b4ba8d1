use crate::config::AppConfig;
use crate::model::settings::{parse_item_amount, BotSettings, FarmingMode, Validation};
use crate::persistence::protocol::{Generation, WriterEvent};
use crate::persistence::settings_io::load_or_default;
use crate::persistence::writer::SettingsWriter;

/// Shared settings handle. Owned by the app and passed explicitly to the
/// settings form and the summon transfer list; every change goes through a
/// setter so it is persisted exactly once.
pub struct SettingsStore {
    settings: BotSettings,
    writer: SettingsWriter,
    next_generation: Generation,

    ready: bool,
    last_saved: Option<Generation>,
    last_error: Option<String>,
}

impl SettingsStore {
    pub fn open(config: &AppConfig) -> Self {
        let settings = load_or_default(&config.settings_path);
        let writer = SettingsWriter::spawn(config.settings_path.clone());
        Self::with_writer(settings, writer)
    }

    pub fn with_writer(settings: BotSettings, writer: SettingsWriter) -> Self {
        Self {
            settings,
            ready: false,
            writer,
            next_generation: 1,
            last_saved: None,
            last_error: None,
        }
    }

    pub fn settings(&self) -> &BotSettings {
        &self.settings
    }

    pub fn summons(&self) -> &[String] {
        &self.settings.summons
    }

    pub fn validation(&self) -> Validation {
        self.settings.validation()
    }

    /// Whether the bot may be started.
    pub fn ready(&self) -> bool {
        self.ready
    }

    pub fn last_saved_generation(&self) -> Option<Generation> {
        self.last_saved
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /* -------- Mutation -------- */

    fn update(&mut self, field: &'static str, apply: impl FnOnce(&mut BotSettings)) -> bool {
        let before = self.settings.clone();
        apply(&mut self.settings);
        if self.settings == before {
            return false;
        }

        let generation = self.next_generation;
        self.next_generation += 1;
        tracing::debug!(field, generation, "settings changed");
        self.writer.submit(generation, self.settings.clone());
        true
    }

    pub fn set_combat_script(&mut self, name: String, contents: String) -> bool {
        self.update("combat_script", |s| {
            s.current_combat_script_name = name;
            s.current_combat_script = contents;
        })
    }

    pub fn clear_combat_script(&mut self) -> bool {
        self.update("combat_script", |s| {
            s.current_combat_script_name.clear();
            s.current_combat_script.clear();
        })
    }

    pub fn set_farming_mode(&mut self, mode: Option<FarmingMode>) -> bool {
        self.update("farming_mode", |s| s.farming_mode = mode)
    }

    pub fn set_item(&mut self, item: Option<String>) -> bool {
        self.update("item", |s| s.item = item)
    }

    pub fn set_mission(&mut self, mission: String) -> bool {
        self.update("mission", |s| s.mission = mission)
    }

    pub fn set_item_amount(&mut self, amount: u32) -> bool {
        self.update("item_amount", |s| s.item_amount = amount)
    }

    pub fn set_item_amount_text(&mut self, input: &str) -> bool {
        self.set_item_amount(parse_item_amount(input))
    }

    /// Stored even when outside 1..=7; the form shows the hint.
    pub fn set_group_number(&mut self, group: i64) -> bool {
        self.update("group_number", |s| s.group_number = group)
    }

    /// Stored even when outside 1..=6; the form shows the hint.
    pub fn set_party_number(&mut self, party: i64) -> bool {
        self.update("party_number", |s| s.party_number = party)
    }

    pub fn set_debug_mode(&mut self, enabled: bool) -> bool {
        // TODO: derive readiness from the loaded combat script and farming target
        // once the bot backend reports its own status.
        self.ready = enabled;
        self.update("debug_mode", |s| s.debug_mode = enabled)
    }

    pub fn set_summons(&mut self, summons: Vec<String>) -> bool {
        self.update("summons", |s| s.summons = summons)
    }

    /* -------- Writer feedback -------- */

    pub fn pump_events(&mut self) {
        for event in self.writer.poll_events() {
            match event {
                WriterEvent::Saved { generation } => {
                    self.last_saved = Some(generation);
                    self.last_error = None;
                }
                WriterEvent::Failed { reason, .. } => self.last_error = Some(reason),
                WriterEvent::Superseded { .. } => {}
            }
        }
    }

    /// Waits for outstanding saves and applies their results.
    pub fn flush(&mut self) {
        self.writer.flush();
        self.pump_events();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::settings_io::load_settings;
    use std::fs;
    use tempfile::TempDir;

    fn open_in(dir: &TempDir) -> (SettingsStore, std::path::PathBuf) {
        let path = dir.path().join("settings.json");
        let config = AppConfig::default().with_settings_path(&path);
        (SettingsStore::open(&config), path)
    }

    #[test]
    fn fresh_store_uses_defaults_and_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let (mut store, path) = open_in(&dir);
        store.flush();

        assert_eq!(store.settings(), &BotSettings::default());
        assert!(!path.exists());
        assert_eq!(store.last_saved_generation(), None);
    }

    #[test]
    fn every_change_is_persisted() {
        let dir = TempDir::new().unwrap();
        let (mut store, path) = open_in(&dir);

        assert!(store.set_farming_mode(Some(FarmingMode::Quest)));
        assert!(store.set_item(Some("Satin Feather".into())));
        assert!(store.set_mission("test1".into()));
        assert!(store.set_item_amount_text("12"));
        assert!(store.set_summons(vec!["Zeus".into()]));
        store.flush();

        let on_disk = load_settings(&path).unwrap();
        assert_eq!(&on_disk, store.settings());
        assert_eq!(on_disk.item_amount, 12);
        assert_eq!(store.last_saved_generation(), Some(5));
        assert_eq!(store.last_error(), None);
    }

    #[test]
    fn unchanged_assignment_is_not_saved() {
        let dir = TempDir::new().unwrap();
        let (mut store, path) = open_in(&dir);

        assert!(!store.set_group_number(1));
        assert!(!store.set_item_amount_text("not a number"));
        store.flush();
        assert!(!path.exists());
    }

    #[test]
    fn out_of_range_numbers_are_flagged_and_saved() {
        let dir = TempDir::new().unwrap();
        let (mut store, path) = open_in(&dir);

        assert!(store.set_group_number(8));
        assert!(store.set_party_number(0));
        assert_eq!(
            store.validation(),
            Validation {
                group_out_of_range: true,
                party_out_of_range: true
            }
        );
        store.flush();

        let on_disk = load_settings(&path).unwrap();
        assert_eq!(on_disk.group_number, 8);
        assert_eq!(on_disk.party_number, 0);
    }

    #[test]
    fn reopening_restores_saved_record() {
        let dir = TempDir::new().unwrap();
        let (mut store, _) = open_in(&dir);
        store.set_combat_script("farm.txt".into(), "Turn 1:\nend".into());
        store.set_debug_mode(true);
        store.flush();
        let saved = store.settings().clone();
        drop(store);

        let (mut reopened, _) = open_in(&dir);
        assert_eq!(reopened.settings(), &saved);
        // readiness only follows the checkbox, never the loaded file
        assert!(!reopened.ready());

        assert!(!reopened.set_debug_mode(true));
        assert!(reopened.ready());
    }

    #[test]
    fn malformed_file_loads_defaults_and_is_overwritten_on_edit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        let mut store = SettingsStore::open(&AppConfig::default().with_settings_path(&path));
        assert_eq!(store.settings(), &BotSettings::default());

        store.set_debug_mode(true);
        store.flush();
        assert!(load_settings(&path).unwrap().debug_mode);
    }

    #[test]
    fn write_failure_is_surfaced_without_losing_memory_state() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone").join("settings.json");
        let mut store = SettingsStore::open(&AppConfig::default().with_settings_path(&path));

        store.set_mission("test1".into());
        store.flush();

        assert_eq!(store.settings().mission, "test1");
        assert!(store.last_error().is_some());
        assert_eq!(store.last_saved_generation(), None);
    }
}
