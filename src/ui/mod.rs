pub mod app;
pub mod settings_panel;
pub mod summon_icons;
pub mod transfer_list;
