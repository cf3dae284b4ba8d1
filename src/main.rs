use eframe::egui;
use tracing_subscriber::EnvFilter;

use granblue_bot_settings::config::AppConfig;
use granblue_bot_settings::ui::app::BotSettingsApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::default();
    let title = config.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([640.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(BotSettingsApp::new(&config)))),
    )
}
