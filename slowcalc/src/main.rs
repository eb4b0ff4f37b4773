//! SlowCalc - A calculator for the Slow Computer
//!
//! Four-function stack calculator: digits, + - * /, equals and clear.

mod app;

use app::SlowCalcApp;
use eframe::NativeOptions;
use slowcalc::config::CalcSettings;

fn main() -> eframe::Result<()> {
    // Filter with RUST_LOG, e.g. RUST_LOG=slowcalc=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = CalcSettings::load_or_default(&CalcSettings::config_path());

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(settings.window_size())
        .with_resizable(false)
        .with_title("calculator");
    if let Some(pos) = slowcore::cascade_position() {
        viewport = viewport.with_position(pos);
    }
    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(move |cc| {
            slowcore::SlowTheme::default().apply(&cc.egui_ctx);
            Box::new(SlowCalcApp::new(cc, settings))
        }),
    )
}
