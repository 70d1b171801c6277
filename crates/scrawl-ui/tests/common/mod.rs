use egui_kittest::Harness;
use scrawl_ui::{App, StartupArgs};

/// Creates a standard test harness with the app at 900x640.
pub fn create_harness() -> Harness<'static, App> {
    harness_with_args(StartupArgs::default())
}

/// Creates a harness with custom startup arguments.
pub fn harness_with_args(args: StartupArgs) -> Harness<'static, App> {
    Harness::builder()
        .with_size(egui::Vec2::new(900.0, 640.0))
        .build_eframe(|cc| App::new(cc, args))
}
