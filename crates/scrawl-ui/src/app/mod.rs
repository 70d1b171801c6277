//! Top-level application tying together the toolbar and the note field.

mod shortcuts;
mod toolbar;

use eframe::egui;

use scrawl_config::AppConfig;
use scrawl_core::{FieldPlacement, Note, TextStyle};

use crate::fonts::{self, StyleFamilies};

/// Where the note field first appears, relative to the canvas origin.
const INITIAL_FIELD_POS: (f32, f32) = (60.0, 80.0);

/// Arguments passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct StartupArgs {
    /// If set, the note starts pre-filled with this text.
    pub initial_text: Option<String>,
}

/// The main application state.
pub struct App {
    pub note: Note,
    pub style: TextStyle,
    pub placement: FieldPlacement,
    pub config: AppConfig,
    pub(crate) style_families: StyleFamilies,
    /// Field size from the previous frame, used to clamp dragging.
    pub(crate) field_size: egui::Vec2,
}

impl App {
    /// Creates a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, args: StartupArgs) -> Self {
        let config = AppConfig::load_or_create(&AppConfig::config_path());

        cc.egui_ctx.set_visuals(if config.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        let style_families = fonts::install(&cc.egui_ctx);

        let note = match &args.initial_text {
            Some(text) => Note::with_text(text),
            None => Note::default(),
        };

        Self {
            note,
            style: TextStyle::from_config(&config),
            placement: FieldPlacement::new(INITIAL_FIELD_POS.0, INITIAL_FIELD_POS.1),
            config,
            style_families,
            field_size: egui::Vec2::ZERO,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_global_shortcuts(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.show_toolbar(ui);
        });

        egui::CentralPanel::default().show(ctx, |_ui| {
            // The note field is a free-floating Area over the canvas.
        });

        self.show_note_field(ctx);
    }
}

/// Converts a config color into an egui color.
pub(crate) fn color32(c: scrawl_config::HexColor) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}
