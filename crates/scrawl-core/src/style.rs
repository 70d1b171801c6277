//! Whole-field text styling: bold/italic toggles, color, font size.
//!
//! Stateless per-click commands with no history interaction; undo/redo
//! applies to text content only.

use scrawl_config::{AppConfig, HexColor};

/// Styling applied to the entire note field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub color: HexColor,
    font_size: f32,
    min_font_size: f32,
    max_font_size: f32,
    font_step: f32,
}

impl TextStyle {
    /// Builds the initial style from the app configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            bold: false,
            italic: false,
            color: config.default_color,
            font_size: config.font_size,
            min_font_size: config.min_font_size,
            max_font_size: config.max_font_size,
            font_step: config.font_step,
        }
    }

    pub fn toggle_bold(&mut self) {
        self.bold = !self.bold;
    }

    pub fn toggle_italic(&mut self) {
        self.italic = !self.italic;
    }

    pub fn set_color(&mut self, color: HexColor) {
        self.color = color;
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Steps the font size up, clamped to the configured maximum.
    pub fn increase_size(&mut self) {
        self.font_size = (self.font_size + self.font_step).min(self.max_font_size);
    }

    /// Steps the font size down, stopping at the configured floor.
    pub fn decrease_size(&mut self) {
        self.font_size = (self.font_size - self.font_step).max(self.min_font_size);
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}
