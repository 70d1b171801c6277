pub mod color;
pub mod config;
pub mod palette;

pub use color::HexColor;
pub use config::AppConfig;
pub use palette::{toolbar_palette, Swatch};
