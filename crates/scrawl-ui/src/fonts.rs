//! Registers bold/italic font variants for whole-field styling.
//!
//! egui ships only a regular proportional face, so the bold and italic
//! families are loaded from well-known system font locations at startup.
//! When a variant can't be found the style falls back to the regular face.

use std::sync::Arc;

use egui::{FontData, FontDefinitions, FontFamily};

const BOLD_FAMILY: &str = "scrawl-bold";
const ITALIC_FAMILY: &str = "scrawl-italic";
const BOLD_ITALIC_FAMILY: &str = "scrawl-bold-italic";

#[cfg(target_os = "linux")]
const BOLD_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
];
#[cfg(target_os = "linux")]
const ITALIC_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Oblique.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Oblique.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Italic.ttf",
];
#[cfg(target_os = "linux")]
const BOLD_ITALIC_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-BoldOblique.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-BoldOblique.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-BoldItalic.ttf",
];

#[cfg(target_os = "macos")]
const BOLD_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
];
#[cfg(target_os = "macos")]
const ITALIC_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial Italic.ttf",
    "/Library/Fonts/Arial Italic.ttf",
];
#[cfg(target_os = "macos")]
const BOLD_ITALIC_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial Bold Italic.ttf",
    "/Library/Fonts/Arial Bold Italic.ttf",
];

#[cfg(target_os = "windows")]
const BOLD_CANDIDATES: &[&str] = &["C:\\Windows\\Fonts\\arialbd.ttf"];
#[cfg(target_os = "windows")]
const ITALIC_CANDIDATES: &[&str] = &["C:\\Windows\\Fonts\\ariali.ttf"];
#[cfg(target_os = "windows")]
const BOLD_ITALIC_CANDIDATES: &[&str] = &["C:\\Windows\\Fonts\\arialbi.ttf"];

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const BOLD_CANDIDATES: &[&str] = &[];
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const ITALIC_CANDIDATES: &[&str] = &[];
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const BOLD_ITALIC_CANDIDATES: &[&str] = &[];

/// Which style variants were successfully registered.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct StyleFamilies {
    bold: bool,
    italic: bool,
    bold_italic: bool,
}

impl StyleFamilies {
    /// Picks the closest registered family for the requested style.
    pub(crate) fn family_for(&self, bold: bool, italic: bool) -> FontFamily {
        match (bold, italic) {
            (true, true) if self.bold_italic => FontFamily::Name(BOLD_ITALIC_FAMILY.into()),
            (true, true) | (true, false) if self.bold => FontFamily::Name(BOLD_FAMILY.into()),
            (true, true) | (false, true) if self.italic => FontFamily::Name(ITALIC_FAMILY.into()),
            _ => FontFamily::Proportional,
        }
    }
}

/// Loads styled font variants into the egui context.
pub(crate) fn install(ctx: &egui::Context) -> StyleFamilies {
    let mut fonts = FontDefinitions::default();
    let fallback = fonts
        .families
        .get(&FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();

    let mut families = StyleFamilies::default();
    for (name, candidates, registered) in [
        (BOLD_FAMILY, BOLD_CANDIDATES, &mut families.bold),
        (ITALIC_FAMILY, ITALIC_CANDIDATES, &mut families.italic),
        (
            BOLD_ITALIC_FAMILY,
            BOLD_ITALIC_CANDIDATES,
            &mut families.bold_italic,
        ),
    ] {
        match load_first(candidates) {
            Some(bytes) => {
                fonts
                    .font_data
                    .insert(name.to_owned(), Arc::new(FontData::from_owned(bytes)));
                let mut list = vec![name.to_owned()];
                list.extend(fallback.iter().cloned());
                fonts.families.insert(FontFamily::Name(name.into()), list);
                *registered = true;
            }
            None => {
                tracing::warn!("No system font found for {name}; falling back to regular face");
            }
        }
    }

    ctx.set_fonts(fonts);
    families
}

fn load_first(paths: &[&str]) -> Option<Vec<u8>> {
    paths.iter().find_map(|p| std::fs::read(p).ok())
}
