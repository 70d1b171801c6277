#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Result;
use clap::Parser;

use scrawl_config::AppConfig;

/// A single-screen draggable note editor built with Rust and egui.
#[derive(Parser, Debug)]
#[command(name = "scrawl", version, about)]
struct Cli {
    /// Pre-fill the note with the given text.
    #[arg(long = "text")]
    text: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting scrawl");

    let config = AppConfig::load_or_create(&AppConfig::config_path());
    let startup_args = scrawl_ui::StartupArgs {
        initial_text: cli.text,
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "scrawl",
        native_options,
        Box::new(move |cc| Ok(Box::new(scrawl_ui::App::new(cc, startup_args)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
