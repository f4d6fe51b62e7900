use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use egui::Vec2;
use log::info;

use launchboard::dataset::LaunchDataset;
use launchboard::errors::LaunchboardError;
use launchboard::ui::{AppConfig, DashboardApp};

const DEFAULT_DATA_FILE: &str = "spacex_launch_dash.csv";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the launch records CSV file
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,
}

fn run(data: &PathBuf) -> Result<(), LaunchboardError> {
    if !data.exists() {
        return Err(LaunchboardError::InvalidDatasetFile {
            path: format!("{:?}", data),
        });
    }
    let dataset = Arc::new(LaunchDataset::from_csv(data)?);
    info!(
        "Dataset payload bounds: {:?} kg",
        dataset.payload_bounds()
    );

    let app_config = AppConfig::from_local_file().unwrap_or_default();
    let window_position = app_config.window_position.clone();

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_inner_size(Vec2::new(900., 780.))
        .with_position(window_position);

    eframe::run_native(
        "Launchboard",
        native_options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(dataset, app_config, cc)))),
    )
    .expect("could not start app");
    Ok(())
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let args = Args::parse();
    ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    })
    .expect("Could not set Ctrl-C handler");

    run(&args.data).expect("Error while running the launch records dashboard");
}
