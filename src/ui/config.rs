use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::LaunchboardError;
use crate::charts::ALL_SITES_VALUE;

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WindowPosition {
    pub x: f32,
    pub y: f32,
}

impl Default for WindowPosition {
    fn default() -> Self {
        Self { x: 0., y: 0. }
    }
}

impl From<WindowPosition> for Pos2 {
    fn from(value: WindowPosition) -> Self {
        Pos2::new(value.x, value.y)
    }
}

impl From<Pos2> for WindowPosition {
    fn from(value: Pos2) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct AppConfig {
    pub window_position: WindowPosition,
    /// Last site dropdown value (`"ALL"` or a site name), restored on the
    /// next start.
    pub selected_site: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_position: WindowPosition::default(),
            selected_site: ALL_SITES_VALUE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_local_file() -> Option<Self> {
        let config_path = dirs::config_dir()?.join("launchboard").join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let file = std::fs::File::open(config_path).expect("Could not open config file");
            Some(serde_json::from_reader(file).expect("Could not parse config file"))
        } else {
            None
        }
    }

    pub fn save(&self) -> Result<(), LaunchboardError> {
        let config_path = dirs::config_dir()
            .ok_or(LaunchboardError::NoConfigDir)?
            .join("launchboard")
            .join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            std::fs::create_dir_all(config_path.parent().unwrap())
                .map_err(|e| LaunchboardError::ConfigIOError { source: e })?;
        }

        let file = std::fs::File::create(config_path)
            .map_err(|e| LaunchboardError::ConfigIOError { source: e })?;
        serde_json::to_writer(file, self)
            .map_err(|e| LaunchboardError::ConfigSerializeError { source: e })
    }
}
