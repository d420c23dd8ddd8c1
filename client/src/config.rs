use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use snake_engine::Shape;
use snake_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use snake_engine::logger::LogLevel;

const CONFIG_FILE_NAME: &str = "snake_config.yaml";

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(default_config_path))
}

/// Who issues the move commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ControllerKind {
    Keyboard,
    Random,
    LineOfSight,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub board: Shape,
    #[serde(default)]
    pub seed: Option<u64>,
    pub tick_interval_ms: u64,
    pub tile_size: f32,
    pub controller: ControllerKind,
    pub log_level: LogLevel,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.board.validate()?;
        if !(20..=5000).contains(&self.tick_interval_ms) {
            return Err("Tick interval must be between 20ms and 5000ms".to_string());
        }
        if !(8.0..=96.0).contains(&self.tile_size) {
            return Err("Tile size must be between 8 and 96".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: Shape::new(10, 10),
            seed: None,
            tick_interval_ms: 150,
            tile_size: 32.0,
            controller: ControllerKind::Keyboard,
            log_level: LogLevel::Info,
        }
    }
}
