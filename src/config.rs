use crate::error::ConfigError;
use crate::heading::Heading;
use crate::layout;
use crate::obstacles::{ObstacleSet, DEFAULT_OBSTACLES};
use crate::planner::{DEFAULT_MAX_COMMAND_LENGTH, MAX_PLAN_LENGTH};
use crate::position::Position;
use crate::rover::Rover;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rover: RoverConfig,
    #[serde(default)]
    pub obstacles: ObstaclesConfig,
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct RoverConfig {
    #[serde(default)]
    pub start_x: i32,
    #[serde(default)]
    pub start_y: i32,
    #[serde(default = "default_start_heading")]
    pub start_heading: Heading,
    #[serde(default = "default_max_command_length")]
    pub max_command_length: usize,
}

#[derive(Debug, Deserialize)]
pub struct ObstaclesConfig {
    #[serde(default = "default_obstacle_cells")]
    pub cells: Vec<(i32, i32)>,
    /// Text layout to read obstacles from instead of `cells`
    #[serde(default)]
    pub layout_path: Option<String>,
    #[serde(default)]
    pub layout_origin_x: i32,
    #[serde(default)]
    pub layout_origin_y: i32,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
    #[serde(default = "default_show_neighbors")]
    pub show_neighbors: bool,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,
    #[serde(default = "default_logging_prefix")]
    pub prefix: String,
    #[serde(default = "default_logging_level")]
    pub level: String,
    #[serde(default = "default_enable_action_log")]
    pub enable_action_log: bool,
    #[serde(default = "default_action_log_path")]
    pub action_log_path: String,
}

// Default values
fn default_start_heading() -> Heading { Heading::North }
fn default_max_command_length() -> usize { DEFAULT_MAX_COMMAND_LENGTH }
fn default_obstacle_cells() -> Vec<(i32, i32)> { DEFAULT_OBSTACLES.to_vec() }
fn default_cell_size() -> f32 { 30.0 }
fn default_bg_r() -> u8 { 30 }
fn default_bg_g() -> u8 { 30 }
fn default_bg_b() -> u8 { 30 }
fn default_show_neighbors() -> bool { true }
fn default_logging_enabled() -> bool { true }
fn default_logging_prefix() -> String { "RoverService".to_string() }
fn default_logging_level() -> String { "info".to_string() }
fn default_enable_action_log() -> bool { false }
fn default_action_log_path() -> String { "action_log.json".to_string() }

impl Default for RoverConfig {
    fn default() -> Self {
        Self {
            start_x: 0,
            start_y: 0,
            start_heading: default_start_heading(),
            max_command_length: default_max_command_length(),
        }
    }
}

impl Default for ObstaclesConfig {
    fn default() -> Self {
        Self {
            cells: default_obstacle_cells(),
            layout_path: None,
            layout_origin_x: 0,
            layout_origin_y: 0,
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
            show_neighbors: default_show_neighbors(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            prefix: default_logging_prefix(),
            level: default_logging_level(),
            enable_action_log: default_enable_action_log(),
            action_log_path: default_action_log_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rover: RoverConfig::default(),
            obstacles: ObstaclesConfig::default(),
            visual: VisualConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load `config.toml` from the working directory; defaults if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        match Self::load_from(Path::new(CONFIG_PATH)) {
            Err(ConfigError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                Ok(Config::default())
            }
            other => other,
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Obstacle field, read from the layout file when one is configured
    pub fn obstacle_set(&self) -> Result<ObstacleSet, ConfigError> {
        let Some(path) = &self.obstacles.layout_path else {
            return Ok(ObstacleSet::new(self.obstacles.cells.iter().copied()));
        };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let origin = (self.obstacles.layout_origin_x, self.obstacles.layout_origin_y);
        let layout = layout::parse(&text, origin).map_err(|source| ConfigError::Layout {
            path: path.clone(),
            source,
        })?;

        Ok(layout.obstacles)
    }

    pub fn start_position(&self) -> Position {
        Position::new(self.rover.start_x, self.rover.start_y, self.rover.start_heading)
    }

    /// Rover on the configured field, created at the configured start
    pub fn build_rover(&self) -> Result<Rover, ConfigError> {
        if self.rover.max_command_length > MAX_PLAN_LENGTH {
            return Err(ConfigError::CommandLength {
                requested: self.rover.max_command_length,
                limit: MAX_PLAN_LENGTH,
            });
        }

        let mut rover = Rover::new(self.obstacle_set()?)
            .with_max_command_length(self.rover.max_command_length);
        rover.create(self.start_position());
        Ok(rover)
    }
}
