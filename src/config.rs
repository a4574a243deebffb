use config::{Config, ConfigError, Environment, File, FileFormat};
use playfield_geometry::{AxisAlignedBox, Circle, GridCoordinate};
use serde::Deserialize;
use tracing::{error, info};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Scenario settings. Every section falls back to its defaults when absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid: GridSettings,
    pub path: PathSettings,
    pub fill: FillSettings,
    pub stack: StackSettings,
    pub collision: CollisionSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub width: usize,
    pub height: usize,
    /// Probability that a generated cell is an obstacle.
    pub obstacle_density: f64,
    pub seed: u64,
    /// Literal layout in `grid::parse` format; replaces the generated grid when set.
    pub layout: Option<String>,
}

impl Default for GridSettings {
    fn default() -> Self {
        GridSettings {
            width: 12,
            height: 8,
            obstacle_density: 0.25,
            seed: 7,
            layout: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    pub start: [i32; 2],
    pub goal: [i32; 2],
}

impl PathSettings {
    pub fn start(&self) -> GridCoordinate {
        GridCoordinate::new(self.start[0], self.start[1])
    }

    pub fn goal(&self) -> GridCoordinate {
        GridCoordinate::new(self.goal[0], self.goal[1])
    }
}

impl Default for PathSettings {
    fn default() -> Self {
        PathSettings {
            start: [0, 0],
            goal: [11, 7],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FillSettings {
    pub start: [i32; 2],
    pub value: i32,
}

impl Default for FillSettings {
    fn default() -> Self {
        FillSettings {
            start: [0, 0],
            value: 2,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StackSettings {
    /// Rows marked fully occupied before clearing, as if a piece had just locked.
    pub complete_rows: Vec<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CollisionSettings {
    pub boxes: Vec<AxisAlignedBox>,
    pub circles: Vec<Circle>,
}

/// Loads settings from `path` (optional) with `PLAYFIELD_*` environment overrides,
/// e.g. `PLAYFIELD_GRID__SEED=3`.
pub fn load_config(path: &str) -> Result<Settings, ConfigError> {
    info!("Attempting to load configuration from {}", path);

    let settings = Config::builder()
        .add_source(File::new(path, FileFormat::Toml).required(false))
        .add_source(
            Environment::with_prefix("PLAYFIELD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .and_then(|config| config.try_deserialize::<Settings>());

    match settings {
        Ok(settings) => {
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = load_config("config/does-not-exist.toml").unwrap();
        assert_eq!(settings.grid.width, 12);
        assert_eq!(settings.path.goal(), GridCoordinate::new(11, 7));
        assert!(settings.collision.boxes.is_empty());
    }

    #[test]
    fn test_parse_toml_sections() {
        let toml = r#"
            [grid]
            width = 4
            height = 3
            layout = """
            . . # .
            . . # .
            . . . .
            """

            [path]
            start = [0, 0]
            goal = [3, 0]

            [[collision.boxes]]
            min = { x = 0.0, y = 0.0 }
            max = { x = 1.0, y = 1.0 }

            [[collision.circles]]
            center = { x = 2.0, y = 0.5 }
            radius = 1.0
        "#;
        let settings: Settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.grid.width, 4);
        assert!(settings.grid.layout.is_some());
        // Unset keys keep their defaults.
        assert_eq!(settings.grid.seed, 7);
        assert_eq!(settings.fill.value, 2);
        assert_eq!(settings.path.goal(), GridCoordinate::new(3, 0));
        assert_eq!(settings.collision.boxes.len(), 1);
        assert_eq!(settings.collision.circles[0].radius, 1.0);
    }
}
