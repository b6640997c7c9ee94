//! App configuration
//!
//! A small RON file with every tunable the app exposes. Missing fields take
//! their defaults, so an empty `()` is a valid config.
//!
//! ```ron
//! (
//!   language: zh,
//!   utc_offset_minutes: 480,
//!   jar: (gravity: -9.8, star_mass: 0.1),
//! )
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locale::Language;

/// Where the native build looks for an override file
pub const CONFIG_PATH: &str = "assets/config/star_jar.ron";

/// Bundled copy, so wasm builds get the same defaults without a fetch
const BUNDLED_CONFIG: &str = include_str!("../assets/config/star_jar.ron");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid value: {0}")]
    Invalid(String),
}

/// Rigid-body tunables for the jar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JarConfig {
    /// Vertical acceleration (negative is down)
    pub gravity: f32,
    /// Full extents of a star's box collider
    pub star_size: [f32; 3],
    pub star_mass: f32,
    pub friction: f32,
    pub restitution: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
    /// New stars appear in `[-half, half)` on x and z
    pub spawn_half_width: f32,
    /// New stars appear in `[min, max)` on y
    pub spawn_height: (f32, f32),
    /// Initial angular velocity is drawn from `[-spin, spin)` per axis
    pub spawn_spin: f32,
}

impl Default for JarConfig {
    fn default() -> Self {
        Self {
            gravity: -9.8,
            star_size: [0.4, 0.4, 0.25],
            star_mass: 0.1,
            friction: 0.5,
            restitution: 0.2,
            linear_damping: 0.5,
            angular_damping: 0.5,
            spawn_half_width: 1.0,
            spawn_height: (2.0, 3.0),
            spawn_spin: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Storage slot holding the star list
    pub storage_key: String,
    pub language: Language,
    /// Shown next to today's count; informational only
    pub daily_limit: usize,
    /// Offset from UTC used to decide what "today" means
    pub utc_offset_minutes: i32,
    /// Fixed seed for reproducible runs; `None` seeds from the clock
    pub rng_seed: Option<u64>,
    pub jar: JarConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "lucky-stars".to_string(),
            language: Language::default(),
            daily_limit: 8,
            utc_offset_minutes: 0,
            rng_seed: None,
            jar: JarConfig::default(),
        }
    }
}

fn is_valid_float(f: f32) -> bool {
    f.is_finite()
}

impl AppConfig {
    pub fn from_ron(s: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }

    /// The config the app starts with.
    ///
    /// Native builds prefer the on-disk file; everything else (and any error)
    /// falls back to the bundled copy, then to built-in defaults.
    pub fn load_or_default() -> Self {
        use macroquad::logging::warn;

        #[cfg(not(target_arch = "wasm32"))]
        if Path::new(CONFIG_PATH).exists() {
            match Self::load(CONFIG_PATH) {
                Ok(config) => return config,
                Err(e) => warn!("Config: ignoring {}: {}", CONFIG_PATH, e),
            }
        }

        Self::from_ron(BUNDLED_CONFIG).unwrap_or_else(|e| {
            warn!("Config: bundled config unreadable ({}), using defaults", e);
            Self::default()
        })
    }

    /// Reject values that would break the physics or the UI
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key is empty".into()));
        }
        if self.utc_offset_minutes.abs() > 18 * 60 {
            return Err(ConfigError::Invalid(format!(
                "utc_offset_minutes out of range ({})", self.utc_offset_minutes
            )));
        }

        let jar = &self.jar;
        let floats = [
            jar.gravity,
            jar.star_mass,
            jar.friction,
            jar.restitution,
            jar.linear_damping,
            jar.angular_damping,
            jar.spawn_half_width,
            jar.spawn_height.0,
            jar.spawn_height.1,
            jar.spawn_spin,
        ];
        if !floats.iter().chain(jar.star_size.iter()).all(|&f| is_valid_float(f)) {
            return Err(ConfigError::Invalid("jar contains NaN or infinite values".into()));
        }
        if jar.star_size.iter().any(|&s| s <= 0.0) || jar.star_mass <= 0.0 {
            return Err(ConfigError::Invalid("star size and mass must be positive".into()));
        }
        if jar.spawn_height.0 > jar.spawn_height.1 {
            return Err(ConfigError::Invalid(format!(
                "spawn_height min {} above max {}", jar.spawn_height.0, jar.spawn_height.1
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(AppConfig::from_ron("()").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_bundled_config_parses() {
        let config = AppConfig::from_ron(BUNDLED_CONFIG).unwrap();
        assert_eq!(config.storage_key, "lucky-stars");
        assert_eq!(config.daily_limit, 8);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_ron("(language: zh, jar: (gravity: -4.0))").unwrap();
        assert_eq!(config.language, Language::Zh);
        assert_eq!(config.jar.gravity, -4.0);
        assert_eq!(config.jar.star_mass, 0.1);
    }

    #[test]
    fn test_round_trip_through_ron() {
        let mut config = AppConfig::default();
        config.rng_seed = Some(7);
        config.utc_offset_minutes = -300;
        let pretty = ron::ser::PrettyConfig::new().depth_limit(3).indentor("  ".to_string());
        let text = ron::ser::to_string_pretty(&config, pretty).unwrap();
        assert_eq!(AppConfig::from_ron(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            AppConfig::from_ron("(jar: (star_mass: 0.0))"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_ron("(jar: (spawn_height: (3.0, 2.0)))"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_ron("(utc_offset_minutes: 5000)"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(AppConfig::from_ron("(daily_limit: \"x\")"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("star_jar.ron");
        std::fs::write(&path, "(daily_limit: 3)").unwrap();
        assert_eq!(AppConfig::load(&path).unwrap().daily_limit, 3);

        assert!(matches!(
            AppConfig::load(dir.path().join("missing.ron")),
            Err(ConfigError::Io(_))
        ));
    }
}
