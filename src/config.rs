//! Renderer tuning constants, optionally loaded from a TOML file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::types::{IntensityTable, TimeOfDayPhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyColors {
    pub night: u32,
    pub dawn: u32,
    pub day: u32,
    pub dusk: u32,
}

impl Default for SkyColors {
    fn default() -> Self {
        Self {
            night: 0x0a0a1a,
            dawn: 0xff7b4a,
            day: 0x87ceeb,
            dusk: 0xff6b35,
        }
    }
}

impl SkyColors {
    pub fn for_phase(&self, phase: TimeOfDayPhase) -> u32 {
        match phase {
            TimeOfDayPhase::Night => self.night,
            TimeOfDayPhase::Dawn => self.dawn,
            TimeOfDayPhase::Day => self.day,
            TimeOfDayPhase::Dusk => self.dusk,
        }
    }
}

/// Lightning flash timing for thunderstorm scenes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashTuning {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub duration_ms: u64,
    pub opacity: f64,
}

impl Default for FlashTuning {
    fn default() -> Self {
        Self {
            min_delay_ms: 3000,
            max_delay_ms: 8000,
            duration_ms: 120,
            opacity: 0.45,
        }
    }
}

impl FlashTuning {
    /// Random wait before the next flash, uniform in `[min_delay, max_delay)`.
    pub fn next_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.max_delay_ms <= self.min_delay_ms {
            return Duration::from_millis(self.min_delay_ms);
        }
        Duration::from_millis(rng.gen_range(self.min_delay_ms..self.max_delay_ms))
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneTuning {
    pub sky: SkyColors,
    /// World units per frame.
    pub rain_fall_speed: IntensityTable<f64>,
    pub snow_fall_speed: IntensityTable<f64>,
    /// Size of the preallocated particle buffers; drawn counts never exceed them.
    pub max_rain_particles: u32,
    pub max_snow_particles: u32,
    /// Drift per frame per unit of wind speed.
    pub wind_scale: f64,
    pub snow_wind_factor: f64,
    pub cloud_opacity_min: f64,
    pub cloud_opacity_range: f64,
    /// Clouds are hidden at or below this cover.
    pub cloud_visibility_threshold: f64,
    pub parallax_scale: f64,
    pub flash: FlashTuning,
}

impl Default for SceneTuning {
    fn default() -> Self {
        Self {
            sky: SkyColors::default(),
            rain_fall_speed: IntensityTable::new(0.25, 0.4, 0.6),
            snow_fall_speed: IntensityTable::new(0.03, 0.05, 0.08),
            max_rain_particles: 5000,
            max_snow_particles: 3000,
            wind_scale: 0.012,
            snow_wind_factor: 0.4,
            cloud_opacity_min: 0.12,
            cloud_opacity_range: 0.78,
            cloud_visibility_threshold: 0.02,
            parallax_scale: 2.0,
            flash: FlashTuning::default(),
        }
    }
}

impl SceneTuning {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads tuning from `path`, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load_from_path(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(tuning) => tuning,
            Err(err) => {
                warn!("{err} ({}). Using default scene tuning", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::error::Error;
    use crate::types::Intensity;

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let t = SceneTuning::from_toml_str(
            r#"
            wind_scale = 0.02

            [sky]
            night = 0x000000

            [flash]
            opacity = 0.6
            "#,
        )
        .unwrap();
        assert_eq!(t.wind_scale, 0.02);
        assert_eq!(t.sky.night, 0);
        assert_eq!(t.sky.day, 0x87ceeb);
        assert_eq!(t.flash.opacity, 0.6);
        assert_eq!(t.flash.min_delay_ms, 3000);
        assert_eq!(t.rain_fall_speed.get(Intensity::Heavy), 0.6);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(SceneTuning::from_toml_str("wind_scale = \"fast\"").is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SceneTuning::from_path(Path::new("/nonexistent/scene.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.toml");
        fs::write(&path, "wind_scale = [1, 2\n[sky\n").unwrap();
        assert!(matches!(SceneTuning::from_path(&path), Err(Error::Config(_))));
        assert_eq!(SceneTuning::load_from_path(&path), SceneTuning::default());
    }

    #[test]
    fn valid_file_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.toml");
        fs::write(&path, "max_snow_particles = 1200\n").unwrap();
        assert_eq!(SceneTuning::load_from_path(&path).max_snow_particles, 1200);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let t = SceneTuning::load_from_path(Path::new("/nonexistent/scene.toml"));
        assert_eq!(t, SceneTuning::default());
    }
}
