use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Open-Meteo / WMO weather interpretation code (0-99).
pub type WeatherCode = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectType {
    Clear,
    Rain,
    Snow,
    Fog,
    Thunderstorm,
}

impl EffectType {
    pub const ALL: [EffectType; 5] = [
        EffectType::Clear,
        EffectType::Rain,
        EffectType::Snow,
        EffectType::Fog,
        EffectType::Thunderstorm,
    ];

    /// Effects drawn with a particle system.
    pub fn needs_particles(self) -> bool {
        matches!(
            self,
            EffectType::Rain | EffectType::Snow | EffectType::Thunderstorm
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            EffectType::Clear => "clear",
            EffectType::Rain => "rain",
            EffectType::Snow => "snow",
            EffectType::Fog => "fog",
            EffectType::Thunderstorm => "thunderstorm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    Moderate,
    Heavy,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Light, Intensity::Moderate, Intensity::Heavy];

    fn index(self) -> usize {
        match self {
            Intensity::Light => 0,
            Intensity::Moderate => 1,
            Intensity::Heavy => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Intensity::Light => "light",
            Intensity::Moderate => "moderate",
            Intensity::Heavy => "heavy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDayPhase {
    Night,
    Dawn,
    Day,
    Dusk,
}

impl TimeOfDayPhase {
    pub const ALL: [TimeOfDayPhase; 4] = [
        TimeOfDayPhase::Night,
        TimeOfDayPhase::Dawn,
        TimeOfDayPhase::Day,
        TimeOfDayPhase::Dusk,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TimeOfDayPhase::Night => "night",
            TimeOfDayPhase::Dawn => "dawn",
            TimeOfDayPhase::Day => "day",
            TimeOfDayPhase::Dusk => "dusk",
        }
    }
}

macro_rules! lowercase_enum_text {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.name().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| Error::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

lowercase_enum_text!(EffectType, "effect type");
lowercase_enum_text!(Intensity, "intensity");
lowercase_enum_text!(TimeOfDayPhase, "time of day");

/// Value table keyed by [`Intensity`]; every tier must be filled in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityTable<T> {
    pub light: T,
    pub moderate: T,
    pub heavy: T,
}

impl<T: Copy> IntensityTable<T> {
    pub const fn new(light: T, moderate: T, heavy: T) -> Self {
        Self {
            light,
            moderate,
            heavy,
        }
    }

    pub fn get(&self, intensity: Intensity) -> T {
        [self.light, self.moderate, self.heavy][intensity.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    #[serde(rename = "type")]
    pub effect_type: EffectType,
    pub intensity: Intensity,
    pub particle_count: u32,
    pub fog_density: f64,
    pub thunderstorm: bool,
    /// 0 = clear sky, 1 = overcast.
    pub cloud_cover: f64,
}

/// The subset of a provider response the scene core consumes.
/// Timestamps are Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    #[serde(alias = "weatherCode")]
    pub weather_code: WeatherCode,
    pub dt: i64,
    pub sunrise: i64,
    pub sunset: i64,
    #[serde(default, alias = "windSpeed", alias = "speed")]
    pub wind_speed: Option<f64>,
    #[serde(default, alias = "windDirection", alias = "deg")]
    pub wind_direction: Option<f64>,
}

impl WeatherData {
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSceneConfig {
    #[serde(rename = "type")]
    pub effect_type: EffectType,
    pub intensity: Intensity,
    pub particle_count: u32,
    pub fog_density: f64,
    pub thunderstorm: bool,
    pub cloud_cover: f64,
    pub wind_speed: f64,
    /// Degrees, meteorological convention.
    pub wind_direction: f64,
    pub time_of_day_phase: TimeOfDayPhase,
    pub parallax_amount: f64,
}

impl ResolvedSceneConfig {
    /// Field-wise equality comparing floats by bit pattern, so a NaN
    /// override still matches itself.
    pub fn same_as(&self, other: &Self) -> bool {
        let floats = |c: &Self| {
            [
                c.fog_density,
                c.cloud_cover,
                c.wind_speed,
                c.wind_direction,
                c.parallax_amount,
            ]
            .map(f64::to_bits)
        };
        self.effect_type == other.effect_type
            && self.intensity == other.intensity
            && self.particle_count == other.particle_count
            && self.thunderstorm == other.thunderstorm
            && self.time_of_day_phase == other.time_of_day_phase
            && floats(self) == floats(other)
    }

    pub fn scene(&self) -> SceneConfig {
        SceneConfig {
            effect_type: self.effect_type,
            intensity: self.intensity,
            particle_count: self.particle_count,
            fog_density: self.fog_density,
            thunderstorm: self.thunderstorm,
            cloud_cover: self.cloud_cover,
        }
    }
}
