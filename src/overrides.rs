//! Sparse manual overrides layered on top of weather-derived scene values.
//!
//! Every field is either [`Override::Auto`], deferring to the computed value,
//! or [`Override::Explicit`]. On the wire `Auto` is written as the string
//! `"auto"`; a missing field or `null` reads as `Auto` as well.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::types::{EffectType, Intensity, TimeOfDayPhase};

const AUTO: &str = "auto";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Override<T> {
    Auto,
    Explicit(T),
}

impl<T> Default for Override<T> {
    fn default() -> Self {
        Override::Auto
    }
}

impl<T> Override<T> {
    pub fn is_explicit(&self) -> bool {
        matches!(self, Override::Explicit(_))
    }

    pub fn explicit(self) -> Option<T> {
        match self {
            Override::Auto => None,
            Override::Explicit(v) => Some(v),
        }
    }

    /// The explicit value, or `base` when left on auto.
    pub fn resolve(self, base: T) -> T {
        self.explicit().unwrap_or(base)
    }
}

impl<T> From<Option<T>> for Override<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Override::Auto, Override::Explicit)
    }
}

impl<T: FromStr> Override<T> {
    /// Parses debug-menu text input. Blank and `auto` mean [`Override::Auto`].
    pub fn parse_input(field: &'static str, input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(AUTO) {
            return Ok(Override::Auto);
        }
        trimmed
            .parse()
            .map(Override::Explicit)
            .map_err(|_| Error::InvalidOverride {
                field,
                value: input.to_string(),
            })
    }
}

/// Parses an on/off selector; accepts `on`/`off`, `true`/`false` and `auto`.
pub fn parse_toggle(field: &'static str, input: &str) -> Result<Override<bool>> {
    match input.trim().to_ascii_lowercase().as_str() {
        "" | AUTO => Ok(Override::Auto),
        "on" | "true" => Ok(Override::Explicit(true)),
        "off" | "false" => Ok(Override::Explicit(false)),
        _ => Err(Error::InvalidOverride {
            field,
            value: input.to_string(),
        }),
    }
}

#[derive(Deserialize)]
enum AutoMarker {
    #[serde(rename = "auto")]
    Auto,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOverride<T> {
    Auto(#[allow(dead_code)] Option<AutoMarker>),
    Explicit(T),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Override<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match RawOverride::deserialize(deserializer)? {
            RawOverride::Auto(_) => Override::Auto,
            RawOverride::Explicit(v) => Override::Explicit(v),
        })
    }
}

impl<T: Serialize> Serialize for Override<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Override::Auto => serializer.serialize_str(AUTO),
            Override::Explicit(v) => v.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DebugOverrides {
    pub effect_type: Override<EffectType>,
    pub intensity: Override<Intensity>,
    pub particle_count: Override<u32>,
    pub fog_density: Override<f64>,
    pub time_of_day: Override<TimeOfDayPhase>,
    pub wind_speed: Override<f64>,
    pub wind_direction: Override<f64>,
    pub parallax_amount: Override<f64>,
    pub thunderstorm: Override<bool>,
}

impl DebugOverrides {
    pub const FIELDS: [&'static str; 9] = [
        "effectType",
        "intensity",
        "particleCount",
        "fogDensity",
        "timeOfDay",
        "windSpeed",
        "windDirection",
        "parallaxAmount",
        "thunderstorm",
    ];

    /// True when any field holds an explicit value.
    pub fn has_active(&self) -> bool {
        self.effect_type.is_explicit()
            || self.intensity.is_explicit()
            || self.particle_count.is_explicit()
            || self.fog_density.is_explicit()
            || self.time_of_day.is_explicit()
            || self.wind_speed.is_explicit()
            || self.wind_direction.is_explicit()
            || self.parallax_amount.is_explicit()
            || self.thunderstorm.is_explicit()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Sets one field from debug-menu text input, addressed by its wire name.
    /// The record is left untouched when the input does not parse.
    pub fn set_from_input(&mut self, field: &str, input: &str) -> Result<()> {
        match field {
            "effectType" => self.effect_type = Override::parse_input("effectType", input)?,
            "intensity" => self.intensity = Override::parse_input("intensity", input)?,
            "particleCount" => {
                self.particle_count = Override::parse_input("particleCount", input)?
            }
            "fogDensity" => self.fog_density = Override::parse_input("fogDensity", input)?,
            "timeOfDay" => self.time_of_day = Override::parse_input("timeOfDay", input)?,
            "windSpeed" => self.wind_speed = Override::parse_input("windSpeed", input)?,
            "windDirection" => {
                self.wind_direction = Override::parse_input("windDirection", input)?
            }
            "parallaxAmount" => {
                self.parallax_amount = Override::parse_input("parallaxAmount", input)?
            }
            "thunderstorm" => self.thunderstorm = parse_toggle("thunderstorm", input)?,
            _ => {
                return Err(Error::UnknownVariant {
                    kind: "override field",
                    value: field.to_string(),
                })
            }
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
