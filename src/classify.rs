use tracing::trace;

use crate::types::{EffectType, Intensity, IntensityTable, SceneConfig, WeatherCode};

pub const PARTICLE_COUNTS: IntensityTable<u32> = IntensityTable::new(800, 2000, 4500);

/// Fog is only ever classified as moderate today; the light and heavy
/// entries are kept so new fog codes can be mapped without touching callers.
pub const FOG_DENSITIES: IntensityTable<f64> = IntensityTable::new(0.015, 0.04, 0.08);

const SKY_COVER: [f64; 4] = [0.0, 0.2, 0.55, 0.95];
pub const FOG_CLOUD_COVER: f64 = 0.9;
pub const PRECIPITATION_CLOUD_COVER: f64 = 0.85;
pub const OTHER_CLOUD_COVER: f64 = 0.6;

fn tiered(code: WeatherCode, moderate_from: WeatherCode, heavy_from: WeatherCode) -> Intensity {
    if code >= heavy_from {
        Intensity::Heavy
    } else if code >= moderate_from {
        Intensity::Moderate
    } else {
        Intensity::Light
    }
}

/// Effect and intensity for a weather code. First matching range wins.
pub fn effect_and_intensity(code: WeatherCode) -> (EffectType, Intensity) {
    match code {
        95..=99 => (EffectType::Thunderstorm, tiered(code, 96, 99)),
        45 | 48 => (EffectType::Fog, Intensity::Moderate),
        71..=77 => (EffectType::Snow, tiered(code, 73, 75)),
        85 | 86 => (
            EffectType::Snow,
            if code == 86 { Intensity::Heavy } else { Intensity::Light },
        ),
        61..=65 => (EffectType::Rain, tiered(code, 63, 65)),
        // 57 (dense freezing drizzle) is already covered by the >= 55 tier.
        51..=57 => (EffectType::Rain, tiered(code, 53, 55)),
        66 | 67 => (
            EffectType::Rain,
            if code >= 67 { Intensity::Heavy } else { Intensity::Light },
        ),
        80..=82 => (EffectType::Rain, tiered(code, 81, 82)),
        _ => (EffectType::Clear, Intensity::Light),
    }
}

pub fn is_precipitation_code(code: WeatherCode) -> bool {
    matches!(code, 51..=67 | 71..=77 | 80..=82 | 85..=86 | 95..=99)
}

pub fn cloud_cover(code: WeatherCode) -> f64 {
    match code {
        0..=3 => SKY_COVER[code as usize],
        45 | 48 => FOG_CLOUD_COVER,
        c if is_precipitation_code(c) => PRECIPITATION_CLOUD_COVER,
        _ => OTHER_CLOUD_COVER,
    }
}

pub fn particle_count(effect: EffectType, intensity: Intensity) -> u32 {
    if effect.needs_particles() {
        PARTICLE_COUNTS.get(intensity)
    } else {
        0
    }
}

pub fn fog_density(effect: EffectType, intensity: Intensity) -> f64 {
    if effect == EffectType::Fog {
        FOG_DENSITIES.get(intensity)
    } else {
        0.0
    }
}

/// Maps a weather code to its scene configuration. Total over all integers;
/// unrecognised codes fall back to a clear sky.
pub fn classify(code: WeatherCode) -> SceneConfig {
    let (effect_type, intensity) = effect_and_intensity(code);
    let config = SceneConfig {
        effect_type,
        intensity,
        particle_count: particle_count(effect_type, intensity),
        fog_density: fog_density(effect_type, intensity),
        thunderstorm: effect_type == EffectType::Thunderstorm,
        cloud_cover: cloud_cover(code),
    };
    trace!(code, effect = %effect_type, intensity = %intensity, "classified weather code");
    config
}
