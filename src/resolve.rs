use crate::classify::classify;
use crate::overrides::DebugOverrides;
use crate::phase::day_phase;
use crate::types::{EffectType, Intensity, ResolvedSceneConfig, TimeOfDayPhase, WeatherData};

pub const DEFAULT_PARALLAX: f64 = 0.15;

/// Used when an effect is forced on top of weather that has no particles.
pub const FALLBACK_PARTICLE_COUNT: u32 = 1500;

/// Scene shown before the first weather delivery.
pub const DEFAULT_CONFIG: ResolvedSceneConfig = ResolvedSceneConfig {
    effect_type: EffectType::Clear,
    intensity: Intensity::Light,
    particle_count: 0,
    fog_density: 0.0,
    thunderstorm: false,
    cloud_cover: 0.4,
    wind_speed: 0.0,
    wind_direction: 0.0,
    time_of_day_phase: TimeOfDayPhase::Day,
    parallax_amount: DEFAULT_PARALLAX,
};

/// Weather-derived configuration with no overrides applied.
pub fn base_config(weather: Option<&WeatherData>) -> ResolvedSceneConfig {
    let Some(w) = weather else {
        return DEFAULT_CONFIG;
    };
    let scene = classify(w.weather_code);
    ResolvedSceneConfig {
        effect_type: scene.effect_type,
        intensity: scene.intensity,
        particle_count: scene.particle_count,
        fog_density: scene.fog_density,
        thunderstorm: scene.thunderstorm,
        cloud_cover: scene.cloud_cover,
        wind_speed: w.wind_speed.unwrap_or(0.0),
        wind_direction: w.wind_direction.unwrap_or(0.0),
        time_of_day_phase: day_phase(w.dt, w.sunrise, w.sunset),
        parallax_amount: DEFAULT_PARALLAX,
    }
}

/// Layers `overrides` over `base`. Cloud cover always comes from `base`.
pub fn apply_overrides(base: &ResolvedSceneConfig, o: &DebugOverrides) -> ResolvedSceneConfig {
    let effect_type = o.effect_type.resolve(base.effect_type);
    let particle_count = o.particle_count.explicit().unwrap_or(
        if effect_type.needs_particles() && base.particle_count == 0 {
            FALLBACK_PARTICLE_COUNT
        } else {
            base.particle_count
        },
    );
    ResolvedSceneConfig {
        effect_type,
        intensity: o.intensity.resolve(base.intensity),
        particle_count,
        fog_density: o.fog_density.resolve(base.fog_density),
        thunderstorm: o.thunderstorm.resolve(base.thunderstorm),
        cloud_cover: base.cloud_cover,
        wind_speed: o.wind_speed.resolve(base.wind_speed),
        wind_direction: o.wind_direction.resolve(base.wind_direction),
        time_of_day_phase: o.time_of_day.resolve(base.time_of_day_phase),
        parallax_amount: o.parallax_amount.resolve(base.parallax_amount),
    }
}

/// Final scene configuration for the latest weather (if any) and the
/// debug overrides (if any). Pure and total; override values are not
/// range-checked.
pub fn resolve(
    weather: Option<&WeatherData>,
    overrides: Option<&DebugOverrides>,
) -> ResolvedSceneConfig {
    let base = base_config(weather);
    match overrides {
        None => base,
        Some(o) => apply_overrides(&base, o),
    }
}
