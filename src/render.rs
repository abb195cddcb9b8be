//! The narrow interface between the scene core and a renderer.
//!
//! A renderer only ever sees [`ResolvedSceneConfig`] snapshots. [`SceneParams`]
//! collects the per-config values every renderer derives the same way.

use tracing::debug;

use crate::config::SceneTuning;
use crate::overrides::DebugOverrides;
use crate::resolve::resolve;
use crate::types::{EffectType, ResolvedSceneConfig, WeatherData};

pub trait SceneRenderer {
    fn apply_config(&mut self, config: &ResolvedSceneConfig);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub color: u32,
    pub density: f64,
}

/// Horizontal particle drift per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindDrift {
    pub x: f64,
    pub z: f64,
}

impl WindDrift {
    /// `direction_deg` is where the wind comes from, 0 = north, clockwise.
    pub fn from_wind(speed: f64, direction_deg: f64, scale: f64) -> Self {
        let rad = direction_deg.to_radians();
        Self {
            x: rad.sin() * speed * scale,
            z: -rad.cos() * speed * scale,
        }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            z: self.z * factor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    pub sky_color: u32,
    pub fog: Option<Fog>,
    pub clouds_visible: bool,
    pub cloud_opacity: f64,
    pub rain_visible: bool,
    pub rain_count: u32,
    pub rain_fall_speed: f64,
    pub rain_drift: WindDrift,
    pub snow_visible: bool,
    pub snow_count: u32,
    pub snow_fall_speed: f64,
    pub snow_drift: WindDrift,
    /// Multiplied by the pointer offset (-0.5..0.5) to place the camera.
    pub parallax_offset_scale: f64,
    pub flashes: bool,
}

impl SceneParams {
    pub fn from_config(config: &ResolvedSceneConfig, tuning: &SceneTuning) -> Self {
        let sky_color = tuning.sky.for_phase(config.time_of_day_phase);
        let fog = (config.fog_density > 0.0).then_some(Fog {
            color: sky_color,
            density: config.fog_density,
        });
        let rain_visible = matches!(
            config.effect_type,
            EffectType::Rain | EffectType::Thunderstorm
        );
        let snow_visible = config.effect_type == EffectType::Snow;
        let drift = WindDrift::from_wind(config.wind_speed, config.wind_direction, tuning.wind_scale);

        Self {
            sky_color,
            fog,
            clouds_visible: config.cloud_cover > tuning.cloud_visibility_threshold,
            cloud_opacity: tuning.cloud_opacity_min + config.cloud_cover * tuning.cloud_opacity_range,
            rain_visible,
            rain_count: if rain_visible {
                config.particle_count.min(tuning.max_rain_particles)
            } else {
                0
            },
            rain_fall_speed: tuning.rain_fall_speed.get(config.intensity),
            rain_drift: drift,
            snow_visible,
            snow_count: if snow_visible {
                config.particle_count.min(tuning.max_snow_particles)
            } else {
                0
            },
            snow_fall_speed: tuning.snow_fall_speed.get(config.intensity),
            snow_drift: drift.scaled(tuning.snow_wind_factor),
            parallax_offset_scale: config.parallax_amount * tuning.parallax_scale,
            flashes: config.thunderstorm,
        }
    }
}

/// Resolves configs and forwards them to a renderer, skipping updates that
/// would not change anything.
#[derive(Debug)]
pub struct SceneDriver<R> {
    renderer: R,
    current: Option<ResolvedSceneConfig>,
}

impl<R: SceneRenderer> SceneDriver<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            current: None,
        }
    }

    /// Returns whether the renderer received a new config.
    pub fn update(
        &mut self,
        weather: Option<&WeatherData>,
        overrides: Option<&DebugOverrides>,
    ) -> bool {
        self.apply(resolve(weather, overrides))
    }

    pub fn apply(&mut self, config: ResolvedSceneConfig) -> bool {
        if self.current.is_some_and(|current| current.same_as(&config)) {
            return false;
        }
        debug!(
            effect = %config.effect_type,
            intensity = %config.intensity,
            particles = config.particle_count,
            phase = %config.time_of_day_phase,
            thunderstorm = config.thunderstorm,
            "applying scene config"
        );
        self.renderer.apply_config(&config);
        self.current = Some(config);
        true
    }

    pub fn current(&self) -> Option<&ResolvedSceneConfig> {
        self.current.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
