pub mod classify;
pub mod config;
pub mod error;
pub mod overrides;
pub mod phase;
pub mod render;
pub mod resolve;
pub mod types;

pub use classify::{
    classify, cloud_cover, effect_and_intensity, fog_density, is_precipitation_code,
    particle_count, FOG_DENSITIES, PARTICLE_COUNTS,
};

pub use config::{FlashTuning, SceneTuning, SkyColors};

pub use error::{Error, Result};

pub use overrides::{parse_toggle, DebugOverrides, Override};

pub use phase::{day_phase, day_phase_at, sun_progress, TRANSITION_WINDOW_SECS};

pub use render::{Fog, SceneDriver, SceneParams, SceneRenderer, WindDrift};

pub use resolve::{
    apply_overrides, base_config, resolve, DEFAULT_CONFIG, DEFAULT_PARALLAX,
    FALLBACK_PARTICLE_COUNT,
};

pub use types::{
    EffectType, Intensity, IntensityTable, ResolvedSceneConfig, SceneConfig, TimeOfDayPhase,
    WeatherCode, WeatherData,
};
