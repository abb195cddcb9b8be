use chrono::{TimeZone, Utc};
use tracing_subscriber::EnvFilter;

use weather_scene::{
    resolve, sun_progress, DebugOverrides, EffectType, Override, ResolvedSceneConfig,
    SceneDriver, SceneParams, SceneRenderer, SceneTuning, WeatherData,
};

struct PrintRenderer {
    tuning: SceneTuning,
}

impl SceneRenderer for PrintRenderer {
    fn apply_config(&mut self, config: &ResolvedSceneConfig) {
        let p = SceneParams::from_config(config, &self.tuning);
        println!("--- Scene ---");
        println!("Effect: {} ({})", config.effect_type, config.intensity);
        println!("Phase: {}  sky #{:06x}", config.time_of_day_phase, p.sky_color);
        println!("Cloud cover: {:.2}  opacity {:.2}", config.cloud_cover, p.cloud_opacity);
        println!("Rain: {} particles, Snow: {} particles", p.rain_count, p.snow_count);
        match p.fog {
            Some(fog) => println!("Fog density: {:.3}", fog.density),
            None => println!("Fog: none"),
        }
        println!("Wind drift: ({:.3}, {:.3})", p.rain_drift.x, p.rain_drift.z);
        println!("Lightning: {}", if p.flashes { "on" } else { "off" });
        println!();
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sunrise = Utc.with_ymd_and_hms(2026, 3, 21, 12, 4, 0).unwrap().timestamp();
    let sunset = Utc.with_ymd_and_hms(2026, 3, 22, 0, 12, 0).unwrap().timestamp();
    let now = Utc.with_ymd_and_hms(2026, 3, 21, 23, 50, 0).unwrap().timestamp();

    let weather = WeatherData {
        weather_code: 81,
        dt: now,
        sunrise,
        sunset,
        wind_speed: Some(7.2),
        wind_direction: Some(225.0),
    };

    println!("=== Weather Scene Example ===");
    println!("Weather code: {}", weather.weather_code);
    println!("Sun progress: {:.2}", sun_progress(now, sunrise, sunset));
    println!();

    let mut driver = SceneDriver::new(PrintRenderer {
        tuning: SceneTuning::default(),
    });
    driver.update(Some(&weather), None);

    let mut overrides = DebugOverrides {
        effect_type: Override::Explicit(EffectType::Snow),
        ..DebugOverrides::default()
    };
    driver.update(Some(&weather), Some(&overrides));

    overrides.reset();
    let unchanged = driver.update(Some(&weather), Some(&overrides));
    println!("Reset to auto re-applied base scene: {}", unchanged);

    let fallback = resolve(None, None);
    println!("Before first fetch: {} / {}", fallback.effect_type, fallback.time_of_day_phase);
}
