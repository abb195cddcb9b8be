use proptest::prelude::*;

use weather_scene::classify::*;
use weather_scene::types::*;

fn assert_scene_invariants(code: i32, c: &SceneConfig) {
    assert_eq!(
        c.particle_count > 0,
        c.effect_type.needs_particles(),
        "code {}: particles {:?}",
        code,
        c
    );
    assert_eq!(c.fog_density > 0.0, c.effect_type == EffectType::Fog, "code {}: {:?}", code, c);
    assert_eq!(
        c.thunderstorm,
        c.effect_type == EffectType::Thunderstorm,
        "code {}: {:?}",
        code,
        c
    );
    assert!((0.0..=1.0).contains(&c.cloud_cover), "code {}: {:?}", code, c);
}

// ── Invariants ──

#[test]
fn test_invariants_hold_for_all_codes() {
    for code in 0..=99 {
        assert_scene_invariants(code, &classify(code));
    }
}

proptest! {
    #[test]
    fn classify_is_total_over_any_integer(code in any::<i32>()) {
        let c = classify(code);
        prop_assert_eq!(c.particle_count > 0, c.effect_type.needs_particles());
        prop_assert_eq!(c.fog_density > 0.0, c.effect_type == EffectType::Fog);
        prop_assert_eq!(c.thunderstorm, c.effect_type == EffectType::Thunderstorm);
    }
}

// ── Clear ──

#[test]
fn test_clear_sky() {
    let c = classify(0);
    assert_eq!(c.effect_type, EffectType::Clear);
    assert_eq!(c.intensity, Intensity::Light);
    assert_eq!(c.particle_count, 0);
    assert_eq!(c.fog_density, 0.0);
    assert!(!c.thunderstorm);
    assert_eq!(c.cloud_cover, 0.0);
}

#[test]
fn test_out_of_range_codes_are_clear() {
    for code in [-1, 4, 10, 44, 46, 58, 60, 68, 70, 78, 84, 87, 94, 100, 1000] {
        let c = classify(code);
        assert_eq!(c.effect_type, EffectType::Clear, "code {}", code);
        assert_eq!(c.intensity, Intensity::Light, "code {}", code);
        assert_eq!(c.particle_count, 0, "code {}", code);
    }
}

// ── Fog ──

#[test]
fn test_fog_codes() {
    for code in [45, 48] {
        let c = classify(code);
        assert_eq!(c.effect_type, EffectType::Fog);
        assert_eq!(c.intensity, Intensity::Moderate);
        assert_eq!(c.fog_density, 0.04);
        assert_eq!(c.particle_count, 0);
        assert_eq!(c.cloud_cover, 0.9);
    }
}

#[test]
fn test_fog_table_keeps_every_tier() {
    assert_eq!(fog_density(EffectType::Fog, Intensity::Light), 0.015);
    assert_eq!(fog_density(EffectType::Fog, Intensity::Heavy), 0.08);
    assert_eq!(fog_density(EffectType::Rain, Intensity::Heavy), 0.0);
}

// ── Rain ──

#[test]
fn test_rain_intensities() {
    let cases: &[(i32, Intensity)] = &[
        (61, Intensity::Light),
        (63, Intensity::Moderate),
        (65, Intensity::Heavy),
        (51, Intensity::Light),
        (53, Intensity::Moderate),
        (55, Intensity::Heavy),
        (56, Intensity::Heavy),
        (57, Intensity::Heavy),
        (66, Intensity::Light),
        (67, Intensity::Heavy),
        (80, Intensity::Light),
        (81, Intensity::Moderate),
        (82, Intensity::Heavy),
    ];
    for &(code, intensity) in cases {
        let c = classify(code);
        assert_eq!(c.effect_type, EffectType::Rain, "code {}", code);
        assert_eq!(c.intensity, intensity, "code {}", code);
        assert_eq!(c.particle_count, PARTICLE_COUNTS.get(intensity), "code {}", code);
    }
}

#[test]
fn test_particle_table() {
    assert_eq!(classify(61).particle_count, 800);
    assert_eq!(classify(63).particle_count, 2000);
    assert_eq!(classify(65).particle_count, 4500);
}

// ── Snow ──

#[test]
fn test_snow_codes() {
    let cases: &[(i32, Intensity)] = &[
        (71, Intensity::Light),
        (73, Intensity::Moderate),
        (75, Intensity::Heavy),
        (77, Intensity::Heavy),
        (85, Intensity::Light),
        (86, Intensity::Heavy),
    ];
    for &(code, intensity) in cases {
        let c = classify(code);
        assert_eq!(c.effect_type, EffectType::Snow, "code {}", code);
        assert_eq!(c.intensity, intensity, "code {}", code);
    }
}

// ── Thunderstorm ──

#[test]
fn test_thunderstorm_codes() {
    let c = classify(95);
    assert_eq!(c.effect_type, EffectType::Thunderstorm);
    assert!(c.thunderstorm);
    assert_eq!(c.intensity, Intensity::Light);
    assert_eq!(classify(96).intensity, Intensity::Moderate);
    assert_eq!(classify(98).intensity, Intensity::Moderate);
    assert_eq!(classify(99).effect_type, EffectType::Thunderstorm);
    assert_eq!(classify(99).intensity, Intensity::Heavy);
}

// ── Cloud cover ──

#[test]
fn test_cloud_cover_mapping() {
    assert_eq!(cloud_cover(2), 0.55);
    assert_eq!(cloud_cover(3), 0.95);
    assert_eq!(cloud_cover(63), 0.85);
    assert_eq!(cloud_cover(59), 0.85);
    assert_eq!(cloud_cover(96), 0.85);
    assert_eq!(cloud_cover(10), 0.6);
    assert_eq!(cloud_cover(-5), 0.6);
}
