// Host-side tests for field configuration and canvas attribute overrides.
// The web crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod settings {
    include!("../src/settings.rs");
}

use heartfield_core::{ConfigError, FieldConfig, HeartField};
use settings::config_from_attributes;
use std::collections::HashMap;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn defaults_match_the_stock_page() {
    let c = FieldConfig::default();
    assert_eq!(c.big_count, 7);
    assert_eq!(c.small_count, 15);
    assert_eq!(c.total_hearts(), 22);
    assert_eq!(c.pop_chance, 0.45);
    assert_eq!(c.stick_ms, 500.0);
    assert_eq!(c.throw_gain, 16.0);
    assert_eq!(c.max_device_pixel_ratio, 1.0);
    assert_eq!(c.max_particles, None);
    assert_eq!(c.validate(), Ok(()));
}

#[test]
fn invalid_configs_are_rejected() {
    let base = FieldConfig::default();
    let cases = [
        (
            FieldConfig {
                big_count: 0,
                small_count: 0,
                ..base.clone()
            },
            ConfigError::NoHearts,
        ),
        (
            FieldConfig {
                pop_chance: 1.5,
                ..base.clone()
            },
            ConfigError::PopChance(1.5),
        ),
        (
            FieldConfig {
                stick_ms: 0.0,
                ..base.clone()
            },
            ConfigError::StickDuration(0.0),
        ),
        (
            FieldConfig {
                throw_gain: -1.0,
                ..base.clone()
            },
            ConfigError::ThrowGain(-1.0),
        ),
        (
            FieldConfig {
                max_device_pixel_ratio: 0.0,
                ..base.clone()
            },
            ConfigError::PixelRatio(0.0),
        ),
        (
            FieldConfig {
                max_particles: Some(0),
                ..base.clone()
            },
            ConfigError::ParticleCap,
        ),
    ];
    for (config, expected) in cases {
        assert_eq!(config.validate(), Err(expected));
    }
    assert!(FieldConfig {
        pop_chance: f32::NAN,
        ..base
    }
    .validate()
    .is_err());
}

#[test]
fn field_refuses_invalid_config() {
    let mut rng = QuarterRandom::default();
    let cfg = FieldConfig {
        big_count: 0,
        small_count: 0,
        ..FieldConfig::default()
    };
    let err = HeartField::new(cfg, glam::Vec2::new(100.0, 100.0), &mut rng).err();
    assert_eq!(err, Some(ConfigError::NoHearts));
    assert_eq!(
        err.map(|e| e.to_string()).as_deref(),
        Some("heart field needs at least one heart")
    );
}

#[derive(Default)]
struct QuarterRandom;

impl heartfield_core::RandomSource for QuarterRandom {
    fn unit(&mut self) -> f32 {
        0.25
    }
}

#[test]
fn attributes_override_defaults() {
    let c = config_from_attributes(attrs(&[
        ("data-big-count", "3"),
        ("data-small-count", " 9 "),
        ("data-pop-chance", "0.8"),
        ("data-stick-ms", "250"),
        ("data-max-particles", "400"),
    ]));
    assert_eq!(c.big_count, 3);
    assert_eq!(c.small_count, 9);
    assert_eq!(c.pop_chance, 0.8);
    assert_eq!(c.stick_ms, 250.0);
    assert_eq!(c.max_particles, Some(400));
    assert_eq!(c.throw_gain, 16.0);
}

#[test]
fn unparsable_attributes_are_skipped() {
    let c = config_from_attributes(attrs(&[
        ("data-big-count", "lots"),
        ("data-pop-chance", "0.1"),
    ]));
    assert_eq!(c.big_count, 7);
    assert_eq!(c.pop_chance, 0.1);
}

#[test]
fn invalid_override_set_falls_back_to_defaults() {
    let c = config_from_attributes(attrs(&[
        ("data-small-count", "30"),
        ("data-pop-chance", "2"),
    ]));
    assert_eq!(c, FieldConfig::default());
}

#[test]
fn no_attributes_means_defaults() {
    assert_eq!(config_from_attributes(|_| None), FieldConfig::default());
}
