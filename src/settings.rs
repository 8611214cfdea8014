use crate::constants::*;
use heartfield_core::FieldConfig;
use std::str::FromStr;

/// Merge optional string overrides (canvas `data-*` attributes) into the
/// default config. Unparsable values are logged and skipped; an override set
/// that fails validation falls back to the defaults.
pub fn config_from_attributes(lookup: impl Fn(&str) -> Option<String>) -> FieldConfig {
    let defaults = FieldConfig::default();
    let mut config = defaults.clone();

    if let Some(v) = parse_attr(&lookup, ATTR_BIG_COUNT) {
        config.big_count = v;
    }
    if let Some(v) = parse_attr(&lookup, ATTR_SMALL_COUNT) {
        config.small_count = v;
    }
    if let Some(v) = parse_attr(&lookup, ATTR_POP_CHANCE) {
        config.pop_chance = v;
    }
    if let Some(v) = parse_attr(&lookup, ATTR_STICK_MS) {
        config.stick_ms = v;
    }
    if let Some(v) = parse_attr(&lookup, ATTR_MAX_PARTICLES) {
        config.max_particles = Some(v);
    }

    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("[settings] ignoring canvas overrides: {}", e);
            defaults
        }
    }
}

fn parse_attr<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[settings] {}={:?} is not a valid value", name, raw);
            None
        }
    }
}
