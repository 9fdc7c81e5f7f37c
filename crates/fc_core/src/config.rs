//! Generator settings read from the environment.

use serde::Serialize;

use crate::error::ConfigError;

pub const MODEL_ENV: &str = "OPENAI_MODEL_NAME";
pub const TEMPERATURE_ENV: &str = "MODEL_TEMPERATURE";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Sampling temperature when `MODEL_TEMPERATURE` is unset.
pub const DEFAULT_TEMPERATURE: f32 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorSettings {
    pub model: String,
    pub temperature: f32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self { model: DEFAULT_MODEL.to_string(), temperature: DEFAULT_TEMPERATURE }
    }
}

impl GeneratorSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Unset keys fall back to
    /// the defaults; set but unusable values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Some(model) = lookup(MODEL_ENV).filter(|m| !m.trim().is_empty()) {
            settings.model = model;
        }

        if let Some(raw) = lookup(TEMPERATURE_ENV) {
            let invalid = |reason: String| ConfigError::InvalidValue {
                key: TEMPERATURE_ENV,
                value: raw.clone(),
                reason,
            };
            let temperature: f32 = raw.trim().parse().map_err(|e| invalid(format!("{}", e)))?;
            if !temperature.is_finite() || temperature < 0.0 {
                return Err(invalid("must be a non-negative number".into()));
            }
            settings.temperature = temperature;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = GeneratorSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, GeneratorSettings::default());
        assert_eq!(settings.model, "gpt-4o-mini");
        assert_eq!(settings.temperature, 0.05);
    }

    #[test]
    fn test_overrides() {
        let settings = GeneratorSettings::from_lookup(lookup(&[
            (MODEL_ENV, "gpt-4o"),
            (TEMPERATURE_ENV, " 0.7 "),
        ]))
        .unwrap();
        assert_eq!(settings.model, "gpt-4o");
        assert_eq!(settings.temperature, 0.7);
    }

    #[test]
    fn test_blank_model_keeps_default() {
        let settings = GeneratorSettings::from_lookup(lookup(&[(MODEL_ENV, "  ")])).unwrap();
        assert_eq!(settings.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_bad_temperature() {
        for raw in ["warm", "-0.1", "NaN"] {
            let err = GeneratorSettings::from_lookup(lookup(&[(TEMPERATURE_ENV, raw)])).unwrap_err();
            let ConfigError::InvalidValue { key, value, .. } = err;
            assert_eq!(key, TEMPERATURE_ENV);
            assert_eq!(value, raw);
        }
    }
}
