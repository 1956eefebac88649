use serde_json::Value;
use std::collections::HashMap;
use std::env;

/// Flag that substitutes the mock fixture for any real network call.
pub const USE_MOCK_WEATHER: &str = "USE_MOCK_WEATHER";

/// Environment variable holding a custom backend base URL.
pub const ENV_API_BASE: &str = "WEATHER_API_BASE";
/// Environment variable holding the log level filter.
pub const ENV_LOG_LEVEL: &str = "WEATHER_LOG_LEVEL";
/// Environment variable holding the raw feature-flag string (JSON or CSV).
pub const ENV_FEATURE_FLAGS: &str = "WEATHER_FEATURE_FLAGS";

/// Read an environment string, falling back to `default` when the variable is
/// absent or empty. Absence is always a valid, silent case.
pub fn env_or(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

/// Value of a single feature flag. Flags are booleans unless the raw source
/// carried some other literal, which is kept as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Bool(bool),
    Text(String),
}

impl FlagValue {
    fn from_json(value: &Value) -> Self {
        match value {
            Value::Bool(b) => FlagValue::Bool(*b),
            Value::String(s) => FlagValue::Text(s.clone()),
            other => FlagValue::Text(other.to_string()),
        }
    }
}

/// Parse the raw flag source string into a flag map.
///
/// A JSON object is tried first; anything that is not valid JSON falls back
/// to a comma-separated list where a bare name means `true` and `key=value`
/// maps `true`/`false` (case-insensitive) to booleans, keeping any other
/// value as literal text. Malformed input degrades to an empty map rather
/// than erroring.
pub fn parse_feature_flags(raw: &str) -> HashMap<String, FlagValue> {
    if raw.trim().is_empty() {
        return HashMap::new();
    }

    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return match value {
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| (k.clone(), FlagValue::from_json(v)))
                .collect(),
            // valid JSON but not an object: nothing usable
            _ => HashMap::new(),
        };
    }

    let mut flags = HashMap::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match part.split_once('=') {
            None => {
                flags.insert(part.to_string(), FlagValue::Bool(true));
            }
            Some((key, value)) => {
                let key = key.trim();
                if key.is_empty() {
                    continue;
                }
                let value = value.trim();
                let parsed = match value.to_lowercase().as_str() {
                    "true" => FlagValue::Bool(true),
                    "false" => FlagValue::Bool(false),
                    _ => FlagValue::Text(value.to_string()),
                };
                flags.insert(key.to_string(), parsed);
            }
        }
    }
    flags
}

/// Resolved configuration, built once at startup and injected into the
/// client. The flag map is read-only after construction.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Custom backend base URL; when set, the two-step Open-Meteo flow is
    /// bypassed entirely.
    pub backend_base: Option<String>,
    pub log_level: String,
    flags: HashMap<String, FlagValue>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_base: None,
            log_level: "info".to_string(),
            flags: HashMap::new(),
        }
    }
}

impl Settings {
    pub fn new(
        backend_base: Option<String>,
        log_level: impl Into<String>,
        flags: HashMap<String, FlagValue>,
    ) -> Self {
        Self {
            backend_base,
            log_level: log_level.into(),
            flags,
        }
    }

    /// Resolve everything from the process environment.
    pub fn from_env() -> Self {
        let base = env_or(ENV_API_BASE, "");
        Self {
            backend_base: (!base.is_empty()).then_some(base),
            log_level: env_or(ENV_LOG_LEVEL, "info"),
            flags: parse_feature_flags(&env_or(ENV_FEATURE_FLAGS, "")),
        }
    }

    pub fn flag(&self, name: &str) -> Option<&FlagValue> {
        self.flags.get(name)
    }

    /// Boolean view of a flag. A missing flag or a non-boolean value yields
    /// the caller-supplied default.
    pub fn flag_bool(&self, name: &str, default: bool) -> bool {
        match self.flags.get(name) {
            Some(FlagValue::Bool(b)) => *b,
            _ => default,
        }
    }
}
