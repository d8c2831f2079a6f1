use crate::alarm::DEFAULT_LEAD_MINUTES;
use std::{env, path::PathBuf, str::FromStr, time::Duration};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SCAN_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub alarm_lead_minutes: u32,
    pub alarm_scan_interval: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let scan_secs = parse_or(&lookup, "ALARM_SCAN_SECS", DEFAULT_SCAN_SECS).max(1);
        Self {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT),
            data_path: resolve_data_path(&lookup),
            alarm_lead_minutes: parse_or(&lookup, "ALARM_LEAD_MINUTES", DEFAULT_LEAD_MINUTES),
            alarm_scan_interval: Duration::from_secs(scan_secs),
        }
    }
}

pub fn resolve_data_path(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    if let Some(path) = lookup("APP_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/attendance.json")
}

fn parse_or<T: FromStr + Copy>(lookup: impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %value, "ignoring unparseable setting");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_path, PathBuf::from("data/attendance.json"));
        assert_eq!(config.alarm_lead_minutes, 5);
        assert_eq!(config.alarm_scan_interval, Duration::from_secs(60));
    }

    #[test]
    fn reads_overrides_and_ignores_garbage() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "9000"),
            ("APP_DATA_PATH", "/tmp/a.json"),
            ("ALARM_LEAD_MINUTES", "ten"),
            ("ALARM_SCAN_SECS", "0"),
        ]));
        assert_eq!(config.port, 9000);
        assert_eq!(config.data_path, PathBuf::from("/tmp/a.json"));
        assert_eq!(config.alarm_lead_minutes, 5);
        assert_eq!(config.alarm_scan_interval, Duration::from_secs(1));
    }
}
