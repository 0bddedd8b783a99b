use std::env;
use std::fmt::Display;
use std::str::FromStr;

use anyhow::{Context, anyhow};

/// Reads a mandatory variable. Blank values count as missing.
pub fn required(key: &str) -> anyhow::Result<String> {
    parse_required(key, env::var(key).ok())
}

/// Reads and parses an optional variable, falling back to `default` when unset.
pub fn optional<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    parse_optional(key, env::var(key).ok(), default)
}

fn parse_required(key: &str, raw: Option<String>) -> anyhow::Result<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .with_context(|| format!("{} environment variable must be set", key))
}

fn parse_optional<T>(key: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|e| anyhow!("{} has invalid value {:?}: {}", key, value, e)),
    }
}
