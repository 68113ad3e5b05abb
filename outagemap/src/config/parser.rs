//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::tile::TileId;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
/// Empty values keep the default.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [source] section
    if let Some(section) = ini.section(Some("source")) {
        if let Some(v) = section.get("base_url") {
            let v = v.trim().trim_end_matches('/');
            if !v.is_empty() {
                if !v.starts_with("http://") && !v.starts_with("https://") {
                    return Err(invalid("source", "base_url", v, "must be an http(s) URL"));
                }
                config.source.base_url = v.to_string();
            }
        }
        if let Some(v) = section.get("seeds") {
            if !v.trim().is_empty() {
                config.source.seeds = parse_seeds(v)
                    .map_err(|reason| invalid("source", "seeds", v, &reason))?;
            }
        }
    }

    // [traversal] section
    if let Some(section) = ini.section(Some("traversal")) {
        if let Some(v) = section.get("max_depth") {
            let v = v.trim();
            if !v.is_empty() {
                let depth = v.parse::<usize>().map_err(|_| {
                    invalid("traversal", "max_depth", v, "must be a non-negative integer")
                })?;
                config.traversal.max_depth = Some(depth);
            }
        }
    }

    // [http] section
    if let Some(section) = ini.section(Some("http")) {
        if let Some(v) = section.get("timeout") {
            let v = v.trim();
            if !v.is_empty() {
                config.http.timeout = match v.parse::<u64>() {
                    Ok(secs) if secs > 0 => secs,
                    _ => {
                        return Err(invalid(
                            "http",
                            "timeout",
                            v,
                            "must be a positive number of seconds",
                        ))
                    }
                };
            }
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = Some(expand_tilde(v));
            }
        }
    }

    Ok(config)
}

/// Parses a comma- or whitespace-separated list of seed tile ids.
pub fn parse_seeds(value: &str) -> Result<Vec<TileId>, String> {
    let seeds = value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| TileId::parse(s).map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;

    if seeds.is_empty() {
        return Err("at least one seed tile is required".to_string());
    }
    Ok(seeds)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
