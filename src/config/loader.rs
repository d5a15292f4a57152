//! Store settings loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ConfigWarning, ErrorMode};
use crate::error::{StoreError, StoreResult};

use super::types::StoreSettings;

/// Settings file looked up at the installation root
pub const SETTINGS_FILE: &str = "inistack.toml";

/// Load settings and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StoreResult<(StoreSettings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let settings: StoreSettings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StoreError::Settings {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((settings, warnings))
}

/// Load `<root>/inistack.toml`, or defaults, then apply env overrides.
///
/// A relative `paths.root` is resolved against `root`. Unreadable or
/// invalid settings files are logged and ignored.
pub fn load_or_default(root: &Path) -> StoreSettings {
    let settings_path = root.join(SETTINGS_FILE);

    let mut settings = if settings_path.exists() {
        match load_with_warnings(&settings_path) {
            Ok((settings, warnings)) => {
                for w in &warnings {
                    tracing::warn!(
                        file = %w.file.display(),
                        line = ?w.line,
                        suggestion = ?w.suggestion,
                        "unknown settings key '{}'",
                        w.key
                    );
                }
                settings
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring settings file");
                StoreSettings::default()
            }
        }
    } else {
        StoreSettings::default()
    };

    if settings.paths.root.is_relative() && !settings.paths.root.starts_with("~") {
        settings.paths.root = root.join(&settings.paths.root);
    }

    with_env_overrides(settings)
}

/// Apply environment variable overrides (INISTACK_* prefix)
pub fn with_env_overrides(mut settings: StoreSettings) -> StoreSettings {
    // INISTACK_ROOT
    if let Ok(root) = std::env::var("INISTACK_ROOT") {
        if !root.trim().is_empty() {
            settings.paths.root = PathBuf::from(root);
        }
    }

    // INISTACK_CONFIG_DIR
    if let Ok(dir) = std::env::var("INISTACK_CONFIG_DIR") {
        if !dir.trim().is_empty() {
            settings.paths.config_dir = PathBuf::from(dir);
        }
    }

    // INISTACK_ERROR_MODE (strict | lenient)
    if let Ok(mode) = std::env::var("INISTACK_ERROR_MODE") {
        match ErrorMode::from_name(&mode) {
            Some(mode) => settings.errors.mode = mode,
            None => tracing::warn!(value = %mode, "ignoring unknown INISTACK_ERROR_MODE"),
        }
    }

    // INISTACK_HOST_ENV (empty disables host selection)
    if let Ok(var) = std::env::var("INISTACK_HOST_ENV") {
        let var = var.trim().to_string();
        settings.host.env_var = if var.is_empty() { None } else { Some(var) };
    }

    settings
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "paths",
        "root",
        "config_dir",
        "global_file",
        "local_file",
        "errors",
        "mode",
        "host",
        "env_var",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
