use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::tui::theme::BorderStyle;

pub mod defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub projects: Vec<ProjectConfig>,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Palette overrides keyed by role name (e.g. `accentColor = "#FF5722"`).
    pub overrides: BTreeMap<String, String>,
}

/// A project shown in the preview's project chips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    /// `#RRGGBB`; missing or invalid falls back to the default project color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub border: BorderStyle,
    /// Width of a color swatch in the preview (cells)
    pub swatch_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            border: BorderStyle::Rounded,
            swatch_width: 12,
        }
    }
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    write_config(cfg, &path)
}

fn write_config(cfg: &Config, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(())
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj =
        ProjectDirs::from("dev", "taskhue", "taskhue").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = defaults::defaults();
        write_config(&cfg, &path).context("write default config")?;
        tracing::info!(path = %path.display(), "wrote default config");
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("taskhue-test-{}-{name}", std::process::id()))
            .join("config.toml")
    }

    #[test]
    fn test_parse_partial_config() {
        let raw = r##"
[theme.overrides]
accentColor = "#FF5722"

[[projects]]
name = "Work"
color = "#2196F3"

[[projects]]
name = "Inbox"
"##;
        let cfg: Config = toml::from_str(raw).unwrap();
        assert_eq!(cfg.theme.overrides["accentColor"], "#FF5722");
        assert_eq!(cfg.projects.len(), 2);
        assert_eq!(cfg.projects[1].color, None);
        assert_eq!(cfg.ui.swatch_width, 12);
        assert_eq!(cfg.ui.border, BorderStyle::Rounded);
    }

    #[test]
    fn test_load_writes_defaults_then_reads_back() {
        let path = scratch_path("defaults");
        let _ = fs::remove_file(&path);

        let first = load(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(first.projects.len(), defaults::defaults().projects.len());

        let mut edited = first.clone();
        edited.ui.border = BorderStyle::Thick;
        save(&edited, Some(&path)).unwrap();

        let second = load(Some(&path)).unwrap();
        assert_eq!(second.ui.border, BorderStyle::Thick);
        assert_eq!(second.projects[0].name, first.projects[0].name);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let path = scratch_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[theme\n").unwrap();
        assert!(load(Some(&path)).is_err());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_save_defaults_recovers_malformed_file() {
        let path = scratch_path("reset");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[theme\n").unwrap();
        assert!(load(Some(&path)).is_err());

        save(&defaults::defaults(), Some(&path)).unwrap();
        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.projects.len(), 3);
        assert!(cfg.theme.overrides.is_empty());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
