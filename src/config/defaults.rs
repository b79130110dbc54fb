use super::{Config, ProjectConfig};

/// Config written on first run: no overrides, three sample projects.
pub fn defaults() -> Config {
    let project = |name: &str, color: &str| ProjectConfig {
        name: name.to_string(),
        color: Some(color.to_string()),
    };
    Config {
        projects: vec![
            project("Personal", "#FF5722"),
            project("Work", "#2196F3"),
            project("Home", "#4CAF50"),
        ],
        ..Config::default()
    }
}
