use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "AchievementRandomiser";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub save_path: PathBuf,
    /// Print how long generation took.
    pub timer: bool,
    pub enable_prikols: bool,
    /// Pause before revealing what an objective unlocked.
    pub delay_achievement_text: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            save_path: default_save_path(),
            timer: true,
            enable_prikols: false,
            delay_achievement_text: false,
        }
    }
}

fn default_save_path() -> PathBuf {
    match dirs::data_dir() {
        Some(mut base) => {
            base.push(APP_DIR);
            base.push("save.json");
            base
        }
        None => PathBuf::from("randomiser_save.json"),
    }
}

fn config_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir().or_else(dirs::data_dir)?;
    base.push(APP_DIR);
    base.push("cli_config.json");
    Some(base)
}

pub fn load_config() -> CliConfig {
    if let Some(path) = config_path() {
        if let Ok(data) = fs::read_to_string(&path) {
            match serde_json::from_str::<CliConfig>(&data) {
                Ok(cfg) => return cfg,
                Err(err) => warn!("Ignoring unreadable config {}: {}", path.display(), err),
            }
        } else {
            debug!("No CLI config at {}, using defaults", path.display());
        }
    }
    CliConfig::default()
}

pub fn save_config(cfg: &CliConfig) -> std::io::Result<()> {
    let Some(path) = config_path() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_string_pretty(cfg)?;
    fs::write(path, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: CliConfig = serde_json::from_str(r#"{"enable_prikols": true}"#).unwrap();
        assert!(cfg.enable_prikols);
        assert!(cfg.timer);
        assert_eq!(cfg.save_path, default_save_path());
    }
}
