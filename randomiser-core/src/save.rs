use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::assignment::Achievements;
use crate::ledger::CompletionLedger;
use crate::{RandomiserMode, Result};

/// Everything the host persists between sessions.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub seed: Option<u64>,
    pub mode: RandomiserMode,
    pub achievements_version: String,
    pub achievements: Achievements,
    pub ledger: CompletionLedger,
}

impl SaveData {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<SaveData> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the save, gzip-compressed when the path ends in `.gz`.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = self.to_json()?;
        if is_gzip_path(path) {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(json.as_bytes())?;
            fs::write(path, encoder.finish()?)?;
        } else {
            fs::write(path, json)?;
        }

        debug!("Wrote save data to {}", path.display());
        Ok(())
    }

    pub fn load_from_path(path: &Path) -> Result<SaveData> {
        let bytes = fs::read(path)?;
        let json = if is_gzip_path(path) {
            let mut decoder = GzDecoder::new(&bytes[..]);
            let mut out = String::new();
            decoder.read_to_string(&mut out)?;
            out
        } else {
            String::from_utf8_lossy(&bytes).into_owned()
        };

        SaveData::from_json(&json)
    }
}

fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_save_round_trips() {
        let data = SaveData::default();
        let json = data.to_json().unwrap();
        assert_eq!(SaveData::from_json(&json).unwrap(), data);
    }

    #[test]
    fn gz_extension_is_detected() {
        assert!(is_gzip_path(Path::new("save.json.gz")));
        assert!(is_gzip_path(Path::new("SAVE.GZ")));
        assert!(!is_gzip_path(Path::new("save.json")));
    }

    #[test]
    fn rejects_garbage() {
        assert!(SaveData::from_json("{ not json").is_err());
    }
}
