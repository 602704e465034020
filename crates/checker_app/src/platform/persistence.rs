use std::fs;
use std::io::Write;
use std::path::Path;

use checker_core::PanelSettings;
use checker_logging::{checker_error, checker_info, checker_warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

const SETTINGS_FILENAME: &str = ".checker_panel.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedPanel {
    left: i32,
    top: i32,
    minimized: bool,
}

pub(crate) fn load_panel_settings(dir: &Path) -> Option<PanelSettings> {
    let path = dir.join(SETTINGS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return None;
        }
        Err(err) => {
            checker_warn!("Failed to read panel settings from {:?}: {}", path, err);
            return None;
        }
    };

    let persisted: PersistedPanel = match ron::from_str(&content) {
        Ok(persisted) => persisted,
        Err(err) => {
            checker_warn!("Failed to parse panel settings from {:?}: {}", path, err);
            return None;
        }
    };

    checker_info!("Loaded panel settings from {:?}", path);
    Some(PanelSettings {
        left: persisted.left,
        top: persisted.top,
        minimized: persisted.minimized,
    })
}

pub(crate) fn save_panel_settings(dir: &Path, settings: &PanelSettings) {
    let persisted = PersistedPanel {
        left: settings.left,
        top: settings.top,
        minimized: settings.minimized,
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&persisted, pretty) {
        Ok(text) => text,
        Err(err) => {
            checker_error!("Failed to serialize panel settings: {}", err);
            return;
        }
    };

    if let Err(err) = write_atomically(dir, SETTINGS_FILENAME, &content) {
        checker_error!("Failed to write panel settings to {:?}: {}", dir, err);
    }
}

// Write a temp file in the target directory, then rename over the target.
fn write_atomically(dir: &Path, filename: &str, content: &str) -> std::io::Result<()> {
    let target = dir.join(filename);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    if target.exists() {
        fs::remove_file(&target)?;
    }
    tmp.persist(&target).map_err(|err| err.error)?;
    Ok(())
}
