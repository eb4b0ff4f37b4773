//! User settings for the calculator window

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use slowcore::storage::{self, config_dir, StorageError};

use crate::session::DEFAULT_MAX_ENTRY_LEN;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    /// Side length of a keypad button
    pub button_size: f32,
    /// Longest number that can be typed
    pub max_entry_len: usize,
    /// Raise a dialog when a calculation fails
    pub error_dialogs: bool,
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            button_size: 40.0,
            max_entry_len: DEFAULT_MAX_ENTRY_LEN,
            error_dialogs: true,
        }
    }
}

impl CalcSettings {
    pub fn config_path() -> PathBuf {
        config_dir("slowcalc").join("settings.json")
    }

    /// Load settings, writing defaults on first run. Never fails: a broken
    /// file is reported and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        match storage::load_json::<Self>(path) {
            Ok(settings) => settings.sanitized(),
            Err(StorageError::NotFound(_)) => {
                let settings = Self::default();
                match settings.save(path) {
                    Ok(()) => info!("wrote default settings to {}", path.display()),
                    Err(e) => warn!("could not write settings: {e}"),
                }
                settings
            }
            Err(e) => {
                warn!("ignoring settings file: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> storage::Result<()> {
        storage::save_json(path, self)
    }

    /// Window size that fits the display, keypad and menu.
    pub fn window_size(&self) -> [f32; 2] {
        let pad = 8.0;
        let width = self.button_size * 4.0 + pad * 5.0;
        let height = self.button_size * 4.0 + pad * 4.0 + 140.0;
        [width.max(200.0), height]
    }

    fn sanitized(mut self) -> Self {
        if !(self.button_size.is_finite() && self.button_size >= 20.0) {
            warn!("button_size {} out of range, using default", self.button_size);
            self.button_size = Self::default().button_size;
        }
        self.max_entry_len = self.max_entry_len.clamp(1, 64);
        self
    }
}
