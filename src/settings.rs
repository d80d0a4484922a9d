//! Game settings and preferences
//!
//! Persisted in LocalStorage, separately from gameplay state (which is
//! in-memory only and vanishes with the page).

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Show the FPS counter overlay
    pub show_fps: bool,
    /// Soft drop shadow under the ball
    pub ball_shadow: bool,
    /// High contrast palette (accessibility)
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: false,
            ball_shadow: true,
            high_contrast: false,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "paddle_bounce_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.show_fps);
        assert!(settings.ball_shadow);
        assert!(!settings.high_contrast);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            show_fps: true,
            ball_shadow: false,
            high_contrast: true,
        };

        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.show_fps, settings.show_fps);
        assert_eq!(back.ball_shadow, settings.ball_shadow);
        assert_eq!(back.high_contrast, settings.high_contrast);
    }

    #[test]
    fn test_malformed_save_is_an_error() {
        // The wasm loader falls back to defaults when a stored save
        // fails to parse; this pins down that such saves do fail
        let result: Result<Settings, _> = serde_json::from_str("{\"show_fps\":1}");
        assert!(result.is_err());
    }
}
