//! Host configuration
//!
//! Supplied by the embedding page as JSON when the game starts. Never
//! persisted; only the best score survives a reload.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::audio::Volume;
use crate::tuning::{SpriteMetrics, Tuning};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prefix prepended to every image and audio path
    pub asset_root: String,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Start muted
    pub muted: bool,

    /// Fixed RNG seed; the browser seeds from the clock when absent
    pub seed: Option<u64>,

    /// Gameplay overrides
    pub tuning: Tuning,
    pub metrics: SpriteMetrics,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_root: "/".to_string(),

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            seed: None,

            tuning: Tuning::default(),
            metrics: SpriteMetrics::default(),
        }
    }
}

impl Settings {
    /// Parse settings from the host's JSON blob
    pub fn from_json(json: &str) -> Result<Self> {
        let mut settings: Settings =
            serde_json::from_str(json).context("invalid settings JSON")?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Parse optional host JSON, falling back to defaults on any problem
    pub fn from_host(json: Option<&str>) -> Self {
        match json.map(str::trim).filter(|s| !s.is_empty()) {
            None => Self::default(),
            Some(json) => Self::from_json(json).unwrap_or_else(|e| {
                log::warn!("Using default settings: {:#}", e);
                Self::default()
            }),
        }
    }

    /// Resolve an asset path against the configured root
    pub fn asset_url(&self, path: &str) -> String {
        if self.asset_root.ends_with('/') {
            format!("{}{}", self.asset_root, path)
        } else {
            format!("{}/{}", self.asset_root, path)
        }
    }

    /// Starting volume levels for the cue player
    pub fn volume(&self) -> Volume {
        Volume::new(self.master_volume, self.sfx_volume, self.muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_overrides_and_clamps() {
        let settings =
            Settings::from_json(r#"{ "master_volume": 3.0, "tuning": { "thrust": 4.0 } }"#)
                .unwrap();
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.tuning.thrust, 4.0);
        assert_eq!(settings.tuning.gravity, Tuning::default().gravity);
    }

    #[test]
    fn test_from_host_falls_back_on_garbage() {
        let settings = Settings::from_host(Some("{ not json"));
        assert_eq!(settings.asset_root, "/");
        assert!(Settings::from_json("{ not json").is_err());
        assert_eq!(Settings::from_host(Some("   ")).sfx_volume, 1.0);
    }

    #[test]
    fn test_asset_url_joins_root() {
        let mut settings = Settings::default();
        assert_eq!(settings.asset_url("img/BG.png"), "/img/BG.png");
        settings.asset_root = "https://cdn.example/game".to_string();
        assert_eq!(
            settings.asset_url("sfx/flap.wav"),
            "https://cdn.example/game/sfx/flap.wav"
        );
    }

    #[test]
    fn test_volume_carries_host_levels() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        let volume = settings.volume();
        assert!(volume.muted);
        assert_eq!(volume.effective(), 0.0);
        assert_eq!(Settings::default().volume().effective(), 0.8);
    }
}
