// MIT License

// Copyright (c) 2022 AnonmousDapper

use std::{error::Error, fmt, time::Duration};

use serde::Deserialize;

use crate::canvas::Color;

const SETTINGS: &str = include_str!("data/settings.toml");

fn default_half_extent() -> i32 {
    30
}

fn default_tick_ms() -> u64 {
    100
}

fn default_zoom() -> f32 {
    4.0
}

fn default_min_zoom() -> f32 {
    1.0
}

fn default_max_zoom() -> f32 {
    32.0
}

fn default_background() -> Color {
    (18, 18, 24)
}

fn default_board() -> Color {
    (38, 40, 52)
}

fn default_grid() -> Color {
    (56, 60, 76)
}

fn default_live() -> Color {
    (105, 240, 174)
}

fn default_fading() -> Color {
    (25, 118, 210)
}

#[derive(Debug)]
pub enum SettingsError {
    Parse(toml::de::Error),
    Invalid(&'static str),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(e) => write!(f, "malformed settings: {}", e),
            SettingsError::Invalid(why) => write!(f, "invalid settings: {}", why),
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<toml::de::Error> for SettingsError {
    fn from(e: toml::de::Error) -> Self {
        SettingsError::Parse(e)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    #[serde(default = "default_half_extent")]
    #[serde(alias = "extent")]
    pub half_extent: i32,

    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    #[serde(default = "default_zoom")]
    pub zoom: f32,

    #[serde(default = "default_min_zoom")]
    pub min_zoom: f32,

    #[serde(default = "default_max_zoom")]
    pub max_zoom: f32,

    #[serde(default = "default_background")]
    pub background: Color,

    #[serde(default = "default_board")]
    pub board: Color,

    #[serde(default = "default_grid")]
    pub grid: Color,

    #[serde(default = "default_live")]
    pub live: Color,

    #[serde(default = "default_fading")]
    #[serde(alias = "fade")]
    pub fading: Color,
}

impl Settings {
    /// The settings compiled into the binary.
    pub fn load() -> Result<Self, SettingsError> {
        Self::from_toml(SETTINGS)
    }

    pub fn from_toml(source: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(source)?;
        settings.validate()?;

        Ok(settings)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.half_extent <= 0 {
            return Err(SettingsError::Invalid("half_extent must be positive"));
        }

        if self.tick_ms == 0 {
            return Err(SettingsError::Invalid("tick_ms must be non-zero"));
        }

        if !(self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom) {
            return Err(SettingsError::Invalid(
                "zoom range must be positive and ordered",
            ));
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            half_extent: default_half_extent(),
            tick_ms: default_tick_ms(),
            zoom: default_zoom(),
            min_zoom: default_min_zoom(),
            max_zoom: default_max_zoom(),
            background: default_background(),
            board: default_board(),
            grid: default_grid(),
            live: default_live(),
            fading: default_fading(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_settings_parse() {
        let settings = Settings::load().unwrap();

        assert_eq!(settings.half_extent, 30);
        assert_eq!(settings.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings = Settings::from_toml("extent = 12\nfade = [1, 2, 3]\n").unwrap();

        assert_eq!(settings.half_extent, 12);
        assert_eq!(settings.fading, (1, 2, 3));
        assert_eq!(settings.tick_ms, default_tick_ms());
        assert_eq!(settings.live, default_live());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Settings::from_toml("half_extent = 0"),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_toml("tick_ms = 0"),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_toml("min_zoom = 8.0\nmax_zoom = 2.0"),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_toml("half_extent = \"wide\""),
            Err(SettingsError::Parse(_))
        ));
    }
}
