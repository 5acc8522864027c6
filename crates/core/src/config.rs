use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::clock::{FrameClock, DEFAULT_FPS};
use crate::composition::CompositionSettings;
use crate::timing::{ReadingDelayPolicy, TimingPolicy, DEFAULT_READING_DELAY_POLICY};

/// Everything the compiler and render metadata depend on.
///
/// Loaded from TOML; every key is optional and falls back to the defaults
/// below.
///
/// ```toml
/// fps = 30
/// reading_delay_policy = "before_typing"
///
/// [timing]
/// typing_floor_ms = 1000
///
/// [composition]
/// width = 1080
/// height = 1920
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimelineConfig {
    pub fps: u32,
    pub reading_delay_policy: ReadingDelayPolicy,
    pub timing: TimingPolicy,
    pub composition: CompositionSettings,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            reading_delay_policy: DEFAULT_READING_DELAY_POLICY,
            timing: TimingPolicy::default(),
            composition: CompositionSettings::default(),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    #[diagnostic(
        code(config::not_found),
        help("pass an existing TOML file or omit --config to use defaults")
    )]
    NotFound(PathBuf),

    #[error("failed to parse config: {0}")]
    #[diagnostic(code(config::parse_error))]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    #[diagnostic(code(config::serialize_error))]
    Serialize(#[from] toml::ser::Error),

    #[error("frame rate must be greater than zero")]
    #[diagnostic(code(config::invalid_fps))]
    InvalidFps,

    #[error("io error: {0}")]
    #[diagnostic(code(config::io_error))]
    Io(#[from] std::io::Error),
}

impl TimelineConfig {
    /// Loads a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        info!(path = %path.display(), fps = config.fps, "loaded timeline config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: TimelineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.clock().map(|_| ())
    }

    /// The frame clock for `fps`; zero is [`ConfigError::InvalidFps`].
    pub fn clock(&self) -> Result<FrameClock, ConfigError> {
        FrameClock::from_fps(self.fps).ok_or(ConfigError::InvalidFps)
    }

    pub fn with_reading_delay_policy(mut self, policy: ReadingDelayPolicy) -> Self {
        self.reading_delay_policy = policy;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let config = TimelineConfig::default()
            .with_fps(60)
            .with_reading_delay_policy(ReadingDelayPolicy::FoldedIntoBoundary);
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let loaded = TimelineConfig::from_toml(&toml_str).expect("Failed to deserialize");

        assert_eq!(config, loaded);
        assert_eq!(loaded.clock().expect("valid fps").fps(), 60);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let loaded = TimelineConfig::from_toml(
            r#"
            reading_delay_policy = "folded_into_boundary"

            [timing]
            typing_floor_ms = 750
            "#,
        )
        .expect("partial config");

        assert_eq!(loaded.fps, DEFAULT_FPS);
        assert_eq!(
            loaded.reading_delay_policy,
            ReadingDelayPolicy::FoldedIntoBoundary
        );
        assert_eq!(loaded.timing.typing_floor_ms, 750);
        assert_eq!(loaded.timing.reading_floor_ms, 800);
        assert_eq!(loaded.composition, CompositionSettings::default());
    }

    #[test]
    fn test_zero_fps_rejected() {
        let err = TimelineConfig::from_toml("fps = 0").expect_err("zero fps");
        assert!(matches!(err, ConfigError::InvalidFps));
    }

    #[test]
    fn test_zero_fps_built_in_code_has_no_clock() {
        let config = TimelineConfig::default().with_fps(0);
        assert!(matches!(config.clock(), Err(ConfigError::InvalidFps)));
        assert!(matches!(config.validate(), Err(ConfigError::InvalidFps)));
    }

    #[test]
    fn test_missing_file_reports_not_found() {
        let err = TimelineConfig::load(Path::new("/definitely/not/here.toml"))
            .expect_err("missing file");
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
