use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::catalog::Category;

/// 애플리케이션 시작 설정. config.toml은 읽기 전용이며 프로그램이 쓰는 일은 없다.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드: "auto" | "pt" | "en"
    pub language: String,
    /// 시작 시 선택되는 범주
    pub default_category: Category,
    pub ui_scale: f32,
    pub window_alpha: f32,
    pub always_on_top: bool,
    pub custom_font_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            default_category: Category::Length,
            ui_scale: 1.0,
            window_alpha: 1.0,
            always_on_top: false,
            custom_font_path: None,
        }
    }
}

/// 설정 로드 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Parse(e) => write!(f, "설정 파싱 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parse(value)
    }
}

/// config.toml이 있으면 읽고, 없으면 기본 설정을 돌려준다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.language, "auto");
        assert_eq!(cfg.default_category, Category::Length);
        assert!((cfg.ui_scale - 1.0).abs() < f32::EPSILON);
        assert!((cfg.window_alpha - 1.0).abs() < f32::EPSILON);
        assert!(!cfg.always_on_top);
        assert!(cfg.custom_font_path.is_none());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: Config = toml::from_str("language = \"en\"\ndefault_category = \"mass\"")
            .expect("parse config");
        assert_eq!(cfg.language, "en");
        assert_eq!(cfg.default_category, Category::Mass);
        assert!((cfg.ui_scale - 1.0).abs() < f32::EPSILON);
        assert!(!cfg.always_on_top);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let parsed = toml::from_str::<Config>("default_category = \"banana\"");
        assert!(parsed.is_err());
    }
}
