use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 기본 설정 파일 경로
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 입력을 생략했을 때 사용하는 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    /// 실 길이 [ft]
    pub length_ft: f64,
    /// 실 폭 [ft]
    pub width_ft: f64,
    /// 실 높이 [ft]
    pub height_ft: f64,
    /// 시간당 환기횟수 [1/h]
    pub air_changes_per_hour: f64,
    /// 초기 건구온도 [°C]
    pub initial_temperature_c: f64,
    /// 초기 상대습도 [0~1]
    pub initial_relative_humidity: f64,
    /// 목표 건구온도 [°C]
    pub target_temperature_c: f64,
    /// 목표 상대습도 [0~1]
    pub target_relative_humidity: f64,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            length_ft: 20.0,
            width_ft: 15.0,
            height_ft: 8.0,
            air_changes_per_hour: 4.0,
            initial_temperature_c: 43.0,
            initial_relative_humidity: 0.85,
            target_temperature_c: 25.0,
            target_relative_humidity: 0.55,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// UI 언어 코드 (auto/ko/en)
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub defaults: InputDefaults,
}

fn default_language() -> String {
    "auto".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            defaults: InputDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::info!(path = %path.display(), "default configuration written");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
