use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::air::DiagnosticKind;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_TITLE: &str = "general.app_title";

    pub const ROOM_HEADING: &str = "room.heading";
    pub const PROMPT_LENGTH: &str = "prompt.length";
    pub const PROMPT_WIDTH: &str = "prompt.width";
    pub const PROMPT_HEIGHT: &str = "prompt.height";
    pub const PROMPT_ACH: &str = "prompt.ach";

    pub const STATE_HEADING: &str = "state.heading";
    pub const PROMPT_INITIAL_TEMPERATURE: &str = "prompt.initial_temperature";
    pub const PROMPT_INITIAL_RH: &str = "prompt.initial_rh";
    pub const PROMPT_TARGET_TEMPERATURE: &str = "prompt.target_temperature";
    pub const PROMPT_TARGET_RH: &str = "prompt.target_rh";

    pub const DIAG_HEADING: &str = "diagnostics.heading";
    pub const DIAG_VOLUMETRIC_FLOW: &str = "diagnostics.volumetric_flow";
    pub const DIAG_AIR_DENSITY: &str = "diagnostics.air_density";
    pub const DIAG_MASS_FLOW: &str = "diagnostics.mass_flow";
    pub const DIAG_INITIAL_ENTHALPY: &str = "diagnostics.initial_enthalpy";
    pub const DIAG_FINAL_ENTHALPY: &str = "diagnostics.final_enthalpy";
    pub const DIAG_ENTHALPY_DIFFERENCE: &str = "diagnostics.enthalpy_difference";
    pub const DIAG_COOLING_LOAD: &str = "diagnostics.cooling_load";
    pub const DIAG_WATER_REMOVAL: &str = "diagnostics.water_removal";

    pub const RESULT_ROOM_VOLUME: &str = "result.room_volume";
    pub const RESULT_ACH: &str = "result.ach";
    pub const RESULT_REQUIRED_CFM: &str = "result.required_cfm";
    pub const RESULT_TOTAL_LOAD: &str = "result.total_load";
    pub const RESULT_TONS: &str = "result.tons";
    pub const UNIT_TONS: &str = "unit.tons";
}

/// 진단 항목에 해당하는 문자열 키.
pub fn diagnostic_key(kind: DiagnosticKind) -> &'static str {
    use keys::*;
    match kind {
        DiagnosticKind::VolumetricFlow => DIAG_VOLUMETRIC_FLOW,
        DiagnosticKind::AirDensity => DIAG_AIR_DENSITY,
        DiagnosticKind::MassFlow => DIAG_MASS_FLOW,
        DiagnosticKind::InitialEnthalpy => DIAG_INITIAL_ENTHALPY,
        DiagnosticKind::FinalEnthalpy => DIAG_FINAL_ENTHALPY,
        DiagnosticKind::EnthalpyDifference => DIAG_ENTHALPY_DIFFERENCE,
        DiagnosticKind::CoolingLoadKw => DIAG_COOLING_LOAD,
        DiagnosticKind::WaterRemovalRate => DIAG_WATER_REMOVAL,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        if overrides.is_some() {
            tracing::debug!(lang = lang_code, "locale override pack loaded");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 영어 순으로 찾는다.
    pub fn t(&self, key: &str) -> Cow<'static, str> {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return Cow::Owned(v.clone());
        }
        let builtin = match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        };
        Cow::Borrowed(builtin)
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| normalize_locale_string(&value))
}

/// TOML 기반 언어팩을 로드한다. 형식: 섹션.키 = "값"
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_TITLE => "=== HVAC 냉방 부하 계산기 ===",
        ROOM_HEADING => "\n실 치수와 시간당 환기횟수를 입력하세요:",
        PROMPT_LENGTH => "실 길이 (ft)",
        PROMPT_WIDTH => "실 폭 (ft)",
        PROMPT_HEIGHT => "실 높이 (ft)",
        PROMPT_ACH => "시간당 환기횟수",
        STATE_HEADING => "\n온도와 습도 조건을 입력하세요:",
        PROMPT_INITIAL_TEMPERATURE => "초기 온도 (°C)",
        PROMPT_INITIAL_RH => "초기 상대습도 (0-1)",
        PROMPT_TARGET_TEMPERATURE => "목표 온도 (°C)",
        PROMPT_TARGET_RH => "목표 상대습도 (0-1)",
        DIAG_HEADING => "\n-- 계산 상세 --",
        DIAG_VOLUMETRIC_FLOW => "체적 유량",
        DIAG_AIR_DENSITY => "공기 밀도",
        DIAG_MASS_FLOW => "질량 유량",
        DIAG_INITIAL_ENTHALPY => "초기 엔탈피",
        DIAG_FINAL_ENTHALPY => "최종 엔탈피",
        DIAG_ENTHALPY_DIFFERENCE => "엔탈피 차",
        DIAG_COOLING_LOAD => "냉방 부하",
        DIAG_WATER_REMOVAL => "제습량",
        RESULT_ROOM_VOLUME => "실 체적",
        RESULT_ACH => "시간당 환기횟수",
        RESULT_REQUIRED_CFM => "필요 풍량(CFM)",
        RESULT_TOTAL_LOAD => "총 냉방 부하",
        RESULT_TONS => "냉동톤",
        UNIT_TONS => "RT",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_TITLE => "=== HVAC Cooling Load Calculator ===",
        ROOM_HEADING => "\nEnter room dimensions and air changes per hour:",
        PROMPT_LENGTH => "Room length (feet)",
        PROMPT_WIDTH => "Room width (feet)",
        PROMPT_HEIGHT => "Room height (feet)",
        PROMPT_ACH => "Air changes per hour",
        STATE_HEADING => "\nEnter temperature and humidity parameters:",
        PROMPT_INITIAL_TEMPERATURE => "Initial temperature (°C)",
        PROMPT_INITIAL_RH => "Initial relative humidity (0-1)",
        PROMPT_TARGET_TEMPERATURE => "Target temperature (°C)",
        PROMPT_TARGET_RH => "Target relative humidity (0-1)",
        DIAG_HEADING => "\n-- Calculation details --",
        DIAG_VOLUMETRIC_FLOW => "Volumetric flow rate",
        DIAG_AIR_DENSITY => "Air density",
        DIAG_MASS_FLOW => "Mass flow rate",
        DIAG_INITIAL_ENTHALPY => "Initial enthalpy",
        DIAG_FINAL_ENTHALPY => "Final enthalpy",
        DIAG_ENTHALPY_DIFFERENCE => "Enthalpy difference",
        DIAG_COOLING_LOAD => "Cooling load",
        DIAG_WATER_REMOVAL => "Water removal rate",
        RESULT_ROOM_VOLUME => "Room volume",
        RESULT_ACH => "Air changes per hour",
        RESULT_REQUIRED_CFM => "Required CFM",
        RESULT_TOTAL_LOAD => "Total Cooling Load",
        RESULT_TONS => "Cooling Tons",
        UNIT_TONS => "tons",
        _ => "[missing translation]",
    }
}
