use thiserror::Error;

use super::unit_system::UnitSystem;

/// 습공기 물성 계산 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PsychroError {
    /// 단위계가 아직 지정되지 않음
    #[error("습공기 단위계가 지정되지 않았습니다. set_unit_system을 먼저 호출하세요")]
    UnitSystemNotSet,
    /// 이미 다른 단위계로 초기화됨
    #[error("단위계가 이미 {current:?}로 지정되어 {requested:?}로 바꿀 수 없습니다")]
    UnitSystemConflict {
        current: UnitSystem,
        requested: UnitSystem,
    },
    /// 공식이 제공되지 않는 단위계
    #[error("{0:?} 단위계 공식은 제공하지 않습니다")]
    UnsupportedUnitSystem(UnitSystem),
    /// 건구온도가 [-100, 200] °C 범위를 벗어남
    #[error("건구온도 {0} °C가 유효 범위 [-100, 200]를 벗어났습니다")]
    TemperatureOutOfRange(f64),
    /// 상대습도가 [0, 1] 범위를 벗어남
    #[error("상대습도 {0}가 유효 범위 [0, 1]을 벗어났습니다")]
    RelativeHumidityOutOfRange(f64),
    /// 수증기 분압이 음수
    #[error("수증기 분압 {0} Pa가 음수입니다")]
    NegativeVaporPressure(f64),
    /// 수증기 분압이 전압 이상이라 습도비가 정의되지 않음
    #[error("수증기 분압 {vapor_pressure_pa:.1} Pa가 전압 {pressure_pa:.1} Pa 이상입니다")]
    VaporPressureExceedsTotal {
        vapor_pressure_pa: f64,
        pressure_pa: f64,
    },
    /// 습도비가 음수
    #[error("습도비 {0}가 음수입니다")]
    NegativeHumidityRatio(f64),
    /// 입력이 유한한 수가 아님
    #[error("{0} 입력이 유한한 수가 아닙니다")]
    NotFinite(&'static str),
}
