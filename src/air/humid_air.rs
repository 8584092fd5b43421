/// 습공기 상태(건구온도 + 상대습도).
///
/// 값의 유효성은 습공기 물성 계산 단계에서 확인한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirState {
    /// 건구온도 [°C]
    pub temperature_c: f64,
    /// 상대습도 [0~1]
    pub relative_humidity: f64,
}

impl AirState {
    pub fn new(temperature_c: f64, relative_humidity: f64) -> Self {
        Self {
            temperature_c,
            relative_humidity,
        }
    }
}
