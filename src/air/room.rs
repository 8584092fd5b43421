use thiserror::Error;

/// 입력 값 검증 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// 실 치수는 0보다 커야 함
    #[error("{name} 값 {value}은(는) 0보다 커야 합니다")]
    NonPositiveDimension { name: &'static str, value: f64 },
    /// 환기횟수는 음수일 수 없음
    #[error("환기횟수 {0}은(는) 음수일 수 없습니다")]
    NegativeAirChanges(f64),
    /// 치수 곱이 넘쳐 실 체적이 유한하지 않음
    #[error("실 체적 {0} ft³이(가) 유효하지 않습니다")]
    InvalidVolume(f64),
    /// 체적과 환기횟수의 곱이 넘침
    #[error("필요 풍량 {0} CFM이(가) 유한하지 않습니다")]
    NonFiniteAirflow(f64),
}

/// 실 치수 [ft].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomGeometry {
    pub length_ft: f64,
    pub width_ft: f64,
    pub height_ft: f64,
}

impl RoomGeometry {
    /// 세 치수가 모두 양의 유한값인지 확인한 뒤 생성한다.
    pub fn new(length_ft: f64, width_ft: f64, height_ft: f64) -> Result<Self, InputError> {
        for (name, value) in [
            ("length", length_ft),
            ("width", width_ft),
            ("height", height_ft),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(InputError::NonPositiveDimension { name, value });
            }
        }
        Ok(Self {
            length_ft,
            width_ft,
            height_ft,
        })
    }

    /// 실 체적 [ft³]
    pub fn volume_ft3(&self) -> f64 {
        self.length_ft * self.width_ft * self.height_ft
    }
}

/// 실 체적과 환기횟수로 정해지는 필요 풍량.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirflowRequirement {
    /// 실 체적 [ft³]
    pub volume_ft3: f64,
    /// 시간당 환기횟수 [1/h]
    pub air_changes_per_hour: f64,
}

impl AirflowRequirement {
    /// 체적은 양의 유한값, 환기횟수는 0 이상이어야 하고 그 곱으로 얻는 풍량도 유한해야 한다.
    pub fn new(volume_ft3: f64, air_changes_per_hour: f64) -> Result<Self, InputError> {
        if !(volume_ft3.is_finite() && volume_ft3 > 0.0) {
            return Err(InputError::InvalidVolume(volume_ft3));
        }
        if !(air_changes_per_hour.is_finite() && air_changes_per_hour >= 0.0) {
            return Err(InputError::NegativeAirChanges(air_changes_per_hour));
        }
        let flow = required_flow_cfm(volume_ft3, air_changes_per_hour);
        if !flow.is_finite() {
            return Err(InputError::NonFiniteAirflow(flow));
        }
        Ok(Self {
            volume_ft3,
            air_changes_per_hour,
        })
    }

    pub fn for_room(room: &RoomGeometry, air_changes_per_hour: f64) -> Result<Self, InputError> {
        Self::new(room.volume_ft3(), air_changes_per_hour)
    }

    /// 필요 풍량 [CFM]
    pub fn required_flow_cfm(&self) -> f64 {
        required_flow_cfm(self.volume_ft3, self.air_changes_per_hour)
    }
}

/// 실 체적 [ft³]과 환기횟수 [1/h]로 필요 풍량 [CFM]을 계산한다.
///
/// 시간당 환기를 분당으로 바꾸기 위해 60으로 나눈다. 입력 검증은 하지 않는다.
pub fn required_flow_cfm(volume_ft3: f64, ach: f64) -> f64 {
    volume_ft3 * ach / 60.0
}
