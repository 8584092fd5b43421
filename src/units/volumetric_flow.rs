/// 1 CFM에 해당하는 m³/s
pub const M3_PER_S_PER_CFM: f64 = 0.000471947;

/// 체적 유량 단위. 내부 기준은 m³/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumetricFlowUnit {
    CubicMeterPerSecond,
    CubicMeterPerHour,
    LiterPerSecond,
    CubicFootPerMinute,
}

fn to_cubic_meter_per_second(value: f64, unit: VolumetricFlowUnit) -> f64 {
    match unit {
        VolumetricFlowUnit::CubicMeterPerSecond => value,
        VolumetricFlowUnit::CubicMeterPerHour => value / 3600.0,
        VolumetricFlowUnit::LiterPerSecond => value / 1000.0,
        VolumetricFlowUnit::CubicFootPerMinute => value * M3_PER_S_PER_CFM,
    }
}

fn from_cubic_meter_per_second(value: f64, unit: VolumetricFlowUnit) -> f64 {
    match unit {
        VolumetricFlowUnit::CubicMeterPerSecond => value,
        VolumetricFlowUnit::CubicMeterPerHour => value * 3600.0,
        VolumetricFlowUnit::LiterPerSecond => value * 1000.0,
        VolumetricFlowUnit::CubicFootPerMinute => value / M3_PER_S_PER_CFM,
    }
}

/// 체적 유량을 변환한다.
pub fn convert_volumetric_flow(
    value: f64,
    from: VolumetricFlowUnit,
    to: VolumetricFlowUnit,
) -> f64 {
    if from == to {
        return value;
    }
    let m3s = to_cubic_meter_per_second(value, from);
    from_cubic_meter_per_second(m3s, to)
}
