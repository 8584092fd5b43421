//! 습공기 엔탈피 차를 이용한 냉방 부하 계산.
//! 입력: 풍량(CFM), 초기/목표 습공기 상태
//! 출력: 냉방 부하(kW, BTU/hr), 제습량(kg/h)와 중간값 진단 목록

use super::humid_air::AirState;
use crate::psychro::{self, PsychroError, STANDARD_PRESSURE_PA};
use crate::units::{convert_power, convert_volumetric_flow, PowerUnit, VolumetricFlowUnit};

/// 진단 항목 종류. 계산 순서대로 나열한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    VolumetricFlow,
    AirDensity,
    MassFlow,
    InitialEnthalpy,
    FinalEnthalpy,
    EnthalpyDifference,
    CoolingLoadKw,
    WaterRemovalRate,
}

impl DiagnosticKind {
    pub fn unit(&self) -> &'static str {
        match self {
            DiagnosticKind::VolumetricFlow => "m³/s",
            DiagnosticKind::AirDensity => "kg/m³",
            DiagnosticKind::MassFlow => "kg/s",
            DiagnosticKind::InitialEnthalpy
            | DiagnosticKind::FinalEnthalpy
            | DiagnosticKind::EnthalpyDifference => "J/kg",
            DiagnosticKind::CoolingLoadKw => "kW",
            DiagnosticKind::WaterRemovalRate => "kg/h",
        }
    }

    /// 표시 소수 자릿수
    pub fn precision(&self) -> usize {
        match self {
            DiagnosticKind::VolumetricFlow => 6,
            DiagnosticKind::MassFlow => 4,
            DiagnosticKind::WaterRemovalRate => 3,
            _ => 2,
        }
    }
}

/// 계산 중간값 한 건.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub value: f64,
}

/// 냉방 부하 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct CoolingLoadResult {
    /// 체적 유량 [m³/s]
    pub flow_m3_per_s: f64,
    /// 초기 상태 습공기 밀도 [kg/m³]
    pub density_kg_per_m3: f64,
    /// 질량 유량 [kg/s]
    pub mass_flow_kg_per_s: f64,
    /// 초기 상태 습도비 [kg/kg]
    pub initial_hum_ratio: f64,
    /// 목표 상태 습도비 [kg/kg]
    pub target_hum_ratio: f64,
    /// 초기 엔탈피 h1 [J/kg]
    pub initial_enthalpy_j_per_kg: f64,
    /// 목표 엔탈피 h2 [J/kg]
    pub target_enthalpy_j_per_kg: f64,
    /// 냉방 부하 [kW]
    pub load_kw: f64,
    /// 냉방 부하 [BTU/hr], 정수 반올림
    pub load_btu_per_h: i64,
    /// 제습량 [kg/h]
    pub water_removal_kg_per_h: f64,
    /// 계산 순서대로 기록한 중간값
    pub diagnostics: Vec<Diagnostic>,
}

impl CoolingLoadResult {
    /// h1 - h2 [J/kg]
    pub fn enthalpy_difference(&self) -> f64 {
        self.initial_enthalpy_j_per_kg - self.target_enthalpy_j_per_kg
    }

    /// 반올림된 BTU/hr 값을 기준으로 환산한 냉동톤.
    pub fn tons(&self) -> f64 {
        convert_power(
            self.load_btu_per_h as f64,
            PowerUnit::BtuPerHour,
            PowerUnit::TonOfRefrigeration,
        )
    }
}

/// 풍량과 두 습공기 상태로 냉방 부하를 계산한다.
///
/// 표준 대기압(101,325 Pa)에서 초기 상태의 밀도로 질량 유량을 구하고,
/// 엔탈피 차에 곱해 부하를 얻는다. 목표 상태가 더 덥거나 습하면 음수가 나오며 그대로 반환한다.
#[tracing::instrument(name = "cooling_load", level = "debug", skip(initial, target))]
pub fn compute_cooling_load(
    flow_cfm: f64,
    initial: &AirState,
    target: &AirState,
) -> Result<CoolingLoadResult, PsychroError> {
    if !flow_cfm.is_finite() {
        return Err(PsychroError::NotFinite("flow"));
    }
    let p = STANDARD_PRESSURE_PA;
    let flow_m3_per_s = convert_volumetric_flow(
        flow_cfm,
        VolumetricFlowUnit::CubicFootPerMinute,
        VolumetricFlowUnit::CubicMeterPerSecond,
    );

    let w1 = psychro::hum_ratio_from_rel_hum(initial.temperature_c, initial.relative_humidity, p)?;
    let density = psychro::moist_air_density(initial.temperature_c, w1, p)?;
    let mass_flow = flow_m3_per_s * density;

    let h1 = psychro::moist_air_enthalpy(initial.temperature_c, w1)?;
    let w2 = psychro::hum_ratio_from_rel_hum(target.temperature_c, target.relative_humidity, p)?;
    let h2 = psychro::moist_air_enthalpy(target.temperature_c, w2)?;

    // 질량유량[kg/s] × 엔탈피 차[J/kg] = W, 1000으로 나눠 kW
    let load_kw = mass_flow * (h1 - h2) / 1000.0;
    let load_btu_exact = convert_power(load_kw, PowerUnit::Kilowatt, PowerUnit::BtuPerHour);
    // 정수 변환 전에 막지 않으면 NaN은 0, 무한대는 i64::MAX가 된다
    if !load_btu_exact.is_finite() {
        return Err(PsychroError::NotFinite("cooling load"));
    }
    let load_btu_per_h = load_btu_exact.round_ties_even() as i64;

    let water_removal = mass_flow * (w1 - w2) * 3600.0;

    let diagnostics = vec![
        Diagnostic {
            kind: DiagnosticKind::VolumetricFlow,
            value: flow_m3_per_s,
        },
        Diagnostic {
            kind: DiagnosticKind::AirDensity,
            value: density,
        },
        Diagnostic {
            kind: DiagnosticKind::MassFlow,
            value: mass_flow,
        },
        Diagnostic {
            kind: DiagnosticKind::InitialEnthalpy,
            value: h1,
        },
        Diagnostic {
            kind: DiagnosticKind::FinalEnthalpy,
            value: h2,
        },
        Diagnostic {
            kind: DiagnosticKind::EnthalpyDifference,
            value: h1 - h2,
        },
        Diagnostic {
            kind: DiagnosticKind::CoolingLoadKw,
            value: load_kw,
        },
        Diagnostic {
            kind: DiagnosticKind::WaterRemovalRate,
            value: water_removal,
        },
    ];

    tracing::debug!(load_kw, load_btu_per_h, "cooling load computed");

    Ok(CoolingLoadResult {
        flow_m3_per_s,
        density_kg_per_m3: density,
        mass_flow_kg_per_s: mass_flow,
        initial_hum_ratio: w1,
        target_hum_ratio: w2,
        initial_enthalpy_j_per_kg: h1,
        target_enthalpy_j_per_kg: h2,
        load_kw,
        load_btu_per_h,
        water_removal_kg_per_h: water_removal,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::psychro::{set_unit_system, UnitSystem};

    #[test]
    fn diagnostics_follow_calculation_order() {
        set_unit_system(UnitSystem::Si).expect("si");
        let res = compute_cooling_load(
            160.0,
            &AirState::new(43.0, 0.85),
            &AirState::new(25.0, 0.55),
        )
        .expect("load");
        let kinds: Vec<_> = res.diagnostics.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticKind::VolumetricFlow,
                DiagnosticKind::AirDensity,
                DiagnosticKind::MassFlow,
                DiagnosticKind::InitialEnthalpy,
                DiagnosticKind::FinalEnthalpy,
                DiagnosticKind::EnthalpyDifference,
                DiagnosticKind::CoolingLoadKw,
                DiagnosticKind::WaterRemovalRate,
            ]
        );
        assert_eq!(res.diagnostics[5].value, res.enthalpy_difference());
    }

    #[test]
    fn tons_come_from_rounded_btu() {
        set_unit_system(UnitSystem::Si).expect("si");
        let res = compute_cooling_load(
            160.0,
            &AirState::new(43.0, 0.85),
            &AirState::new(25.0, 0.55),
        )
        .expect("load");
        assert_eq!(res.tons(), res.load_btu_per_h as f64 / 12_000.0);
    }

    #[test]
    fn non_finite_flow_is_rejected() {
        set_unit_system(UnitSystem::Si).expect("si");
        let initial = AirState::new(43.0, 0.85);
        let target = AirState::new(25.0, 0.55);
        for flow in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                compute_cooling_load(flow, &initial, &target),
                Err(PsychroError::NotFinite("flow"))
            );
        }
        // 같은 상태여도 무한대 풍량은 0 × ∞ = NaN이 되므로 거부한다
        assert_eq!(
            compute_cooling_load(f64::INFINITY, &initial, &initial),
            Err(PsychroError::NotFinite("flow"))
        );
    }

    #[test]
    fn overflowing_load_is_rejected() {
        set_unit_system(UnitSystem::Si).expect("si");
        let err = compute_cooling_load(
            f64::MAX,
            &AirState::new(43.0, 0.85),
            &AirState::new(25.0, 0.55),
        )
        .unwrap_err();
        assert_eq!(err, PsychroError::NotFinite("cooling load"));
    }

    #[test]
    fn invalid_target_state_fails_whole_calculation() {
        set_unit_system(UnitSystem::Si).expect("si");
        let err = compute_cooling_load(
            160.0,
            &AirState::new(43.0, 0.85),
            &AirState::new(25.0, 1.5),
        )
        .unwrap_err();
        assert_eq!(err, PsychroError::RelativeHumidityOutOfRange(1.5));
    }
}
