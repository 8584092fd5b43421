//! 포화수증기압, 습도비, 비체적, 밀도, 엔탈피 계산.
//! 입력: 건구온도(°C), 상대습도(0~1), 압력(Pa), 습도비(kg수증기/kg건공기)

use super::error::PsychroError;
use super::unit_system::require_si;

/// 건공기 기체상수 [J/kg·K]
pub const R_DA: f64 = 287.042;
/// 물의 삼중점 온도 [°C]
pub const TRIPLE_POINT_WATER_C: f64 = 0.01;
/// 습도비 하한 [kg/kg]. 완전 건조 공기에서도 0 대신 이 값을 쓴다.
pub const MIN_HUM_RATIO: f64 = 1e-7;
/// 수증기/건공기 분자량 비
const MOLAR_MASS_RATIO: f64 = 0.621945;

const MIN_TEMPERATURE_C: f64 = -100.0;
const MAX_TEMPERATURE_C: f64 = 200.0;

fn to_kelvin(t_c: f64) -> f64 {
    t_c + 273.15
}

fn ensure_finite(value: f64, name: &'static str) -> Result<(), PsychroError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PsychroError::NotFinite(name))
    }
}

fn ensure_hum_ratio(w: f64) -> Result<f64, PsychroError> {
    ensure_finite(w, "humidity ratio")?;
    if w < 0.0 {
        return Err(PsychroError::NegativeHumidityRatio(w));
    }
    Ok(w.max(MIN_HUM_RATIO))
}

/// 포화수증기압 [Pa]을 계산한다.
///
/// Hyland-Wexler 식(ASHRAE 2017 1장 식 5, 6). 삼중점 이하는 얼음, 그 이상은 물 기준.
pub fn sat_vap_pres(t_c: f64) -> Result<f64, PsychroError> {
    require_si()?;
    ensure_finite(t_c, "temperature")?;
    if !(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C).contains(&t_c) {
        return Err(PsychroError::TemperatureOutOfRange(t_c));
    }

    let t = to_kelvin(t_c);
    let ln_pws = if t_c <= TRIPLE_POINT_WATER_C {
        -5.674_535_9e3 / t + 6.392_524_7 - 9.677_843e-3 * t + 6.221_570_1e-7 * t.powi(2)
            + 2.074_782_5e-9 * t.powi(3)
            - 9.484_024e-13 * t.powi(4)
            + 4.163_501_9 * t.ln()
    } else {
        -5.800_220_6e3 / t + 1.391_499_3 - 4.864_023_9e-2 * t + 4.176_476_8e-5 * t.powi(2)
            - 1.445_209_3e-8 * t.powi(3)
            + 6.545_967_3 * t.ln()
    };
    Ok(ln_pws.exp())
}

/// 상대습도로부터 수증기 분압 [Pa]을 계산한다.
pub fn vap_pres_from_rel_hum(t_c: f64, rel_hum: f64) -> Result<f64, PsychroError> {
    ensure_finite(rel_hum, "relative humidity")?;
    if !(0.0..=1.0).contains(&rel_hum) {
        return Err(PsychroError::RelativeHumidityOutOfRange(rel_hum));
    }
    Ok(rel_hum * sat_vap_pres(t_c)?)
}

/// 수증기 분압과 전압으로 습도비 [kg/kg]를 계산한다. W = 0.621945 * Pv / (P - Pv)
pub fn hum_ratio_from_vap_pres(vap_pres_pa: f64, pressure_pa: f64) -> Result<f64, PsychroError> {
    require_si()?;
    ensure_finite(vap_pres_pa, "vapor pressure")?;
    ensure_finite(pressure_pa, "pressure")?;
    if vap_pres_pa < 0.0 {
        return Err(PsychroError::NegativeVaporPressure(vap_pres_pa));
    }
    if vap_pres_pa >= pressure_pa {
        return Err(PsychroError::VaporPressureExceedsTotal {
            vapor_pressure_pa: vap_pres_pa,
            pressure_pa,
        });
    }
    let w = MOLAR_MASS_RATIO * vap_pres_pa / (pressure_pa - vap_pres_pa);
    Ok(w.max(MIN_HUM_RATIO))
}

/// 건구온도, 상대습도, 압력으로 습도비 [kg/kg]를 계산한다.
pub fn hum_ratio_from_rel_hum(
    t_c: f64,
    rel_hum: f64,
    pressure_pa: f64,
) -> Result<f64, PsychroError> {
    let pv = vap_pres_from_rel_hum(t_c, rel_hum)?;
    hum_ratio_from_vap_pres(pv, pressure_pa)
}

/// 습공기 비체적 [m³/kg건공기].
pub fn moist_air_volume(t_c: f64, hum_ratio: f64, pressure_pa: f64) -> Result<f64, PsychroError> {
    require_si()?;
    ensure_finite(t_c, "temperature")?;
    ensure_finite(pressure_pa, "pressure")?;
    let w = ensure_hum_ratio(hum_ratio)?;
    Ok(R_DA * to_kelvin(t_c) * (1.0 + 1.607_858 * w) / pressure_pa)
}

/// 습공기 밀도 [kg/m³]. ρ = (1 + W) / v
pub fn moist_air_density(t_c: f64, hum_ratio: f64, pressure_pa: f64) -> Result<f64, PsychroError> {
    let w = ensure_hum_ratio(hum_ratio)?;
    Ok((1.0 + w) / moist_air_volume(t_c, w, pressure_pa)?)
}

/// 습공기 엔탈피 [J/kg건공기]. h = 1.006 T + W (2501 + 1.86 T) (kJ/kg 기준 후 J로 환산)
pub fn moist_air_enthalpy(t_c: f64, hum_ratio: f64) -> Result<f64, PsychroError> {
    require_si()?;
    ensure_finite(t_c, "temperature")?;
    let w = ensure_hum_ratio(hum_ratio)?;
    Ok((1.006 * t_c + w * (2501.0 + 1.86 * t_c)) * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::psychro::{set_unit_system, UnitSystem, STANDARD_PRESSURE_PA};

    fn si() {
        set_unit_system(UnitSystem::Si).expect("si unit system");
    }

    #[test]
    fn rejects_temperature_outside_valid_range() {
        si();
        assert_eq!(
            sat_vap_pres(-100.5),
            Err(PsychroError::TemperatureOutOfRange(-100.5))
        );
        assert_eq!(
            sat_vap_pres(200.5),
            Err(PsychroError::TemperatureOutOfRange(200.5))
        );
        assert!(sat_vap_pres(-100.0).is_ok());
        assert!(sat_vap_pres(200.0).is_ok());
    }

    #[test]
    fn rejects_relative_humidity_outside_unit_interval() {
        si();
        assert_eq!(
            hum_ratio_from_rel_hum(25.0, 1.2, STANDARD_PRESSURE_PA),
            Err(PsychroError::RelativeHumidityOutOfRange(1.2))
        );
        assert_eq!(
            hum_ratio_from_rel_hum(25.0, -0.1, STANDARD_PRESSURE_PA),
            Err(PsychroError::RelativeHumidityOutOfRange(-0.1))
        );
    }

    #[test]
    fn dry_air_is_bounded_to_minimum_ratio() {
        si();
        let w = hum_ratio_from_rel_hum(25.0, 0.0, STANDARD_PRESSURE_PA).expect("dry air");
        assert_eq!(w, MIN_HUM_RATIO);
    }

    #[test]
    fn vapor_pressure_above_total_is_rejected() {
        si();
        // 120 °C 포화 수증기압은 대기압보다 크다
        let err = hum_ratio_from_rel_hum(120.0, 1.0, STANDARD_PRESSURE_PA).unwrap_err();
        assert!(matches!(err, PsychroError::VaporPressureExceedsTotal { .. }));
    }

    #[test]
    fn negative_humidity_ratio_is_rejected() {
        si();
        assert_eq!(
            moist_air_enthalpy(25.0, -0.01),
            Err(PsychroError::NegativeHumidityRatio(-0.01))
        );
        assert_eq!(
            moist_air_density(25.0, -0.01, STANDARD_PRESSURE_PA),
            Err(PsychroError::NegativeHumidityRatio(-0.01))
        );
    }

    #[test]
    fn nan_inputs_are_rejected() {
        si();
        assert_eq!(
            sat_vap_pres(f64::NAN),
            Err(PsychroError::NotFinite("temperature"))
        );
        assert_eq!(
            hum_ratio_from_rel_hum(25.0, f64::NAN, STANDARD_PRESSURE_PA),
            Err(PsychroError::NotFinite("relative humidity"))
        );
    }

    #[test]
    fn ice_and_liquid_branches_meet_at_triple_point() {
        si();
        let below = sat_vap_pres(TRIPLE_POINT_WATER_C).expect("ice");
        let above = sat_vap_pres(TRIPLE_POINT_WATER_C + 1e-9).expect("liquid");
        assert!((below - above).abs() / below < 1e-3, "{below} vs {above}");
    }
}
