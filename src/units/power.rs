/// 1 kW에 해당하는 BTU/hr
pub const BTU_PER_HOUR_PER_KW: f64 = 3412.142;
/// 냉동톤 1 RT에 해당하는 BTU/hr
pub const BTU_PER_HOUR_PER_TON: f64 = 12_000.0;

/// 열량(동력) 단위. 내부 기준은 kW이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    BtuPerHour,
    TonOfRefrigeration,
}

fn to_kilowatt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value / 1000.0,
        PowerUnit::Kilowatt => value,
        PowerUnit::BtuPerHour => value / BTU_PER_HOUR_PER_KW,
        PowerUnit::TonOfRefrigeration => value * BTU_PER_HOUR_PER_TON / BTU_PER_HOUR_PER_KW,
    }
}

fn from_kilowatt(value_kw: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value_kw * 1000.0,
        PowerUnit::Kilowatt => value_kw,
        PowerUnit::BtuPerHour => value_kw * BTU_PER_HOUR_PER_KW,
        PowerUnit::TonOfRefrigeration => value_kw * BTU_PER_HOUR_PER_KW / BTU_PER_HOUR_PER_TON,
    }
}

/// 열량을 변환한다. BTU/hr와 냉동톤 사이는 kW를 거치지 않고 바로 나눈다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    match (from, to) {
        _ if from == to => value,
        (PowerUnit::BtuPerHour, PowerUnit::TonOfRefrigeration) => value / BTU_PER_HOUR_PER_TON,
        (PowerUnit::TonOfRefrigeration, PowerUnit::BtuPerHour) => value * BTU_PER_HOUR_PER_TON,
        _ => from_kilowatt(to_kilowatt(value, from), to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilowatt_to_btu_per_hour() {
        let btu = convert_power(1.0, PowerUnit::Kilowatt, PowerUnit::BtuPerHour);
        assert_eq!(btu, 3412.142);
    }

    #[test]
    fn btu_per_hour_to_tons() {
        let tons = convert_power(32_444.0, PowerUnit::BtuPerHour, PowerUnit::TonOfRefrigeration);
        assert_eq!(tons, 32_444.0 / 12_000.0);
    }

    #[test]
    fn watt_to_tons_through_kilowatt() {
        let tons = convert_power(3516.85, PowerUnit::Watt, PowerUnit::TonOfRefrigeration);
        assert!((tons - 1.0).abs() < 1e-4, "tons={tons}");
    }
}
