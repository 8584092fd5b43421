//! 습공기(psychrometric) 물성 계산 모듈 모음.
//! ASHRAE Handbook Fundamentals(2017) 1장의 식을 SI 단위로 구현한다.
//! 사용 전에 [`set_unit_system`]으로 단위계를 한 번 지정해야 한다.

pub mod error;
pub mod properties;
pub mod unit_system;

pub use error::PsychroError;
pub use properties::*;
pub use unit_system::{set_unit_system, unit_system, UnitSystem};

/// 표준 대기압 [Pa]
pub const STANDARD_PRESSURE_PA: f64 = 101_325.0;
