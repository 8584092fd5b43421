//! 단위 정의 및 변환 모듈 모음.

pub mod power;
pub mod volumetric_flow;

pub use power::{convert_power, PowerUnit, BTU_PER_HOUR_PER_KW, BTU_PER_HOUR_PER_TON};
pub use volumetric_flow::{convert_volumetric_flow, VolumetricFlowUnit, M3_PER_S_PER_CFM};
