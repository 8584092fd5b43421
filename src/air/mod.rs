//! 공기 측 계산 모듈 모음.
//! 실 체적과 환기횟수로 풍량을 구하고, 두 습공기 상태로 냉방 부하를 계산한다.

pub mod cooling_load;
pub mod humid_air;
pub mod room;

pub use cooling_load::*;
pub use humid_air::AirState;
pub use room::*;
