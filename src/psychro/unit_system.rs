use std::sync::OnceLock;

use super::error::PsychroError;

/// 습공기 계산 단위계.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    /// SI (°C, Pa, J/kg)
    Si,
    /// 영국식 (°F, psi, Btu/lb). 선택은 가능하지만 공식은 제공하지 않는다.
    Ip,
}

static UNIT_SYSTEM: OnceLock<UnitSystem> = OnceLock::new();

/// 프로세스 전역 단위계를 지정한다.
///
/// 처음 호출한 값이 고정된다. 같은 값으로 다시 호출하면 아무 일도 하지 않고,
/// 다른 값으로 호출하면 [`PsychroError::UnitSystemConflict`]를 돌려준다.
pub fn set_unit_system(system: UnitSystem) -> Result<UnitSystem, PsychroError> {
    let current = *UNIT_SYSTEM.get_or_init(|| {
        tracing::debug!(?system, "psychrometric unit system initialized");
        system
    });
    if current == system {
        Ok(current)
    } else {
        Err(PsychroError::UnitSystemConflict {
            current,
            requested: system,
        })
    }
}

/// 현재 지정된 단위계를 반환한다. 지정 전이면 None.
pub fn unit_system() -> Option<UnitSystem> {
    UNIT_SYSTEM.get().copied()
}

pub(crate) fn require_si() -> Result<(), PsychroError> {
    check_si(unit_system())
}

fn check_si(system: Option<UnitSystem>) -> Result<(), PsychroError> {
    match system {
        Some(UnitSystem::Si) => Ok(()),
        Some(other) => Err(PsychroError::UnsupportedUnitSystem(other)),
        None => Err(PsychroError::UnitSystemNotSet),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_si_requires_initialization() {
        assert_eq!(check_si(None), Err(PsychroError::UnitSystemNotSet));
        assert_eq!(
            check_si(Some(UnitSystem::Ip)),
            Err(PsychroError::UnsupportedUnitSystem(UnitSystem::Ip))
        );
        assert!(check_si(Some(UnitSystem::Si)).is_ok());
    }

    #[test]
    fn repeated_si_selection_is_idempotent() {
        assert_eq!(set_unit_system(UnitSystem::Si), Ok(UnitSystem::Si));
        assert_eq!(set_unit_system(UnitSystem::Si), Ok(UnitSystem::Si));
        assert_eq!(unit_system(), Some(UnitSystem::Si));
    }

    #[test]
    fn switching_unit_system_is_rejected() {
        set_unit_system(UnitSystem::Si).expect("si");
        let err = set_unit_system(UnitSystem::Ip).unwrap_err();
        assert_eq!(
            err,
            PsychroError::UnitSystemConflict {
                current: UnitSystem::Si,
                requested: UnitSystem::Ip,
            }
        );
    }
}
