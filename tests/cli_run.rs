//! 입력 수집부터 결과 출력까지 한 번의 실행을 검증한다.
use std::io::Cursor;

use hvac_load_calculator::air::InputError;
use hvac_load_calculator::app::{self, AppError, RunOptions};
use hvac_load_calculator::config::Config;
use hvac_load_calculator::i18n::Translator;
use hvac_load_calculator::psychro::{set_unit_system, PsychroError, UnitSystem};
use hvac_load_calculator::ui_cli::InputOverrides;

fn run_batch(
    verbose: bool,
    overrides: InputOverrides,
    lang: &str,
) -> (Result<app::Report, AppError>, String) {
    set_unit_system(UnitSystem::Si).expect("si unit system");
    let options = RunOptions {
        verbose,
        interactive: false,
        overrides,
    };
    let mut out = Vec::new();
    let res = app::run(
        &Config::default(),
        &Translator::new(lang),
        &options,
        Cursor::new(""),
        &mut out,
    );
    (res, String::from_utf8(out).expect("utf8"))
}

#[test]
fn batch_run_prints_default_results() {
    let (res, text) = run_batch(false, InputOverrides::default(), "en");
    let report = res.expect("run");
    assert_eq!(report.result.load_btu_per_h, 32_444);
    assert!(text.contains("Room volume: 2,400 ft³"), "{text}");
    assert!(text.contains("Air changes per hour: 4.0\n"), "{text}");
    assert!(text.contains("Required CFM: 160.0"), "{text}");
    assert!(text.contains("Total Cooling Load: 32,444 BTU/hr"), "{text}");
    assert!(text.contains("Cooling Tons: 2.7 tons"), "{text}");
    assert!(!text.contains("Air density"), "{text}");
}

#[test]
fn verbose_run_prints_diagnostics_first() {
    let (res, text) = run_batch(true, InputOverrides::default(), "en");
    res.expect("run");
    for line in [
        "Volumetric flow rate: 0.075512 m³/s",
        "Air density: 1.09 kg/m³",
        "Mass flow rate: 0.0820 kg/s",
        "Initial enthalpy: 168839.70 J/kg",
        "Final enthalpy: 52883.22 J/kg",
        "Enthalpy difference: 115956.48 J/kg",
        "Cooling load: 9.51 kW",
        "Water removal rate: 11.150 kg/h",
    ] {
        assert!(text.contains(line), "missing {line:?} in {text}");
    }
    let details = text.find("Air density").expect("details");
    let summary = text.find("Total Cooling Load").expect("summary");
    assert!(details < summary);
}

#[test]
fn korean_output() {
    let (res, text) = run_batch(false, InputOverrides::default(), "ko");
    res.expect("run");
    assert!(text.contains("총 냉방 부하: 32,444 BTU/hr"), "{text}");
    assert!(text.contains("냉동톤: 2.7 RT"), "{text}");
}

#[test]
fn interactive_run_reads_answers() {
    set_unit_system(UnitSystem::Si).expect("si unit system");
    let options = RunOptions {
        verbose: false,
        interactive: true,
        overrides: InputOverrides::default(),
    };
    let answers = "30\n20\n10\n6\n\n\n\n\n";
    let mut out = Vec::new();
    let report = app::run(
        &Config::default(),
        &Translator::new("en"),
        &options,
        Cursor::new(answers),
        &mut out,
    )
    .expect("run");
    assert_eq!(report.airflow.volume_ft3, 6000.0);
    assert_eq!(report.airflow.required_flow_cfm(), 600.0);
    let text = String::from_utf8(out).expect("utf8");
    assert!(text.contains("Room volume: 6,000 ft³"), "{text}");
    assert!(text.contains("Required CFM: 600.0"), "{text}");
}

#[test]
fn invalid_humidity_aborts_without_results() {
    let overrides = InputOverrides {
        target_relative_humidity: Some(1.5),
        ..InputOverrides::default()
    };
    let (res, text) = run_batch(false, overrides, "en");
    let err = res.unwrap_err();
    assert!(
        matches!(
            err,
            AppError::Psychrometric(PsychroError::RelativeHumidityOutOfRange(_))
        ),
        "{err:?}"
    );
    assert!(!text.contains("Total Cooling Load"), "{text}");
}

#[test]
fn oversized_room_aborts_without_results() {
    let overrides = InputOverrides {
        length_ft: Some(1e200),
        width_ft: Some(1e200),
        ..InputOverrides::default()
    };
    let (res, text) = run_batch(false, overrides, "en");
    let err = res.unwrap_err();
    assert!(
        matches!(err, AppError::InvalidInput(InputError::InvalidVolume(_))),
        "{err:?}"
    );
    assert!(!text.contains("Room volume"), "{text}");
}
