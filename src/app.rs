use std::io::{BufRead, Write};

use thiserror::Error;

use crate::air::{self, AirflowRequirement, CoolingLoadResult, InputError};
use crate::config::{Config, ConfigError};
use crate::i18n::{keys, Translator};
use crate::psychro::PsychroError;
use crate::ui_cli::{self, CalculationInput, InputOverrides, Prompter};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 숫자로 해석할 수 없는 입력
    #[error("'{field}' 입력 '{text}'은(는) 숫자가 아닙니다")]
    NotANumber { field: String, text: String },
    /// 범위를 벗어난 입력
    #[error("입력 오류: {0}")]
    InvalidInput(#[from] InputError),
    /// 습공기 물성 계산 오류
    #[error("습공기 계산 오류: {0}")]
    Psychrometric(#[from] PsychroError),
}

/// 한 번의 실행에 대한 옵션.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// 계산 중간값까지 출력
    pub verbose: bool,
    /// false면 묻지 않고 기본값/지정값만 사용
    pub interactive: bool,
    pub overrides: InputOverrides,
}

/// 실행 결과 요약.
#[derive(Debug, Clone)]
pub struct Report {
    pub input: CalculationInput,
    pub airflow: AirflowRequirement,
    pub result: CoolingLoadResult,
}

/// 입력 수집 → 풍량 산정 → 냉방 부하 계산 → 결과 출력을 한 번 수행한다.
///
/// 습공기 단위계는 호출 전에 [`crate::psychro::set_unit_system`]으로 지정되어 있어야 한다.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    tr: &Translator,
    options: &RunOptions,
    reader: R,
    mut writer: W,
) -> Result<Report, AppError> {
    if options.interactive {
        writeln!(writer, "{}", tr.t(keys::APP_TITLE))?;
    }
    let input = {
        let mut prompter = Prompter::new(reader, &mut writer, options.interactive);
        ui_cli::collect_inputs(&mut prompter, tr, &config.defaults, &options.overrides)?
    };

    let airflow = input.airflow()?;
    let flow_cfm = airflow.required_flow_cfm();
    tracing::debug!(
        volume_ft3 = airflow.volume_ft3,
        ach = airflow.air_changes_per_hour,
        flow_cfm,
        "airflow sized"
    );

    let result = air::compute_cooling_load(flow_cfm, &input.initial, &input.target)?;

    if options.verbose {
        ui_cli::render_diagnostics(&mut writer, tr, &result)?;
    }
    ui_cli::render_results(&mut writer, tr, &airflow, &result)?;
    writer.flush()?;

    tracing::info!(
        load_btu_per_h = result.load_btu_per_h,
        tons = result.tons(),
        "cooling load calculated"
    );

    Ok(Report {
        input,
        airflow,
        result,
    })
}
