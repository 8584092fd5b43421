use std::io::{BufRead, Write};

use crate::air::{AirState, AirflowRequirement, CoolingLoadResult, InputError, RoomGeometry};
use crate::app::AppError;
use crate::config::InputDefaults;
use crate::i18n::{self, keys, Translator};

/// 명령줄에서 미리 지정한 입력값. 지정된 값은 묻지 않는다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputOverrides {
    pub length_ft: Option<f64>,
    pub width_ft: Option<f64>,
    pub height_ft: Option<f64>,
    pub air_changes_per_hour: Option<f64>,
    pub initial_temperature_c: Option<f64>,
    pub initial_relative_humidity: Option<f64>,
    pub target_temperature_c: Option<f64>,
    pub target_relative_humidity: Option<f64>,
}

/// 계산 한 번에 필요한 입력 묶음.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationInput {
    pub room: RoomGeometry,
    pub air_changes_per_hour: f64,
    pub initial: AirState,
    pub target: AirState,
}

impl CalculationInput {
    pub fn airflow(&self) -> Result<AirflowRequirement, InputError> {
        AirflowRequirement::for_room(&self.room, self.air_changes_per_hour)
    }
}

/// 프롬프트 입출력을 담당한다. 테스트를 위해 입출력 스트림을 주입받는다.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    interactive: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// `interactive`가 false면 아무것도 묻지 않고 기본값을 사용한다.
    pub fn new(reader: R, writer: W, interactive: bool) -> Self {
        Self {
            reader,
            writer,
            interactive,
        }
    }

    fn heading(&mut self, text: &str) -> Result<(), AppError> {
        if self.interactive {
            writeln!(self.writer, "{text}")?;
        }
        Ok(())
    }

    /// "라벨 [기본값]: " 형식으로 묻는다. 빈 입력이면 기본값, 숫자가 아니면 오류.
    fn read_f64_or_default(
        &mut self,
        label: &str,
        preset: Option<f64>,
        default: f64,
    ) -> Result<f64, AppError> {
        if let Some(v) = preset {
            return Ok(v);
        }
        if !self.interactive {
            return Ok(default);
        }
        write!(self.writer, "{label} [{default}]: ")?;
        self.writer.flush()?;
        let mut buf = String::new();
        self.reader.read_line(&mut buf)?;
        let text = buf.trim();
        if text.is_empty() {
            return Ok(default);
        }
        text.parse::<f64>().map_err(|_| AppError::NotANumber {
            field: label.to_string(),
            text: text.to_string(),
        })
    }
}

/// 실 치수, 환기횟수, 두 습공기 상태를 순서대로 입력받는다.
pub fn collect_inputs<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    tr: &Translator,
    defaults: &InputDefaults,
    overrides: &InputOverrides,
) -> Result<CalculationInput, AppError> {
    prompter.heading(&tr.t(keys::ROOM_HEADING))?;
    let length = prompter.read_f64_or_default(
        &tr.t(keys::PROMPT_LENGTH),
        overrides.length_ft,
        defaults.length_ft,
    )?;
    let width = prompter.read_f64_or_default(
        &tr.t(keys::PROMPT_WIDTH),
        overrides.width_ft,
        defaults.width_ft,
    )?;
    let height = prompter.read_f64_or_default(
        &tr.t(keys::PROMPT_HEIGHT),
        overrides.height_ft,
        defaults.height_ft,
    )?;
    let ach = prompter.read_f64_or_default(
        &tr.t(keys::PROMPT_ACH),
        overrides.air_changes_per_hour,
        defaults.air_changes_per_hour,
    )?;
    let room = RoomGeometry::new(length, width, height)?;

    prompter.heading(&tr.t(keys::STATE_HEADING))?;
    let t1 = prompter.read_f64_or_default(
        &tr.t(keys::PROMPT_INITIAL_TEMPERATURE),
        overrides.initial_temperature_c,
        defaults.initial_temperature_c,
    )?;
    let rh1 = prompter.read_f64_or_default(
        &tr.t(keys::PROMPT_INITIAL_RH),
        overrides.initial_relative_humidity,
        defaults.initial_relative_humidity,
    )?;
    let t2 = prompter.read_f64_or_default(
        &tr.t(keys::PROMPT_TARGET_TEMPERATURE),
        overrides.target_temperature_c,
        defaults.target_temperature_c,
    )?;
    let rh2 = prompter.read_f64_or_default(
        &tr.t(keys::PROMPT_TARGET_RH),
        overrides.target_relative_humidity,
        defaults.target_relative_humidity,
    )?;

    Ok(CalculationInput {
        room,
        air_changes_per_hour: ach,
        initial: AirState::new(t1, rh1),
        target: AirState::new(t2, rh2),
    })
}

/// 계산 중간값을 출력한다.
pub fn render_diagnostics<W: Write>(
    out: &mut W,
    tr: &Translator,
    result: &CoolingLoadResult,
) -> std::io::Result<()> {
    writeln!(out, "{}", tr.t(keys::DIAG_HEADING))?;
    for d in &result.diagnostics {
        writeln!(
            out,
            "{}: {:.*} {}",
            tr.t(i18n::diagnostic_key(d.kind)),
            d.kind.precision(),
            d.value,
            d.kind.unit()
        )?;
    }
    Ok(())
}

/// 최종 결과(실 체적, 환기횟수, 풍량, 냉방 부하, 냉동톤)를 출력한다.
pub fn render_results<W: Write>(
    out: &mut W,
    tr: &Translator,
    airflow: &AirflowRequirement,
    result: &CoolingLoadResult,
) -> std::io::Result<()> {
    let volume = airflow.volume_ft3.round_ties_even() as i64;
    writeln!(out)?;
    writeln!(
        out,
        "{}: {} ft³",
        tr.t(keys::RESULT_ROOM_VOLUME),
        group_thousands(volume)
    )?;
    writeln!(
        out,
        "{}: {:?}",
        tr.t(keys::RESULT_ACH),
        airflow.air_changes_per_hour
    )?;
    writeln!(
        out,
        "{}: {:.1}",
        tr.t(keys::RESULT_REQUIRED_CFM),
        airflow.required_flow_cfm()
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "{}: {} BTU/hr",
        tr.t(keys::RESULT_TOTAL_LOAD),
        group_thousands(result.load_btu_per_h)
    )?;
    writeln!(
        out,
        "{}: {:.1} {}",
        tr.t(keys::RESULT_TONS),
        result.tons(),
        tr.t(keys::UNIT_TONS)
    )?;
    Ok(())
}

/// 세 자리마다 쉼표를 넣는다. (예: 32444 → "32,444")
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
