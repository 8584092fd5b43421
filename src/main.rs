use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hvac_load_calculator::app::{self, AppError, RunOptions};
use hvac_load_calculator::config::{self, DEFAULT_CONFIG_PATH};
use hvac_load_calculator::i18n::{self, keys, Translator};
use hvac_load_calculator::psychro::{self, UnitSystem};
use hvac_load_calculator::ui_cli::InputOverrides;
use tracing_subscriber::EnvFilter;

/// 실 체적, 환기횟수, 습공기 상태로 냉방 부하(BTU/hr, 냉동톤)를 계산한다.
#[derive(Debug, Parser)]
#[command(name = "hvac_load_calculator", version)]
struct Cli {
    /// 언어 (auto/ko/en)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 계산 중간값과 디버그 로그 출력
    #[arg(short, long)]
    verbose: bool,
    /// 묻지 않고 기본값과 지정값만 사용
    #[arg(long)]
    batch: bool,
    /// 설정 파일 경로
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 언어팩(<code>.toml) 디렉터리
    #[arg(long)]
    locales: Option<PathBuf>,
    /// 실 길이 [ft]
    #[arg(long, value_name = "FT")]
    length: Option<f64>,
    /// 실 폭 [ft]
    #[arg(long, value_name = "FT")]
    width: Option<f64>,
    /// 실 높이 [ft]
    #[arg(long, value_name = "FT")]
    height: Option<f64>,
    /// 시간당 환기횟수
    #[arg(long)]
    ach: Option<f64>,
    /// 초기 건구온도 [°C]
    #[arg(long, value_name = "C", allow_negative_numbers = true)]
    initial_temp: Option<f64>,
    /// 초기 상대습도 [0~1]
    #[arg(long, value_name = "RH")]
    initial_rh: Option<f64>,
    /// 목표 건구온도 [°C]
    #[arg(long, value_name = "C", allow_negative_numbers = true)]
    target_temp: Option<f64>,
    /// 목표 상대습도 [0~1]
    #[arg(long, value_name = "RH")]
    target_rh: Option<f64>,
}

impl Cli {
    fn overrides(&self) -> InputOverrides {
        InputOverrides {
            length_ft: self.length,
            width_ft: self.width,
            height_ft: self.height,
            air_changes_per_hour: self.ach,
            initial_temperature_c: self.initial_temp,
            initial_relative_humidity: self.initial_rh,
            target_temperature_c: self.target_temp,
            target_relative_humidity: self.target_rh,
        }
    }
}

/// 프로그램의 엔트리 포인트. 로그를 설정한 뒤 계산을 한 번 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut tr = Translator::new(&i18n::resolve_language(&cli.lang, None));
    if let Err(err) = try_run(&cli, &mut tr) {
        tracing::error!(error = ?err, "cooling load calculation failed");
        eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn try_run(cli: &Cli, tr: &mut Translator) -> Result<(), AppError> {
    psychro::set_unit_system(UnitSystem::Si)?;
    let cfg = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    *tr = Translator::new_with_pack(&lang, cli.locales.as_deref());

    let options = RunOptions {
        verbose: cli.verbose,
        interactive: !cli.batch,
        overrides: cli.overrides(),
    };
    app::run(&cfg, tr, &options, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

/// 로그는 stderr로 보낸다. RUST_LOG가 있으면 그 설정을 따른다.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}
