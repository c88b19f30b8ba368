use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use phish_core::model::Theme;
use services::{AppServices, Clock};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt};
use ui::{App, UiApp, build_app_context};

const ENV_QUESTIONS: &str = "PHISHSHIELD_QUESTIONS";
const ENV_THEME: &str = "PHISHSHIELD_THEME";
const ENV_SEED: &str = "PHISHSHIELD_SEED";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTheme { raw: String },
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTheme { raw } => {
                write!(f, "invalid --theme value: {raw} (expected light or dark)")
            }
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  phishshield [--questions <path>] [--theme <light|dark>] [--seed <u64>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  questions bundled with the binary, light theme, random order");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {ENV_QUESTIONS}, {ENV_THEME}, {ENV_SEED}, RUST_LOG");
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    questions: Option<PathBuf>,
    theme: Theme,
    seed: Option<u64>,
    help: bool,
}

fn parse_theme(raw: String) -> Result<Theme, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidTheme { raw })
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidSeed { raw })
}

impl Args {
    /// Environment values are read first; flags override them.
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            questions: env(ENV_QUESTIONS)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            theme: env(ENV_THEME).map(parse_theme).transpose()?.unwrap_or_default(),
            seed: env(ENV_SEED).map(parse_seed).transpose()?,
            help: false,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    parsed.questions = Some(PathBuf::from(require_value(&mut args, "--questions")?));
                }
                "--theme" => parsed.theme = parse_theme(require_value(&mut args, "--theme")?)?,
                "--seed" => parsed.seed = Some(parse_seed(require_value(&mut args, "--seed")?)?),
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

struct DesktopApp {
    services: Arc<AppServices>,
    theme: Theme,
}

impl UiApp for DesktopApp {
    fn services(&self) -> Arc<AppServices> {
        Arc::clone(&self.services)
    }

    fn initial_theme(&self) -> Theme {
        self.theme
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_default();
    tracing_subscriber::registry()
        .with(tracing_fmt::layer())
        .with(env_filter)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok()).map_err(
        |e| {
            print_usage();
            e
        },
    )?;
    if args.help {
        print_usage();
        return Ok(());
    }

    init_tracing();

    let clock = Clock::system();
    let services = match &args.questions {
        Some(path) => AppServices::from_json_file(path.clone(), clock)?,
        None => AppServices::bundled(clock)?,
    }
    .with_seed(args.seed);
    let source = args
        .questions
        .as_ref()
        .map_or_else(|| "bundled".to_string(), |path| path.display().to_string());
    info!(
        source = %source,
        theme = %args.theme,
        seed = ?args.seed,
        "starting PhishShield"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services: Arc::new(services),
        theme: args.theme,
    });
    let context = build_app_context(&app);

    // Some dev setups default to an always-on-top window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("PhishShield")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
