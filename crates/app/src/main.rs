use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::Theme;
use services::{AppServices, QuizApi, QuizApiConfig, ThemeService};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DB_URL_ENV: &str = "QUIZ_DB_URL";
const LOG_ENV: &str = "QUIZ_LOG";
const DEFAULT_DB_URL: &str = "sqlite://wiki-quiz.sqlite3";
const WINDOW_TITLE: &str = "AI Wiki Quiz Generator";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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

struct DesktopApp {
    services: AppServices,
    initial_theme: Theme,
}

impl UiApp for DesktopApp {
    fn quiz_api(&self) -> Arc<dyn QuizApi> {
        self.services.quiz_api()
    }

    fn theme_service(&self) -> Arc<ThemeService> {
        self.services.theme()
    }

    fn initial_theme(&self) -> Theme {
        self.initial_theme
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--backend-url <url>] [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --backend-url {}", QuizApiConfig::DEFAULT_BASE_URL);
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {}, {DB_URL_ENV}, {LOG_ENV}", QuizApiConfig::BASE_URL_ENV);
}

struct Args {
    backend_url: Option<String>,
    db_url: String,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var(DB_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);
        let mut backend_url = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--backend-url" => {
                    backend_url = Some(require_value(args, "--backend-url")?);
                }
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            backend_url,
            db_url,
        })
    }

    fn gateway_config(&self) -> Result<QuizApiConfig, services::GatewayConfigError> {
        match &self.backend_url {
            Some(url) => QuizApiConfig::new(url.as_str()),
            None => QuizApiConfig::from_env(),
        }
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim();
    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = std::path::Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| format!("failed to initialize tracing subscriber: {err}"))?;
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    match argv.first().map(String::as_str) {
        Some("ui") => {
            argv.remove(0);
        }
        Some(first) if !first.starts_with('-') => {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            return Err(ArgsError::UnknownArg(first.to_string()).into());
        }
        _ => {}
    }

    let parsed = Args::parse(&mut argv.into_iter()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing()?;

    let config = parsed.gateway_config()?;
    info!(backend = %config.base_url, db = %parsed.db_url, "starting quiz client");

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(&parsed.db_url, config).await?;

    let initial_theme = services.theme().load().await.unwrap_or_else(|err| {
        warn!(error = %err, "could not load theme preference");
        Theme::default()
    });

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        initial_theme,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
