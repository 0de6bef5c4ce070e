use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, QuestionLoader, ShareService};
use storage::RestStoreConfig;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://trivia.sqlite3";
const DEFAULT_SHARE_BASE: &str = "http://localhost/";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidStoreUrl { raw: String },
    MissingStoreKey,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidStoreUrl { raw } => write!(f, "invalid --store-url value: {raw}"),
            ArgsError::MissingStoreKey => write!(f, "--store-url requires TRIVIA_STORE_KEY"),
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
    launch_game: Option<String>,
    launch_csv: Option<PathBuf>,
}

impl UiApp for DesktopApp {
    fn question_loader(&self) -> Arc<QuestionLoader> {
        self.services.loader()
    }

    fn share_service(&self) -> Arc<ShareService> {
        self.services.share_service()
    }

    fn launch_game(&self) -> Option<String> {
        self.launch_game.clone()
    }

    fn launch_csv(&self) -> Option<PathBuf> {
        self.launch_csv.clone()
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    store: Option<RestStoreConfig>,
    share_base: String,
    game: Option<String>,
    csv: Option<PathBuf>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--db <sqlite_url>] [--store-url <url>] [--share-base <url>]"
    );
    eprintln!("                     [--game <link-or-id>] [--csv <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --share-base {DEFAULT_SHARE_BASE}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRIVIA_DB_URL, TRIVIA_STORE_URL, TRIVIA_STORE_KEY, TRIVIA_SHARE_BASE_URL, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("TRIVIA_DB_URL")
            .ok()
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);
        let mut store = RestStoreConfig::from_env();
        let mut share_base = std::env::var("TRIVIA_SHARE_BASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SHARE_BASE.into());
        let mut game = None;
        let mut csv = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--store-url" => {
                    let value = require_value(args, "--store-url")?;
                    let key =
                        std::env::var("TRIVIA_STORE_KEY").map_err(|_| ArgsError::MissingStoreKey)?;
                    store = Some(
                        RestStoreConfig::new(value.clone(), key)
                            .ok_or(ArgsError::InvalidStoreUrl { raw: value })?,
                    );
                }
                "--share-base" => share_base = require_value(args, "--share-base")?,
                "--game" => game = Some(require_value(args, "--game")?),
                "--csv" => csv = Some(PathBuf::from(require_value(args, "--csv")?)),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            store,
            share_base,
            game,
            csv,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
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

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    let clock = Clock::default();
    let services = match parsed.store {
        Some(config) => {
            tracing::info!(base_url = %config.base_url, "using hosted share table");
            AppServices::new_remote(config, clock, &parsed.share_base)?
        }
        None => {
            // Open + migrate SQLite at startup; core and services never touch the filesystem.
            prepare_sqlite_file(&parsed.db_url)?;
            tracing::info!(db_url = %parsed.db_url, "using sqlite share store");
            AppServices::new_sqlite(&parsed.db_url, clock, &parsed.share_base).await?
        }
    };

    let app = DesktopApp {
        services,
        launch_game: parsed.game,
        launch_csv: parsed.csv,
    };
    let context = build_app_context(Arc::new(app));

    // Some dev setups default tao windows to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Trivia Game")
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
