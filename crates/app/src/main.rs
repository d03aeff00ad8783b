use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, PlanStore};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://blueprint.sqlite3";
const DB_URL_ENV: &str = "BLUEPRINT_DB_URL";

#[derive(Debug, PartialEq, Eq)]
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
    plan_store: Arc<PlanStore>,
}

impl UiApp for DesktopApp {
    fn plan_store(&self) -> Arc<PlanStore> {
        Arc::clone(&self.plan_store)
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
}

/// What the command line asked for.
#[derive(Debug)]
enum Invocation {
    Launch(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {DB_URL_ENV}   database url used when --db is absent");
    eprintln!("  RUST_LOG           log filter (default: info)");
}

impl Args {
    fn parse(
        args: impl IntoIterator<Item = String>,
        env_db_url: Option<String>,
    ) -> Result<Invocation, ArgsError> {
        let mut args = args.into_iter().peekable();
        if args.peek().map(String::as_str) == Some("ui") {
            args.next();
        }

        let mut db_url = env_db_url
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.to_string(), normalize_sqlite_url);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--help" | "-h" => return Ok(Invocation::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Invocation::Launch(Self {
            db_url: normalize_sqlite_url(db_url),
        }))
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" {
        return raw;
    }

    let trimmed = raw.trim();
    let path_str = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed);
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

fn init_logging() {
    let default_level = "info";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1), std::env::var(DB_URL_ENV).ok())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
    let args = match parsed {
        Invocation::Launch(args) => args,
        Invocation::Help => {
            print_usage();
            return Ok(());
        }
    };

    // Open + migrate SQLite at startup so the UI only ever talks to services.
    prepare_sqlite_file(&args.db_url)?;
    let services = AppServices::new_sqlite(&args.db_url).await?;
    tracing::info!(db_url = %args.db_url, "launching workbook");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        plan_store: services.plan_store(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("The 2026 Blueprint")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
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

#[tokio::main]
async fn main() {
    init_logging();
    if let Err(err) = run().await {
        tracing::error!(error = %err, "startup failed");
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn launch(parsed: Result<Invocation, ArgsError>) -> Args {
        match parsed {
            Ok(Invocation::Launch(args)) => args,
            other => panic!("expected launch, got {other:?}"),
        }
    }

    #[test]
    fn defaults_to_absolute_blueprint_db() {
        let parsed = launch(Args::parse(args(&[]), None));
        assert!(parsed.db_url.starts_with("sqlite:///"), "{}", parsed.db_url);
        assert!(parsed.db_url.ends_with("/blueprint.sqlite3"));
    }

    #[test]
    fn flag_overrides_env_and_subcommand_is_optional() {
        let parsed = launch(Args::parse(
            args(&["ui", "--db", "sqlite:/tmp/plan.db"]),
            Some("sqlite:///tmp/env.db".into()),
        ));
        assert_eq!(parsed.db_url, "sqlite:///tmp/plan.db");

        let parsed = launch(Args::parse(args(&[]), Some("/tmp/env.db".into())));
        assert_eq!(parsed.db_url, "sqlite:///tmp/env.db");
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(
            Args::parse(args(&["--db"]), None).unwrap_err(),
            ArgsError::MissingValue { flag: "--db" }
        );
        assert_eq!(
            Args::parse(args(&["--db", " "]), None).unwrap_err(),
            ArgsError::InvalidDbUrl { raw: " ".into() }
        );
        assert_eq!(
            Args::parse(args(&["--verbose"]), None).unwrap_err(),
            ArgsError::UnknownArg("--verbose".into())
        );
        assert!(matches!(
            Args::parse(args(&["-h"]), None),
            Ok(Invocation::Help)
        ));
    }

    #[test]
    fn memory_url_is_left_alone() {
        assert_eq!(
            normalize_sqlite_url("sqlite::memory:".into()),
            "sqlite::memory:"
        );
        assert!(prepare_sqlite_file("sqlite::memory:").is_ok());
    }
}
