mod cli;
mod logging;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, ContentService, ExerciseLoopService, ProgressService};
use ui::{App, UiApp, build_app_context};

use crate::cli::{Cli, Command};

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn content(&self) -> Arc<ContentService> {
        self.services.content()
    }

    fn exercises(&self) -> Arc<ExerciseLoopService> {
        self.services.exercises()
    }
}

fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed.to_string();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> anyhow::Result<()> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let Some(path) = db_url.strip_prefix("sqlite://") else {
        bail!("invalid --db value: {db_url}");
    };
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        bail!("invalid --db value: {db_url}");
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)
            .with_context(|| format!("creating {}", path.display()))?;
    }

    Ok(())
}

fn print_status(services: &AppServices) {
    let progress = services.progress().snapshot();
    let last_activity = progress
        .last_activity_date()
        .map_or_else(|| "never".to_string(), |day| day.to_string());

    println!("XP:                  {}", progress.xp());
    println!("Streak:              {} day(s)", progress.streak());
    println!("Last activity:       {last_activity}");
    println!("Lessons completed:   {}", progress.completed_lessons().len());
    println!("Exercises completed: {}", progress.completed_exercises().len());
    println!("Words mastered:      {}", progress.vocab_mastered().len());
    println!();

    for entry in services.content().unit_map(&progress) {
        let state = match (entry.unlocked, entry.has_content) {
            (false, _) => "locked",
            (true, false) => "coming soon",
            (true, true) => "open",
        };
        println!(
            "Unit {:>2}  {:<12} lessons {}  exercises {}  {}",
            entry.summary.id,
            state,
            entry.progress.lessons,
            entry.progress.exercises,
            entry.summary.title,
        );
    }
}

fn launch_desktop(services: AppServices) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Belajar!")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let db_url = normalize_sqlite_url(&cli.db_url);
    prepare_sqlite_file(&db_url)?;

    let services = AppServices::new_sqlite(&db_url, &cli.content_dir, Clock::default_clock())
        .await
        .with_context(|| {
            format!(
                "opening {db_url} with content from {}",
                cli.content_dir.display()
            )
        })?;
    tracing::info!(db = %db_url, content = %cli.content_dir.display(), "services ready");

    match cli.command() {
        Command::Ui => launch_desktop(services),
        Command::Status => print_status(&services),
        Command::Reset => {
            services.progress().reset().await;
            println!("Progress reset.");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log);

    if let Err(err) = run(cli).await {
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_urls_are_made_absolute() {
        assert_eq!(normalize_sqlite_url("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/belajar.db"),
            "sqlite:///tmp/belajar.db"
        );
        assert_eq!(normalize_sqlite_url("sqlite:/tmp/a.db"), "sqlite:///tmp/a.db");
        assert!(normalize_sqlite_url("data/a.db").starts_with("sqlite:///"));
    }

    #[test]
    fn prepare_creates_missing_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("progress.sqlite3");
        let url = format!("sqlite://{}", path.display());

        prepare_sqlite_file(&url).unwrap();
        assert!(path.exists());
        prepare_sqlite_file("sqlite::memory:").unwrap();
        assert!(prepare_sqlite_file("postgres://nope").is_err());
    }
}
