#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::logging::JsonlLayer;
use folio_core::ProjectRepository;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Projects loaded at startup, read once by the root component
static PROJECTS: OnceLock<ProjectRepository> = OnceLock::new();

/// Get the startup projects (supplied file or built-in defaults)
pub fn get_projects() -> ProjectRepository {
    PROJECTS.get().cloned().unwrap_or_default()
}

/// Folio - portfolio project showcase
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - portfolio project showcase")]
struct Args {
    /// JSON file with the project list (defaults to the built-in projects)
    #[arg(short, long)]
    projects: Option<PathBuf>,

    /// Write JSONL logs to this directory
    #[arg(long)]
    logs_dir: Option<PathBuf>,

    /// Write JSONL logs to the default data directory
    #[arg(long)]
    jsonl: bool,

    /// Session name used in the JSONL log file name
    #[arg(long, default_value = "desktop")]
    session: String,

    /// Window title
    #[arg(long, default_value = "Portfolio")]
    title: String,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(args.verbose)));

    let logs_dir = args.logs_dir.clone().or_else(|| {
        args.jsonl.then(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("folio")
                .join("logs")
        })
    });

    let jsonl = logs_dir.and_then(|dir| match JsonlLayer::new(&dir, &args.session) {
        Ok(layer) => Some(layer),
        Err(e) => {
            eprintln!("Failed to open JSONL log in {:?}: {}", dir, e);
            None
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(jsonl)
        .init();
}

fn load_projects(path: Option<&PathBuf>) -> ProjectRepository {
    let supplied = path.and_then(|path| match ProjectRepository::load_json(path) {
        Ok(repo) => Some(repo),
        Err(e) => {
            tracing::error!("Failed to load projects from {:?}: {}", path, e);
            None
        }
    });
    if supplied.as_ref().map_or(true, ProjectRepository::is_empty) {
        tracing::info!("Using built-in projects");
    }
    ProjectRepository::supplied_or_default(supplied)
}

fn main() {
    let args = Args::parse();
    init_logging(&args);

    let _ = PROJECTS.set(load_projects(args.projects.as_ref()));

    tracing::info!("Starting '{}'", args.title);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
