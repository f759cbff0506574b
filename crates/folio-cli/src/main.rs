//! Folio CLI
//!
//! Thin wrapper around folio-core for browsing the project showcase from a
//! terminal.
//!
//! ## Usage
//!
//! ```bash
//! # List filter categories with project counts
//! folio categories
//!
//! # List all projects, or only one category
//! folio list
//! folio list --category Mobile
//!
//! # Show one project, optionally with its mobile image
//! folio show 2
//! folio show 2 --alternate
//!
//! # Use a custom project file
//! folio --projects projects.json list
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{Platform, ProjectRepository, Showcase, ShowcaseEvent, ShowcaseView};

/// Folio - portfolio project showcase
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "Folio - browse a portfolio project showcase")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON file with the project list (default: built-in projects)
    #[arg(short, long, global = true)]
    projects: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List filter categories
    Categories,

    /// List projects
    List {
        /// Only projects in this category
        #[arg(short, long, default_value = "All")]
        category: String,
    },

    /// Show project details
    Show {
        /// Project id
        id: String,

        /// Show the alternate (mobile) image
        #[arg(short, long)]
        alternate: bool,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn load_repository(path: Option<&PathBuf>) -> Result<ProjectRepository> {
    let supplied = match path {
        Some(path) => Some(
            ProjectRepository::load_json(path)
                .with_context(|| format!("Failed to load projects from {}", path.display()))?,
        ),
        None => None,
    };
    Ok(ProjectRepository::supplied_or_default(supplied))
}

fn print_cards(view: &ShowcaseView) {
    let label = view.selected_filter().unwrap_or("All");
    if view.cards.is_empty() {
        println!("No projects in '{}'.", label);
        return;
    }

    println!("Projects in '{}' ({}):", label, view.cards.len());
    println!();
    for card in &view.cards {
        let featured = if card.featured { " [featured]" } else { "" };
        let alternate = if card.toggle.is_some() { " [mobile]" } else { "" };
        println!("  {} {}{}{}", card.id, card.title, featured, alternate);
        if !card.categories.is_empty() {
            println!("    {}", card.categories.join(", "));
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let mut showcase = Showcase::new(load_repository(cli.projects.as_ref())?);

    match cli.command {
        Commands::Categories => {
            let view = showcase.view();
            println!("Categories ({}):", view.filters.len());
            println!();
            for filter in &view.filters {
                println!("  {} ({})", filter.label, filter.count);
            }
        }

        Commands::List { category } => {
            showcase.dispatch(ShowcaseEvent::SelectCategory(category))?;
            print_cards(&showcase.view());
        }

        Commands::Show { id, alternate } => {
            showcase.dispatch(ShowcaseEvent::Activate(id.into()))?;
            if alternate {
                showcase.dispatch(ShowcaseEvent::ToggleDetailAlternate)?;
            }

            let Some(detail) = showcase.view().detail else {
                anyhow::bail!("No project open");
            };

            let platform = detail
                .toggle
                .map(|t| t.showing)
                .unwrap_or(Platform::Desktop);

            println!("Project: {}", detail.title);
            println!("  ID: {}", detail.id);
            if detail.categories.is_empty() {
                println!("  Categories: (none)");
            } else {
                println!("  Categories: {}", detail.categories.join(", "));
            }
            println!("  Description: {}", detail.description);
            println!("  Image ({}): {}", platform.label(), detail.image);
            if !detail.technologies.is_empty() {
                println!("  Technologies: {}", detail.technologies.join(", "));
            }
            if let Some(code) = &detail.links.code {
                println!("  Code: {}", code);
            }
            if let Some(demo) = &detail.links.demo {
                println!("  Demo: {}", demo);
            }
        }
    }

    Ok(())
}
