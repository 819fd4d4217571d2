use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use portfolio::{App, Catalog, Site, SiteConfig};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Personal portfolio site")]
struct Cli {
    /// Load the project catalog from a JSON file instead of the built-in one
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Validate the catalog, print a summary and exit without opening a window
    #[arg(long)]
    check: bool,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "portfolio=debug,info" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // The launcher may install its own subscriber later; first one wins.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let config = SiteConfig::load()?;

    let catalog = match &args.catalog {
        Some(path) => {
            info!(path = %path.display(), "loading catalog from file");
            Catalog::load(path)?
        }
        None => Catalog::embedded()?,
    };
    info!(projects = catalog.len(), "catalog loaded");

    if args.check {
        println!("\n=== Catalog ===");
        println!("Total projects: {}", catalog.len());
        for project in catalog.projects() {
            println!(
                "  {} -> {} ({} figures{}{})",
                project.path(),
                project.title,
                project.results_images.len(),
                if project.conclusion().is_some() { ", conclusion" } else { "" },
                if project.demo().is_some() { ", demo" } else { "" },
            );
        }
        return Ok(());
    }

    launch(Site::new(catalog, config))
}

#[cfg(feature = "desktop")]
fn launch(site: Site) -> anyhow::Result<()> {
    dioxus::LaunchBuilder::desktop()
        .with_context(site)
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Portfolio")),
        )
        .launch(App);
    Ok(())
}

#[cfg(not(feature = "desktop"))]
fn launch(_site: Site) -> anyhow::Result<()> {
    anyhow::bail!("built without a renderer, rebuild with the `desktop` feature")
}
