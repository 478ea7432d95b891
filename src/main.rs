use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

mod browser;
mod conference;
mod config;
mod draft;
mod error;
mod export;
mod html;
mod model;
mod net;
mod palette;
mod render;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser, Debug)]
#[command(name = "draft-sankey")]
#[command(
    about = "NCAA -> NFL draft Sankey diagram (one link per player)",
    long_about = None
)]
pub struct Cli {
    /// Draft year, e.g. 2025.
    #[arg(long, default_value_t = 2025)]
    year: i32,

    /// Conference filter.
    #[arg(long, value_enum, default_value = "both")]
    confs: conference::ConferenceMode,

    /// Output HTML path (default: viz/cfb_sankey_{year}.html).
    #[arg(long)]
    out_html: Option<PathBuf>,

    /// Output CSV path for tidy data (default: data/cfb_nfl_{year}.csv).
    #[arg(long)]
    out_csv: Option<PathBuf>,

    /// Open the HTML in the default browser.
    #[arg(long)]
    open: bool,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cfg = config::RunConfig::from_cli(Cli::parse());
    info!(year = cfg.year, mode = ?cfg.mode, "starting");

    // 1) Fetch + extract. Nothing is written if this fails.
    let records = draft::fetch_year(cfg.year)?;

    // 2) Filter.
    let kept = conference::filter_conferences(&records, cfg.mode);
    info!(
        extracted = records.len(),
        kept = kept.len(),
        conferences = cfg.mode.label(),
        "filtered by conference"
    );

    // 3) Build outputs in memory.
    let tidy = model::tidy_records(&kept, cfg.year);
    let csv = export::tidy_csv_string(&tidy);
    let sankey = model::build_sankey(&kept, cfg.year, &cfg.title())?;
    let html = render::render_sankey_html(&sankey)?;
    info!(
        nodes = sankey.nodes.label.len(),
        links = sankey.links.source.len(),
        "built sankey"
    );

    // 4) Persist.
    write_file(&cfg.out_csv, &csv)?;
    println!("Wrote {}", cfg.out_csv.display());
    write_file(&cfg.out_html, &html)?;
    println!("Wrote {}", cfg.out_html.display());

    if cfg.open {
        if let Err(e) = browser::open_file(&cfg.out_html) {
            warn!("could not open {}: {:#}", cfg.out_html.display(), e);
        }
    }

    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}
