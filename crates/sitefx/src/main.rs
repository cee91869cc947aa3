//! sitefx - replay page events against an HTML file
//!
//! Usage: sitefx <page.html> [--config <file.toml>] [--viewport <client>x<scroll>] [step...]

use anyhow::{bail, Context};
use sitefx::replay::{self, Step};
use sitefx::{Config, PageInteraction, SystemClock};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: sitefx <page.html> [--config <file.toml>] [--viewport <client>x<scroll>] [scroll:<px> | click:<id> | wait:<ms>]...";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let mut page_path = None;
    let mut config = Config::default();
    let mut viewport = None;
    let mut steps = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context(USAGE)?;
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config {path}"))?;
                config = Config::from_toml_str(&text).with_context(|| format!("loading config {path}"))?;
            }
            "--viewport" => {
                let value = args.next().context(USAGE)?;
                viewport = Some(replay::parse_viewport(&value)?);
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ if page_path.is_none() => page_path = Some(arg),
            _ => steps.push(Step::parse(&arg)?),
        }
    }

    let Some(page_path) = page_path else {
        bail!(USAGE);
    };

    let markup = std::fs::read_to_string(&page_path).with_context(|| format!("reading {page_path}"))?;
    let mut doc = sitefx::html::HtmlParser::new().parse_with_url(&markup, &page_path)?;
    if let Some(metrics) = viewport {
        doc.set_scroll_metrics(metrics);
    }

    tracing::info!("sitefx {} replaying {} steps on {}", sitefx::VERSION, steps.len(), page_path);
    let mut page = PageInteraction::setup(&mut doc, config, &SystemClock);
    for feature in page.report().skipped() {
        tracing::info!("{} skipped", feature);
    }

    replay::run(&mut page, &mut doc, &steps)?;
    println!("{}", sitefx::html::to_html(&doc));
    Ok(())
}
