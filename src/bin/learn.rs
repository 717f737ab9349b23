use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use templater::text::normalize_whitespace;
use templater::{Segment, Templater, TemplaterConfig};
use tracing_subscriber::EnvFilter;

/// Learn a template from plain-text samples and print it
#[derive(Parser, Debug)]
#[command(name = "learn")]
#[command(version)]
#[command(about = "Induce a shared template from text samples", long_about = None)]
struct Cli {
    /// Shortest common run kept as a literal block
    #[arg(short = 'm', long = "min-block-size", default_value_t = 1)]
    min_block_size: usize,

    /// Token printed in place of each wildcard
    #[arg(long = "marker", default_value = "|||")]
    marker: String,

    /// Learn the files as-is, without collapsing whitespace
    #[arg(long = "raw")]
    raw: bool,

    /// Print one segment per line instead of the rendered template
    #[arg(long = "segments")]
    segments: bool,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    debug: bool,

    /// Sample files, learned in the order given
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let mut learner = Templater::new(TemplaterConfig {
        min_block_size: cli.min_block_size,
        marker: cli.marker.clone(),
    });

    for path in &cli.files {
        let bytes =
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let text = String::from_utf8_lossy(&bytes);
        let sample = if cli.raw {
            text.into_owned()
        } else {
            normalize_whitespace(&text)
        };
        tracing::debug!(path = %path.display(), chars = sample.chars().count(), "sample");
        learner
            .learn(&sample)
            .with_context(|| format!("learning {}", path.display()))?;
    }

    let Some(template) = learner.template() else {
        return Ok(());
    };
    if cli.segments {
        for seg in template.segments() {
            match seg {
                Segment::Literal(s) => println!("L {s:?}"),
                Segment::Wildcard => println!("W"),
            }
        }
    } else if let Some(rendered) = learner.render() {
        println!("{rendered}");
    }
    Ok(())
}
