//! Command-line front end: score the sections of one HTML document and print
//! the likely article content as text or JSON.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use articleparse::main_sections::{select_main_sections, MainSectionCriteria};
use articleparse::{Analyzer, HtmlSource, Options};
use clap::{Parser, ValueEnum};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "articleparse", about = "Heuristic article text extraction from HTML")]
struct Cli {
    /// Read HTML from a file
    #[arg(short, long, conflicts_with = "stdin")]
    file: Option<PathBuf>,

    /// HTML passed directly on the command line
    #[arg(long, conflicts_with_all = ["file", "stdin"])]
    html: Option<String>,

    /// Read HTML from standard input
    #[arg(long)]
    stdin: bool,

    /// JSON options file (fields not given keep their defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Minimum section length in characters (overrides the config file)
    #[arg(short = 'l', long)]
    min_length: Option<usize>,

    /// Only print sections with at least this probability
    #[arg(short = 'p', long, default_value_t = 0.8)]
    min_probability: f64,

    /// Select sections by length relative to the longest one (percent)
    /// instead of by probability
    #[arg(long)]
    main_sections: Option<f64>,

    /// Maximum anchor-density difference from the longest section when
    /// using --main-sections
    #[arg(long, default_value_t = 0.1)]
    max_anchor_delta: f64,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonSection<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    probability: Option<f64>,
    text: &'a str,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut options = match &cli.config {
        Some(path) => Options::from_file(path)
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => Options::default(),
    };
    if let Some(min_length) = cli.min_length {
        options.min_section_len = min_length;
    }

    let stdin = if cli.stdin {
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("reading HTML from stdin")?;
        Some(buffer)
    } else {
        None
    };
    let html = HtmlSource::resolve(cli.html.clone(), stdin, cli.file.clone())?.read()?;

    let analyzer = Analyzer::new(options);

    if let Some(min_relative_len) = cli.main_sections {
        let criteria = MainSectionCriteria {
            min_relative_len,
            max_anchor_delta: cli.max_anchor_delta,
        };
        let sections = analyzer.parse_sections(&html);
        let picked = select_main_sections(&sections, &criteria);
        let out: Vec<JsonSection<'_>> = picked
            .into_iter()
            .map(|text| JsonSection {
                position: None,
                probability: None,
                text,
            })
            .collect();
        return print(&out, cli.format);
    }

    let results = analyzer.analyze(&html);
    let out: Vec<JsonSection<'_>> = results
        .iter()
        .filter(|r| r.probability >= cli.min_probability)
        .map(|r| JsonSection {
            position: Some(r.position),
            probability: Some(r.probability),
            text: r.text.trim(),
        })
        .collect();
    print(&out, cli.format)
}

fn print(sections: &[JsonSection<'_>], format: Format) -> anyhow::Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(sections)?),
        Format::Text => {
            for section in sections {
                println!("{}\n", section.text.trim());
            }
        }
    }
    Ok(())
}
