use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::render::helpers::fonts::FontFamily;

#[derive(Parser, Debug)]
#[command(name = "handover-pdf")]
#[command(
    author,
    version,
    about = "Render a vehicle handover inspection to a PDF report"
)]
pub struct Args {
    /// JSON handover store
    #[arg(required = true)]
    pub store: PathBuf,

    /// Id of the handover to render
    #[arg(required = true)]
    pub handover_id: String,

    /// Output PDF path (defaults to <registration>-handover.pdf)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Per-photo fetch timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<f32>,

    /// Number of photos fetched at once (1 = sequential)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=16))]
    pub concurrency: Option<u8>,

    /// Date printed in the page footers (YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long, value_parser = parse_date)]
    pub generated_on: Option<NaiveDate>,

    /// Font family for all report text
    #[arg(long, value_enum)]
    pub font: Option<FontChoice>,

    /// Do not repeat table headers on continuation pages
    #[arg(long)]
    pub no_repeat_header: bool,

    /// Skip the stream compression pass
    #[arg(long)]
    pub no_compress: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FontChoice {
    Helvetica,
    Times,
}

impl From<FontChoice> for FontFamily {
    fn from(choice: FontChoice) -> Self {
        match choice {
            FontChoice::Helvetica => FontFamily::SansSerif,
            FontChoice::Times => FontFamily::Serif,
        }
    }
}

impl Args {
    /// Get the output path, defaulting to the report's suggested filename
    pub fn output_path(&self, suggested_filename: &str) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(suggested_filename))
    }
}

/// Parse a footer date given as ISO or UK day-first
pub fn parse_date(spec: &str) -> Result<NaiveDate, String> {
    let spec = spec.trim();
    NaiveDate::parse_from_str(spec, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(spec, "%d/%m/%Y"))
        .map_err(|_| format!("Invalid date: {} (expected YYYY-MM-DD or DD/MM/YYYY)", spec))
}
