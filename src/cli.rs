use clap::Parser;

use crate::application::dto::{ExportKind, OutputFormat};
use crate::rule_comparison::services::ViewFilter;

/// Compare SAP PI/PO receiver determination rules between environments
///
/// Exits with code 1 when differences are found, so the comparison can
/// gate CI and transport pipelines.
#[derive(Parser, Debug)]
#[command(name = "pipo-diff")]
#[command(version)]
#[command(about = "Compare SAP PI/PO receiver determination rules between environments", long_about = None)]
pub struct Args {
    /// Path to the development environment XML export
    pub dev_xml: String,

    /// Path to the production environment XML export
    pub prod_xml: String,

    /// Display format: table, markdown or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Category filter: all, differences or matching
    #[arg(long)]
    pub view: Option<ViewFilter>,

    /// Free-text filter over component names and conditions
    #[arg(short, long)]
    pub search: Option<String>,

    /// Write a CSV spreadsheet export instead of a display report:
    /// 'differences' or 'full'
    #[arg(short, long, value_name = "KIND")]
    pub export: Option<ExportKind>,

    /// Output file path (if not specified, reports go to stdout and
    /// exports to a dated file in the current directory)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to a config file (defaults to ./pipo-diff.config.yml when present)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
