//! View command - render the parse result of a single payload file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::{debug, info};

use parseview_core::{
    Badge, DocumentKind, ParseResultView, RawParsedPayload, ViewBuilder, ViewConfig,
    decode_payload,
};

use super::load_config;

/// Arguments for the view command.
#[derive(Args)]
pub struct ViewArgs {
    /// Payload JSON file
    #[arg(required = true)]
    input: PathBuf,

    /// Document kind the payload belongs to
    #[arg(short, long, value_enum)]
    kind: KindArg,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum KindArg {
    Contract,
    Invoice,
}

impl From<KindArg> for DocumentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Contract => DocumentKind::Contract,
            KindArg::Invoice => DocumentKind::Invoice,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output of the summary rows
    Csv,
    /// Plain text summary
    Text,
}

/// A view together with its detail badge, as written in JSON output.
#[derive(Serialize)]
pub struct ViewOutput<'a> {
    #[serde(flatten)]
    pub view: &'a ParseResultView,
    pub badge: &'a Badge,
}

pub fn run(args: ViewArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Rendering payload: {}", args.input.display());

    let text = fs::read_to_string(&args.input)?;
    let value = decode_payload(&text)?;
    let payload = RawParsedPayload::new(value.as_ref());

    let builder = ViewBuilder::new().with_config(config);
    let view = builder.build(args.kind.into(), payload);
    let badge = builder.badge(payload);
    debug!("outcome {:?}, {} rows", view.outcome, view.rows.len());

    let output = format_view(&view, &badge, builder.config(), args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

pub fn format_view(
    view: &ParseResultView,
    badge: &Badge,
    config: &ViewConfig,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ViewOutput { view, badge })?),
        OutputFormat::Csv => format_csv(view),
        OutputFormat::Text => Ok(format_text(view, badge, config)),
    }
}

fn format_csv(view: &ParseResultView) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["key", "label", "value"])?;
    for row in &view.rows {
        wtr.write_record([row.key, row.label, row.value.as_str()])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(view: &ParseResultView, badge: &Badge, config: &ViewConfig) -> String {
    let placeholders = &config.placeholders;
    let mut output = String::new();

    output.push_str(&format!("Kind: {}\n", view.kind));
    output.push_str(&format!("Status: {} ({})\n", badge.label, view.outcome.as_str()));
    output.push_str(&format!("Message: {}\n", view.message));
    output.push('\n');

    output.push_str("Summary:\n");
    if view.has_rows() {
        for row in &view.rows {
            output.push_str(&format!("  {}: {}\n", row.label, row.value));
        }
    } else {
        output.push_str(&format!("  {}\n", placeholders.no_data));
    }
    output.push('\n');

    output.push_str("Raw text:\n");
    for line in view.raw_text_or(&placeholders.no_raw_text).lines() {
        output.push_str(&format!("  {}\n", line));
    }

    output
}
