//! Batch command - render views and list badges for many record files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use parseview_core::{
    Badge, DocumentRecord, ParseResultView, ParsedDocument, ViewBuilder, list_badge,
};

use super::load_config;
use super::view::ViewOutput;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Record files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file views
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of rendering a single record.
struct RenderResult {
    path: PathBuf,
    rendered: Option<(ParseResultView, Badge)>,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("json")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to render",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let builder = ViewBuilder::new().with_config(config);
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        match render_record(&path, &builder) {
            Ok(rendered) => {
                if let Some(ref output_dir) = args.output_dir {
                    write_view(output_dir, &path, &rendered.0, &rendered.1)?;
                }
                results.push(RenderResult {
                    path,
                    rendered: Some(rendered),
                    error: None,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to render {}: {}", path.display(), error_msg);
                    results.push(RenderResult {
                        path,
                        rendered: None,
                        error: Some(error_msg),
                    });
                } else {
                    error!("Failed to render {}: {}", path.display(), error_msg);
                    pb.abandon();
                    anyhow::bail!("Rendering failed for {}: {}", path.display(), error_msg);
                }
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    if args.summary {
        let summary_dir = args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        let summary_path = summary_dir.join("summary.csv");
        fs::write(&summary_path, summary_csv(&results)?)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    println!(
        "{} Rendered {} files ({} failed) in {:.2?}",
        style("✓").green(),
        results.len() - failed,
        failed,
        start.elapsed()
    );

    Ok(())
}

fn render_record(path: &Path, builder: &ViewBuilder) -> anyhow::Result<(ParseResultView, Badge)> {
    let text = fs::read_to_string(path)?;
    let record: DocumentRecord = serde_json::from_str(&text)?;

    let view = builder.build(record.kind(), record.payload());
    let badge = list_badge(&record, &builder.config().labels);
    debug!("{}: {} -> {}", path.display(), view.outcome.as_str(), badge.label);

    Ok((view, badge))
}

fn write_view(
    output_dir: &Path,
    source: &Path,
    view: &ParseResultView,
    badge: &Badge,
) -> anyhow::Result<()> {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("record");
    let output_path = output_dir.join(format!("{}.view.json", stem));
    fs::write(output_path, serde_json::to_string_pretty(&ViewOutput { view, badge })?)?;
    Ok(())
}

fn summary_csv(results: &[RenderResult]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["file", "kind", "outcome", "badge", "severity", "error"])?;

    for result in results {
        let file = result.path.display().to_string();
        match &result.rendered {
            Some((view, badge)) => wtr.write_record([
                file.as_str(),
                view.kind.as_str(),
                view.outcome.as_str(),
                badge.label.as_str(),
                badge.severity.as_str(),
                "",
            ])?,
            None => wtr.write_record([
                file.as_str(),
                "",
                "",
                "",
                "",
                result.error.as_deref().unwrap_or(""),
            ])?,
        }
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
