use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{error, info, info_span};

use listing_ingest::read_rows;
use listing_model::CsvDialect;
use listing_output::write_rows;
use listing_transform::RecordTransformer;

use crate::cli::ConvertArgs;
use crate::summary::{apply_table_style, dialect_rows};
use crate::types::{ConvertResult, WrittenFile};

pub fn run_dialects() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Setting", "Input", "Output"]);
    apply_table_style(&mut table);
    for row in dialect_rows(&CsvDialect::input(), &CsvDialect::output()) {
        table.add_row(row);
    }
    println!("{table}");
    Ok(())
}

/// Reads, transforms and writes one product file.
///
/// An unreadable input aborts the run with an error. Write and report
/// failures are logged and recorded in the result instead.
pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let convert_span = info_span!(
        "convert",
        input = %args.input.display(),
        output = %args.output.display()
    );
    let _convert_guard = convert_span.enter();
    let start = Instant::now();

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let rows = read_rows(&args.input, &CsvDialect::input())
        .with_context(|| format!("read {}", args.input.display()))?;

    // =========================================================================
    // Stage 2: Transform
    // =========================================================================
    let transformed = RecordTransformer::new().transform_all(&rows);
    info!(
        rows = transformed.stats.rows,
        prices_not_found = transformed.stats.prices_not_found,
        dates_not_found = transformed.stats.dates_not_found,
        "Data modified"
    );

    let mut result = ConvertResult {
        input: args.input.clone(),
        output: args.output.clone(),
        rows_read: rows.len(),
        transform: transformed.stats,
        written: None,
        dry_run: args.dry_run,
        errors: Vec::new(),
        has_errors: false,
    };

    // =========================================================================
    // Stage 3: Output
    // =========================================================================
    if args.dry_run {
        info!("Dry run - skipping output");
    } else {
        match write_rows(&args.output, &transformed.rows, &CsvDialect::output()) {
            Ok(summary) => {
                result.written = Some(WrittenFile {
                    rows: summary.rows,
                    bytes: summary.bytes,
                    replaced_chars: summary.replaced_chars,
                });
            }
            Err(err) => {
                error!(error = %err, "Failed to write output");
                result.errors.push(err.to_string());
            }
        }
    }

    result.has_errors = !result.errors.is_empty();
    if let Some(report) = &args.report
        && let Err(err) = write_report(report, &result)
    {
        let message = format!("{err:#}");
        error!(error = %message, "Failed to write report");
        result.errors.push(message);
        result.has_errors = true;
    }

    info!(elapsed = ?start.elapsed(), "Conversion finished");
    Ok(result)
}

fn write_report(path: &Path, result: &ConvertResult) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create report {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, result)
        .with_context(|| format!("write report {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush report {}", path.display()))?;
    info!(path = %path.display(), "Wrote report");
    Ok(())
}
