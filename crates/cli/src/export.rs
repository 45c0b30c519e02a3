//! Artifact writers: transcript JSON and the CSV exports.
//!
//! Rendering and persistence live entirely in this binary; the core only
//! produces structured values.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use rootcheck_core::{Q88, SummaryTable, SweepResult};

/// Writes the full sweep transcript as pretty-printed JSON.
pub fn write_transcript(path: &Path, sweep: &SweepResult) -> Result<(), Box<dyn Error>> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, sweep)?;
    writer.flush()?;
    Ok(())
}

/// Writes the per-transaction results CSV.
///
/// The status column scores each vector against `pass_tolerance_lsb`, the
/// first declared tolerance of the run.
pub fn write_results_csv(
    path: &Path,
    sweep: &SweepResult,
    pass_tolerance_lsb: f64,
) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(
        writer,
        "input_decimal,input_hex,raw_hex,result_q88,expected_sqrt,abs_error,error_lsb,status"
    )?;

    for record in &sweep.records {
        match (record.response, record.expected) {
            (Some(raw), Some(expected)) => {
                let abs_error = (raw.to_f64() - expected).abs();
                let error_lsb = abs_error / Q88::LSB;
                let status = if error_lsb <= pass_tolerance_lsb {
                    "PASS"
                } else {
                    "FAIL"
                };
                writeln!(
                    writer,
                    "{},0x{:04X},0x{:04X},{:.4},{expected:.4},{abs_error:.6},{error_lsb:.2},{status}",
                    record.input,
                    record.input,
                    raw.raw(),
                    raw.to_f64(),
                )?;
            }
            (Some(raw), None) => {
                writeln!(
                    writer,
                    "{},0x{:04X},0x{:04X},{:.4},,,,-",
                    record.input,
                    record.input,
                    raw.raw(),
                    raw.to_f64(),
                )?;
            }
            (None, _) => {
                writeln!(
                    writer,
                    "{},0x{:04X},,,,,,TIMEOUT",
                    record.input, record.input,
                )?;
            }
        }
    }
    writer.flush()
}

/// Writes the per-transaction latency CSV.
pub fn write_latency_csv(path: &Path, sweep: &SweepResult) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(
        writer,
        "input_decimal,input_hex,raw_hex,latency_seconds,latency_ms"
    )?;

    for record in &sweep.records {
        let seconds = record.elapsed.as_secs_f64();
        match record.response {
            Some(raw) => writeln!(
                writer,
                "{},0x{:04X},0x{:04X},{seconds:.6},{:.3}",
                record.input,
                record.input,
                raw.raw(),
                seconds * 1000.0,
            )?,
            None => writeln!(
                writer,
                "{},0x{:04X},,{seconds:.6},{:.3}",
                record.input,
                record.input,
                seconds * 1000.0,
            )?,
        }
    }
    writer.flush()
}

/// Writes the merged summary table as CSV.
pub fn write_summary_csv(path: &Path, table: &SummaryTable) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "Category,Metric,Value,Description")?;
    for row in &table.rows {
        writeln!(
            writer,
            "{},{},{},{}",
            csv_field(&row.category.to_string()),
            csv_field(&row.metric),
            csv_field(&row.value),
            csv_field(&row.description),
        )?;
    }
    writer.flush()
}

/// Quotes a CSV field when it contains a separator, quote, or newline.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}
