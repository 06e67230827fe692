//! Offline prediction of a sample file, row by row.
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use cultivar_classifiers::handler::RequestHandler;
use cultivar_classifiers::io::read_samples;

/// Counts reported once a batch has been written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub predicted: usize,
    pub rejected: usize,
}

/// Predict every row of `samples` and write a `row / prediction / error`
/// TSV to `out`. Rows are checked exactly like form submissions; a bad row
/// is reported in the `error` column and does not stop the batch.
pub fn run_predict<P: AsRef<Path>, W: Write>(
    handler: &RequestHandler,
    samples: P,
    out: W,
) -> Result<BatchSummary> {
    let records = read_samples(&samples, handler.bundle().features())?;
    log::info!(
        "Predicting {} samples from {}",
        records.len(),
        samples.as_ref().display()
    );

    let mut writer = csv::WriterBuilder::new().delimiter(b'\t').from_writer(out);
    writer.write_record(["row", "prediction", "error"])?;

    let mut summary = BatchSummary::default();
    for record in &records {
        let row = record.row.to_string();
        match handler.evaluate(&record.fields) {
            Ok(label) => {
                summary.predicted += 1;
                let label = label.to_string();
                writer.write_record([row.as_str(), label.as_str(), ""])?;
            }
            Err(e) => {
                summary.rejected += 1;
                log::warn!("Row {}: {e}", record.row);
                let message = e.to_string();
                writer.write_record([row.as_str(), "", message.as_str()])?;
            }
        }
    }
    writer.flush().context("Failed to write predictions")?;

    Ok(summary)
}
