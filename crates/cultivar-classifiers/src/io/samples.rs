//! Delimited sample reader for offline batch prediction.
use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::StringRecord;

use crate::artifact::FeatureSpec;

/// One data row, reduced to the declared feature columns as raw text.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRecord {
    /// 1-based data row number (header excluded).
    pub row: usize,
    pub fields: HashMap<String, String>,
}

/// Read a CSV (or TSV, by extension) whose header names the features.
///
/// Column order is free and extra columns are ignored, but every declared
/// feature must have a column. Values stay unparsed so each row can be
/// checked exactly like a form submission.
pub fn read_samples<P: AsRef<Path>>(path: P, features: &[FeatureSpec]) -> Result<Vec<SampleRecord>> {
    let path = path.as_ref();
    let delimiter = match path.extension().and_then(|s| s.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
        _ => b',',
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open sample file: {}", path.display()))?;

    let headers = reader
        .headers()
        .context("Failed to read sample header row")?
        .clone();

    let columns = features
        .iter()
        .map(|spec| {
            find_column(&headers, &spec.name)
                .map(|idx| (spec.name.as_str(), idx))
                .ok_or_else(|| anyhow!("Missing feature column '{}'", spec.name))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut samples = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        // Short rows leave the field out so it reports as missing.
        let fields = columns
            .iter()
            .filter_map(|&(name, idx)| record.get(idx).map(|v| (name.to_string(), v.to_string())))
            .collect();
        samples.push(SampleRecord {
            row: row_idx + 1,
            fields,
        });
    }

    Ok(samples)
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}
