use std::io::Write;

use anyhow::Result;

use cultivar_classifiers::artifact::ArtifactBundle;

/// Write a pretty JSON summary of a loaded bundle.
pub fn write_summary<W: Write>(bundle: &ArtifactBundle, mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, &bundle.summary())?;
    writeln!(out)?;
    Ok(())
}
