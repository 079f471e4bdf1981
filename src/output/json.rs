//! JSON report.

use std::io::Write;

use anyhow::{Context, Result};

use crate::models::ResolvedDomain;

/// Writes `domains` as a pretty-printed JSON array followed by a newline.
///
/// An empty run renders as `[]`.
pub fn write_json<W: Write>(writer: &mut W, domains: &[ResolvedDomain]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, domains).context("Failed to serialize report")?;
    writeln!(writer).context("Failed to write JSON report")?;
    writer.flush().context("Failed to flush JSON report")?;
    Ok(())
}
