//! Report rendering.
//!
//! Renders the resolved domains of a run as text blocks or as a JSON array.
//! Output goes to any `std::io::Write` (stdout in the binary).

mod json;
mod text;

use std::io::Write;

use anyhow::Result;

use crate::config::OutputFormat;
use crate::models::ResolvedDomain;

pub use json::write_json;
pub use text::{render_domain, write_text};

/// Writes `domains` to `writer` in the requested format.
pub fn write_report<W: Write>(
    writer: &mut W,
    domains: &[ResolvedDomain],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(writer, domains),
        OutputFormat::Json => write_json(writer, domains),
    }
}
