//! Human-readable text report.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};

use crate::models::ResolvedDomain;

/// Renders one domain as a text block.
///
/// ```text
/// ---
///
/// Domain: example.com
///
/// Records:
///   NS	ns1.example.com
///   A	192.0.2.1
///
/// Reverse Lookup:
///   192.0.2.1	host.example.net.
/// ```
///
/// The reverse section is omitted when there are no reverse entries.
pub fn render_domain(domain: &ResolvedDomain) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "---");
    let _ = writeln!(out);
    let _ = writeln!(out, "Domain: {}", domain.name);
    let _ = writeln!(out);
    let _ = writeln!(out, "Records:");
    for record in &domain.records {
        let _ = writeln!(out, "  {record}");
    }

    if !domain.reverse_entries.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Reverse Lookup:");
        for entry in &domain.reverse_entries {
            let _ = writeln!(out, "  {entry}");
        }
    }

    out
}

/// Writes every domain block followed by a blank line.
pub fn write_text<W: Write>(writer: &mut W, domains: &[ResolvedDomain]) -> Result<()> {
    for domain in domains {
        writeln!(writer, "{}", render_domain(domain)).context("Failed to write text report")?;
    }
    writer.flush().context("Failed to flush text report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Record, RecordKind, ReverseEntry};

    fn domain() -> ResolvedDomain {
        ResolvedDomain {
            name: "example.com".to_string(),
            records: vec![
                Record::new(RecordKind::Ns, "ns1.example.com"),
                Record::new(RecordKind::A, "192.0.2.1"),
            ],
            reverse_entries: vec![],
        }
    }

    #[test]
    fn test_render_domain_without_reverse() {
        assert_eq!(
            render_domain(&domain()),
            "---\n\nDomain: example.com\n\nRecords:\n  NS\tns1.example.com\n  A\t192.0.2.1\n"
        );
    }

    #[test]
    fn test_render_domain_with_reverse() {
        let mut domain = domain();
        domain.reverse_entries.push(ReverseEntry {
            address: "192.0.2.1".to_string(),
            hostnames: vec!["a.example.net.".to_string(), "b.example.net.".to_string()],
        });
        let rendered = render_domain(&domain);
        assert!(rendered.ends_with(
            "  A\t192.0.2.1\n\nReverse Lookup:\n  192.0.2.1\ta.example.net., b.example.net.\n"
        ));
    }

    #[test]
    fn test_write_text_separates_blocks() {
        let mut second = domain();
        second.name = "www.example.com".to_string();
        second.records = vec![Record::new(RecordKind::Cname, "example.com")];

        let mut buf = Vec::new();
        write_text(&mut buf, &[domain(), second]).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert_eq!(output.matches("---\n").count(), 2);
        assert!(output.contains("  A\t192.0.2.1\n\n---\n"));
        assert!(output.ends_with("  CNAME\texample.com\n\n"));
    }

    #[test]
    fn test_write_text_empty_report() {
        let mut buf = Vec::new();
        write_text(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }
}
