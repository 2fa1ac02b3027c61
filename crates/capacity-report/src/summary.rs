// File: crates/capacity-report/src/summary.rs
// Summary: Fixed editorial findings printed after the figures are written.
// The findings are commentary, not computed from the charted series.

use std::io::{self, Write};

use crate::error::{ReportError, Result};

pub const CONFIRMATION: &str = "Scalability analysis graphs generated successfully!";

pub const FINDINGS: [&str; 5] = [
    "Single bus can handle up to 800 users safely on Spark plan",
    "Multiple buses require careful user distribution",
    "3+ buses with 1000+ users need Blaze plan",
    "Current optimizations reduce operations by ~66%",
    "Further optimizations could support 2000+ users on Spark plan",
];

pub fn write_summary<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{CONFIRMATION}")?;
    writeln!(out)?;
    writeln!(out, "Key Findings:")?;
    for (i, finding) in FINDINGS.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, finding)?;
    }
    out.flush()
}

/// Write the summary to stdout.
pub fn print_summary() -> Result<()> {
    write_summary(&mut io::stdout().lock()).map_err(ReportError::Stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_numbered_findings() {
        let mut buf = Vec::new();
        write_summary(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], CONFIRMATION);
        assert_eq!(lines[2], "Key Findings:");
        let numbered: Vec<&&str> = lines.iter().filter(|l| l.starts_with(|c: char| c.is_ascii_digit())).collect();
        assert_eq!(numbered.len(), 5);
        assert_eq!(*numbered[3], "4. Current optimizations reduce operations by ~66%");
    }
}
