use std::io::Write;

use anyhow::Result;
use colored::*;

use crate::types::ObjectReport;

// Output a report as JSON
pub fn output_json(report: &ObjectReport, out: &mut dyn Write) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

// Output a report as text: the type name, then the member names on one line
pub fn output_text(report: &ObjectReport, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{} {}", "Class Name:".bold(), report.type_name.cyan().bold())?;
    writeln!(out, "{:?}", report.member_names())?;
    Ok(())
}
