//! Markdown report generation
//!
//! This module writes a human-readable markdown version of the crawl report,
//! with run statistics, not-found pages and skipped requests.

use crate::output::report::CrawlReport;
use crate::output::OutputResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the markdown report to `output_path`
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(OutputError)` - Failed to create or write the file
pub fn write_markdown_report(report: &CrawlReport, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_report(report);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a crawl report as markdown
pub fn format_markdown_report(report: &CrawlReport) -> String {
    let stats = &report.statistics;
    let mut md = String::new();

    md.push_str("# Linkrot Report\n\n");

    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Started**: {}\n", stats.started_at.to_rfc3339()));
    md.push_str(&format!(
        "- **Finished**: {}\n",
        stats.finished_at.to_rfc3339()
    ));
    md.push_str(&format!(
        "- **Duration**: {} seconds\n\n",
        stats.duration_seconds()
    ));

    md.push_str("## Overall Statistics\n\n");
    md.push_str(&format!("- **Pages Requested**: {}\n", stats.pages_requested));
    md.push_str(&format!("- **Paths Visited**: {}\n", stats.paths_visited));
    md.push_str(&format!("- **Links Seen**: {}\n", stats.links_seen));
    md.push_str(&format!("- **Not Found**: {}\n", stats.not_found));
    md.push_str(&format!("- **Skipped**: {}\n\n", stats.skipped));

    md.push_str("## Not Found Pages\n\n");
    if report.not_found.is_empty() {
        md.push_str("No broken links found.\n\n");
    } else {
        md.push_str("| URL | Linked From |\n");
        md.push_str("|-----|-------------|\n");
        for record in &report.not_found {
            md.push_str(&format!(
                "| {} | {} |\n",
                escape_cell(&record.url),
                escape_cell(&record.from)
            ));
        }
        md.push('\n');
    }

    if !report.skipped.is_empty() {
        md.push_str("## Skipped Requests\n\n");
        md.push_str("| URL | Linked From | Reason |\n");
        md.push_str("|-----|-------------|--------|\n");
        for record in &report.skipped {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                escape_cell(&record.url),
                escape_cell(&record.from),
                escape_cell(&record.reason)
            ));
        }
        md.push('\n');
    }

    if !report.ignored.is_empty() {
        md.push_str(&format!(
            "## Ignored Schemes and Hosts ({})\n\n",
            report.ignored.len()
        ));
        for scope in &report.ignored {
            md.push_str(&format!("- `{}`\n", scope));
        }
        md.push('\n');
    }

    md
}

/// Keeps pipes inside table cells from breaking the row
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
