use colored::Colorize;
use std::io::{self, Write};

use navcheck::{CheckReport, Validation};

/// Prints the check result to stdout
pub fn print(report: &CheckReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report)
}

pub fn write_report<W: Write>(out: &mut W, report: &CheckReport) -> io::Result<()> {
    let links = &report.links;

    match &links.outcome {
        Validation::Clean => {
            writeln!(
                out,
                "{} All {} internal menu links resolve ({} routes, {} entries exempt)",
                "✓".green().bold(),
                links.checked,
                report.routes.len(),
                links.exempt
            )?;
        }
        Validation::Missing(entries) => {
            writeln!(
                out,
                "{} {} of {} internal menu links do not resolve to a page:",
                "✗".red().bold(),
                entries.len(),
                links.checked
            )?;
            for entry in entries {
                writeln!(
                    out,
                    "  {} {} {}",
                    entry.label().bold(),
                    "→".dimmed(),
                    entry.href.as_deref().unwrap_or_default().yellow()
                )?;
            }

            writeln!(out)?;
            writeln!(out, "{}", "Known routes:".cyan())?;
            for route in report.routes.routes() {
                writeln!(out, "  {}  {}", route.template_path, route.pattern().dimmed())?;
            }
        }
    }

    Ok(())
}
