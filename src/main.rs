mod generator;
mod icon;
mod logo;

use anyhow::Result;
use generator::{Outcome, Report};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    println!("Generating Nous PWA icons...\n");

    let output_dir = Path::new(logo::OUTPUT_DIR);
    let report = generator::generate_all(&logo::ICON_SIZES, logo::LOGO_SVG, output_dir)?;

    // Per-size failures are reported but do not change the exit status.
    for line in report_lines(&report, output_dir) {
        println!("{line}");
    }

    Ok(())
}

fn report_lines(report: &Report, output_dir: &Path) -> Vec<String> {
    let mut lines: Vec<String> = report
        .entries()
        .iter()
        .map(|(size, outcome)| match outcome {
            Outcome::Success => format!(
                "✓ Generated {}",
                generator::icon_path(output_dir, *size).display()
            ),
            Outcome::Failure(msg) => format!("✗ Failed to generate {size}x{size}: {msg}"),
        })
        .collect();

    lines.push(String::new());
    if report.all_succeeded() {
        lines.push("✓ All icons generated successfully!".to_string());
    } else {
        let failed = report.failures().count();
        lines.push(format!("✗ {report}, {failed} failed"));
    }
    lines.push(format!("Icons are saved in the {}/ folder.", output_dir.display()));
    lines
}
