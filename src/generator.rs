use crate::icon::{self, Renderer};
use anyhow::{Context, Result};
use image::RgbaImage;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// Per-size outcomes, in the order the sizes were requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<(u32, Outcome)>,
}

impl Report {
    pub fn entries(&self) -> &[(u32, Outcome)] {
        &self.entries
    }

    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_success()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.entries.iter().filter_map(|(size, outcome)| match outcome {
            Outcome::Failure(msg) => Some((*size, msg.as_str())),
            Outcome::Success => None,
        })
    }

    pub fn all_succeeded(&self) -> bool {
        self.entries.iter().all(|(_, o)| o.is_success())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} icons generated", self.succeeded(), self.entries.len())
    }
}

pub fn icon_path(output_dir: &Path, size: u32) -> PathBuf {
    output_dir.join(format!("icon-{size}x{size}.png"))
}

/// Render `svg` at every size in `sizes` and write each icon into `output_dir`.
///
/// Only a failure to create `output_dir` aborts the run. Rendering and I/O
/// failures are recorded per size and the loop moves on.
pub fn generate_all(sizes: &[u32], svg: &str, output_dir: &Path) -> Result<Report> {
    let renderer = Renderer::new();
    generate_with(sizes, output_dir, |size| renderer.render(svg, size))
}

pub fn generate_with<F>(sizes: &[u32], output_dir: &Path, mut render: F) -> Result<Report>
where
    F: FnMut(u32) -> Result<RgbaImage>,
{
    fs::create_dir_all(output_dir).with_context(|| {
        format!("cannot create output directory {}", output_dir.display())
    })?;

    let mut report = Report::default();
    for &size in sizes {
        let path = icon_path(output_dir, size);
        let outcome = match render(size).and_then(|img| icon::write_png(&path, &img)) {
            Ok(()) => {
                log::debug!("Wrote {}", path.display());
                Outcome::Success
            }
            Err(e) => {
                log::warn!("Icon {size}x{size} failed: {e:#}");
                Outcome::Failure(format!("{e:#}"))
            }
        };
        report.entries.push((size, outcome));
    }

    log::debug!("{report} in {}", output_dir.display());
    Ok(report)
}
